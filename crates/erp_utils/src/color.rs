use colored::{Color, Colorize};

/// Terminal tones used by the `erp` CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// #4b3978
    Brand,
    /// #04cd9b
    Success,
    Alert,
    Muted,
}

impl Tone {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tone::Brand => (75, 57, 120),
            Tone::Success => (4, 205, 155),
            Tone::Alert => (255, 0, 0),
            Tone::Muted => (128, 128, 128),
        }
    }

    fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::TrueColor { r, g, b }
    }
}

pub fn paint(text: &str, tone: Tone) -> String {
    text.color(tone.color()).to_string()
}

pub struct LogColors;

impl LogColors {
    pub fn purple(text: &str) -> String {
        paint(text, Tone::Brand)
    }

    pub fn green(text: &str) -> String {
        paint(text, Tone::Success)
    }

    pub fn alert(text: &str) -> String {
        paint(text, Tone::Alert)
    }

    pub fn muted(text: &str) -> String {
        paint(text, Tone::Muted)
    }
}
