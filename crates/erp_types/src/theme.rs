use erp_error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accent color of the console as a lowercase `#rgb` or `#rrggbb` hex string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ThemeColor {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| SettingsError::InvalidThemeColor(s.to_string()))?;

        let valid_len = digits.len() == 3 || digits.len() == 6;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SettingsError::InvalidThemeColor(s.to_string()));
        }

        Ok(ThemeColor(format!("#{}", digits.to_lowercase())))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(value: ThemeColor) -> Self {
        value.0
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_color() {
        assert_eq!("#FF8800".parse::<ThemeColor>().unwrap().as_str(), "#ff8800");
        assert_eq!(" #abc ".parse::<ThemeColor>().unwrap().as_str(), "#abc");

        assert!("ff8800".parse::<ThemeColor>().is_err());
        assert!("#ff88".parse::<ThemeColor>().is_err());
        assert!("#gggggg".parse::<ThemeColor>().is_err());
    }
}
