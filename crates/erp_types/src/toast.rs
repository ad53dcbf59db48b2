use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient notification banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub open: bool,
}

/// Partial toast used to merge changes into an existing toast
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub variant: Option<ToastVariant>,
    pub open: Option<bool>,
}

impl Toast {
    pub fn merge(&mut self, update: &ToastUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(variant) = update.variant {
            self.variant = variant;
        }
        if let Some(open) = update.open {
            self.open = open;
        }
    }
}
