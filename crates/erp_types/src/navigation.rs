use serde::{Deserialize, Serialize};

/// One entry of the sidebar menu. Groups have children, leaves have an href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Module whose `view` permission gates this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    pub fn group(title: &str, icon: &str, children: Vec<NavigationItem>) -> Self {
        NavigationItem {
            title: title.to_string(),
            icon: Some(icon.to_string()),
            href: None,
            module: None,
            children,
        }
    }

    pub fn link(title: &str, href: &str, module: &str) -> Self {
        NavigationItem {
            title: title.to_string(),
            icon: None,
            href: Some(href.to_string()),
            module: Some(module.to_string()),
            children: vec![],
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}
