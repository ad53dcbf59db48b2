use erp_error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CRUD verb a permission grants on a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Edit, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "view" => Ok(Action::View),
            "create" => Ok(Action::Create),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            _ => Err(SettingsError::InvalidAction(s.to_string())),
        }
    }
}

/// `<module>.<action>` permission string. Compared by plain string equality.
pub struct Permission;

impl Permission {
    pub fn new(module: &str, action: Action) -> String {
        format!("{}.{}", module, action)
    }

    /// Every permission for every given module
    pub fn all_for(modules: &[&str]) -> Vec<String> {
        modules
            .iter()
            .flat_map(|module| Action::ALL.iter().map(|action| Permission::new(module, *action)))
            .collect()
    }
}
