use serde::{Deserialize, Serialize};

/// A console user without credentials. This is what the session store persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub licensed_modules: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"id":"7","username":"ghost"}"#).unwrap();
        assert!(user.permissions.is_empty());
        assert!(user.licensed_modules.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let user = User {
            id: "1".to_string(),
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
            permissions: vec!["vehicles.view".to_string()],
            licensed_modules: vec!["vehicles".to_string()],
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["licensedModules"][0], "vehicles");
        assert!(value.get("password").is_none());
    }
}
