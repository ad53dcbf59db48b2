use crate::store::{require, require_email, Record};
use erp_error::RecordError;
use serde::{Deserialize, Serialize};

/// Row of the users screen. Not a login account: credentials live in the auth directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub branch_id: Option<String>,
    pub active: bool,
}

impl Record for UserAccount {
    const LABEL: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), RecordError> {
        require("Username", &self.username)?;
        require("Full name", &self.full_name)?;
        require("Role", &self.role)?;
        require_email(&self.email)
    }
}
