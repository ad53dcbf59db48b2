use crate::store::{require, Record};
use erp_error::RecordError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub code: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub manager: Option<String>,
    pub active: bool,
}

impl Default for Branch {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            code: String::new(),
            city: String::new(),
            address: String::new(),
            phone: String::new(),
            manager: None,
            active: true,
        }
    }
}

impl Record for Branch {
    const LABEL: &'static str = "Branch";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), RecordError> {
        require("Branch name", &self.name)?;
        require("Branch code", &self.code)?;
        require("City", &self.city)?;
        if !self.code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(RecordError::Validation(
                "Branch code may only contain letters, digits and dashes".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_validation() {
        let branch = Branch {
            name: "North Depot".to_string(),
            code: "NTH-01".to_string(),
            city: "Monterrey".to_string(),
            ..Default::default()
        };
        assert!(branch.validate().is_ok());
        assert!(branch.active);

        let bad_code = Branch {
            code: "NTH 01".to_string(),
            ..branch.clone()
        };
        assert!(bad_code.validate().is_err());

        let no_city = Branch {
            city: String::new(),
            ..branch
        };
        assert_eq!(
            no_city.validate(),
            Err(RecordError::Validation("City is required".to_string()))
        );
    }
}
