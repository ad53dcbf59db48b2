use crate::store::{require, require_email};
use erp_error::RecordError;
use erp_notify::Toaster;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: Option<String>,
    pub currency: String,
}

impl CompanyProfile {
    pub fn validate(&self) -> Result<(), RecordError> {
        require("Company name", &self.name)?;
        require("Tax ID", &self.tax_id)?;
        require("Currency", &self.currency)?;
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(RecordError::Validation(format!(
                "{} is not an ISO currency code",
                self.currency
            )));
        }
        require_email(&self.email)
    }
}

/// The company screen edits a single profile
pub struct CompanyProfileStore {
    profile: Option<CompanyProfile>,
    toaster: Toaster,
    latency: Duration,
}

impl CompanyProfileStore {
    pub fn new(toaster: Toaster, latency: Duration) -> Self {
        Self {
            profile: None,
            toaster,
            latency,
        }
    }

    pub fn profile(&self) -> Option<&CompanyProfile> {
        self.profile.as_ref()
    }

    pub async fn save(&mut self, profile: CompanyProfile) -> Result<CompanyProfile, RecordError> {
        if let Err(e) = profile.validate() {
            self.toaster.error("Error", &e.to_string());
            return Err(e);
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.profile = Some(profile.clone());
        info!("Company profile saved for {}", profile.name);
        self.toaster
            .success("Success", "Company profile updated successfully");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CompanyProfile {
        CompanyProfile {
            name: "Acme Logistics".to_string(),
            legal_name: "Acme Logistics S.A. de C.V.".to_string(),
            tax_id: "ALO010101AB1".to_string(),
            email: "contact@acme.example".to_string(),
            currency: "MXN".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_profile() {
        let toaster = Toaster::new(1, Duration::from_secs(5), Duration::from_secs(1000));
        let mut store = CompanyProfileStore::new(toaster.clone(), Duration::ZERO);
        assert!(store.profile().is_none());

        store.save(profile()).await.unwrap();
        assert_eq!(store.profile().unwrap().name, "Acme Logistics");

        let bad = CompanyProfile {
            currency: "pesos".to_string(),
            ..profile()
        };
        assert!(store.save(bad).await.is_err());
        // previous profile kept
        assert_eq!(store.profile().unwrap().currency, "MXN");
        assert_eq!(
            toaster.toasts()[0].description.as_deref(),
            Some("pesos is not an ISO currency code")
        );
    }
}
