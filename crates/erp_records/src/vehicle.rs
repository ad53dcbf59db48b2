use crate::store::{require, Record};
use erp_error::RecordError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub status: VehicleStatus,
    pub assigned_driver: Option<String>,
}

impl Record for Vehicle {
    const LABEL: &'static str = "Vehicle";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), RecordError> {
        require("Plate number", &self.plate_number)?;
        require("Make", &self.make)?;
        require("Model", &self.model)?;
        if !(1900..=2100).contains(&self.year) {
            return Err(RecordError::Validation(format!(
                "Year {} is out of range",
                self.year
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use erp_notify::Toaster;
    use erp_types::ToastVariant;
    use std::time::Duration;

    fn toaster() -> Toaster {
        Toaster::new(1, Duration::from_secs(5), Duration::from_secs(1000))
    }

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle {
            plate_number: plate.to_string(),
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: 2021,
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_waits_for_latency() {
        let toaster = toaster();
        let mut store = RecordStore::new(toaster.clone(), Duration::from_millis(1000));

        let start = tokio::time::Instant::now();
        let added = store.add(vehicle("ABC-123")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));

        assert!(!added.id.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&added.id).unwrap().plate_number, "ABC-123");

        let toasts = toaster.toasts();
        assert_eq!(toasts[0].description.as_deref(), Some("Vehicle added successfully"));
    }

    #[tokio::test]
    async fn test_validation_leaves_store_unchanged() {
        let toaster = toaster();
        let mut store = RecordStore::new(toaster.clone(), Duration::ZERO);
        store.add(vehicle("ABC-123")).await.unwrap();

        let err = store.add(vehicle("  ")).await.unwrap_err();
        assert_eq!(
            err,
            RecordError::Validation("Plate number is required".to_string())
        );
        assert_eq!(store.len(), 1);

        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert_eq!(toasts[0].description.as_deref(), Some("Plate number is required"));

        let bad_year = Vehicle {
            year: 1800,
            ..vehicle("XYZ-999")
        };
        assert!(store.add(bad_year).await.is_err());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mut store = RecordStore::new(toaster(), Duration::ZERO);
        let added = store.add(vehicle("ABC-123")).await.unwrap();

        let changed = Vehicle {
            status: VehicleStatus::Maintenance,
            ..added.clone()
        };
        store.update(changed).await.unwrap();
        assert_eq!(
            store.get(&added.id).unwrap().status,
            VehicleStatus::Maintenance
        );

        let removed = store.delete(&added.id).await.unwrap();
        assert_eq!(removed.id, added.id);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let mut store: RecordStore<Vehicle> = RecordStore::new(toaster(), Duration::ZERO);

        let err = store.delete("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Vehicle missing not found");

        let ghost = Vehicle {
            id: "missing".to_string(),
            ..vehicle("ABC-123")
        };
        assert!(matches!(
            store.update(ghost).await,
            Err(RecordError::NotFound { .. })
        ));
    }
}
