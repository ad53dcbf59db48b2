use erp_error::RecordError;
use erp_notify::Toaster;
use erp_utils::utils::new_record_id;
use std::time::Duration;
use tracing::{debug, info};

/// A business record owned by one screen
pub trait Record: Clone + Send + Sync {
    /// Human readable name used in notifications
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn validate(&self) -> Result<(), RecordError>;
}

/// Fails with a validation error when `value` is blank
pub fn require(field: &str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn require_email(value: &str) -> Result<(), RecordError> {
    require("Email", value)?;
    let valid = value
        .split_once('@')
        .map(|(user, domain)| !user.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !valid {
        return Err(RecordError::Validation(format!(
            "{} is not a valid email",
            value
        )));
    }
    Ok(())
}

/// Page-local list of records. Mutations wait out the simulated latency,
/// then always succeed, and report through a toast.
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    toaster: Toaster,
    latency: Duration,
}

impl<R: Record> RecordStore<R> {
    pub fn new(toaster: Toaster, latency: Duration) -> Self {
        Self {
            records: Vec::new(),
            toaster,
            latency,
        }
    }

    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Result<&mut R, RecordError> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RecordError::NotFound {
                label: R::LABEL.to_string(),
                id: id.to_string(),
            })
    }

    pub(crate) async fn simulate(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Toast the error and hand it back
    pub(crate) fn fail(&self, err: RecordError) -> RecordError {
        self.toaster.error("Error", &err.to_string());
        err
    }

    fn check(&self, record: &R) -> Result<(), RecordError> {
        record.validate().map_err(|e| self.fail(e))
    }

    fn ensure_exists(&self, id: &str) -> Result<(), RecordError> {
        if self.get(id).is_none() {
            return Err(self.fail(RecordError::NotFound {
                label: R::LABEL.to_string(),
                id: id.to_string(),
            }));
        }
        Ok(())
    }

    pub async fn add(&mut self, mut record: R) -> Result<R, RecordError> {
        self.check(&record)?;
        self.simulate().await;

        record.set_id(new_record_id());
        self.records.push(record.clone());

        info!("{} {} added", R::LABEL, record.id());
        self.toaster
            .success("Success", &format!("{} added successfully", R::LABEL));
        Ok(record)
    }

    pub async fn update(&mut self, record: R) -> Result<R, RecordError> {
        self.check(&record)?;
        self.ensure_exists(record.id())?;
        self.simulate().await;

        let slot = self.get_mut(record.id())?;
        *slot = record.clone();

        info!("{} {} updated", R::LABEL, record.id());
        self.toaster
            .success("Success", &format!("{} updated successfully", R::LABEL));
        Ok(record)
    }

    pub async fn delete(&mut self, id: &str) -> Result<R, RecordError> {
        self.ensure_exists(id)?;
        self.simulate().await;

        let position = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RecordError::NotFound {
                label: R::LABEL.to_string(),
                id: id.to_string(),
            })?;
        let removed = self.records.remove(position);

        debug!("{} {} deleted", R::LABEL, id);
        self.toaster
            .success("Success", &format!("{} deleted successfully", R::LABEL));
        Ok(removed)
    }
}
