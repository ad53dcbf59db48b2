use crate::store::{require, Record, RecordStore};
use erp_error::RecordError;
use erp_notify::Toaster;
use erp_utils::utils::get_utc_date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    #[default]
    Pending,
    Processed,
    Paid,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            PayrollStatus::Pending => "pending",
            PayrollStatus::Processed => "processed",
            PayrollStatus::Paid => "paid",
        };
        write!(f, "{}", status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    pub id: String,
    pub employee_name: String,
    pub period: String,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub status: PayrollStatus,
    pub paid_on: Option<String>,
}

impl PayrollEntry {
    pub fn net_pay(&self) -> Decimal {
        self.base_salary + self.allowances - self.deductions
    }
}

impl Record for PayrollEntry {
    const LABEL: &'static str = "Payroll entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), RecordError> {
        require("Employee", &self.employee_name)?;
        require("Period", &self.period)?;

        for (field, amount) in [
            ("Base salary", self.base_salary),
            ("Allowances", self.allowances),
            ("Deductions", self.deductions),
        ] {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(RecordError::Validation(format!(
                    "{} cannot be negative",
                    field
                )));
            }
        }

        if self.net_pay() < Decimal::ZERO {
            return Err(RecordError::Validation(
                "Deductions exceed gross pay".to_string(),
            ));
        }
        Ok(())
    }
}

/// Payroll screen state: plain CRUD plus the pending -> processed -> paid flow
pub struct PayrollStore {
    store: RecordStore<PayrollEntry>,
}

impl PayrollStore {
    pub fn new(toaster: Toaster, latency: Duration) -> Self {
        Self {
            store: RecordStore::new(toaster, latency),
        }
    }

    pub fn list(&self) -> &[PayrollEntry] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&PayrollEntry> {
        self.store.get(id)
    }

    pub async fn add(&mut self, entry: PayrollEntry) -> Result<PayrollEntry, RecordError> {
        let entry = PayrollEntry {
            status: PayrollStatus::Pending,
            paid_on: None,
            ..entry
        };
        self.store.add(entry).await
    }

    /// Edit an entry's details. Status and payment date only move through `process` and `pay`.
    pub async fn update(&mut self, entry: PayrollEntry) -> Result<PayrollEntry, RecordError> {
        let entry = match self.store.get(&entry.id) {
            Some(stored) => PayrollEntry {
                status: stored.status,
                paid_on: stored.paid_on.clone(),
                ..entry
            },
            None => entry,
        };
        self.store.update(entry).await
    }

    pub async fn delete(&mut self, id: &str) -> Result<PayrollEntry, RecordError> {
        self.store.delete(id).await
    }

    fn expect_status(
        &self,
        id: &str,
        expected: PayrollStatus,
        action: &str,
    ) -> Result<(), RecordError> {
        let entry = self.store.get(id).ok_or_else(|| {
            self.store.fail(RecordError::NotFound {
                label: PayrollEntry::LABEL.to_string(),
                id: id.to_string(),
            })
        })?;

        if entry.status != expected {
            return Err(self.store.fail(RecordError::InvalidTransition {
                label: PayrollEntry::LABEL.to_string(),
                action: action.to_string(),
                status: entry.status.to_string(),
            }));
        }
        Ok(())
    }

    pub async fn process(&mut self, id: &str) -> Result<PayrollEntry, RecordError> {
        self.expect_status(id, PayrollStatus::Pending, "process")?;
        self.store.simulate().await;

        let entry = self.store.get_mut(id)?;
        entry.status = PayrollStatus::Processed;
        let entry = entry.clone();

        info!("Payroll entry {} processed", id);
        self.store.toaster().success(
            "Payroll processed",
            &format!("Payroll for {} has been processed", entry.employee_name),
        );
        Ok(entry)
    }

    pub async fn pay(&mut self, id: &str) -> Result<PayrollEntry, RecordError> {
        self.expect_status(id, PayrollStatus::Processed, "pay")?;
        self.store.simulate().await;

        let entry = self.store.get_mut(id)?;
        entry.status = PayrollStatus::Paid;
        entry.paid_on = Some(get_utc_date());
        let entry = entry.clone();

        info!("Payroll entry {} paid", id);
        self.store.toaster().success(
            "Payment completed",
            &format!("{} paid to {}", entry.net_pay(), entry.employee_name),
        );
        Ok(entry)
    }

    /// Process every pending entry in one simulated call
    pub async fn process_all(&mut self) -> Result<usize, RecordError> {
        let pending: Vec<String> = self
            .list()
            .iter()
            .filter(|e| e.status == PayrollStatus::Pending)
            .map(|e| e.id.clone())
            .collect();

        if pending.is_empty() {
            return Ok(0);
        }

        self.store.simulate().await;
        for id in &pending {
            self.store.get_mut(id)?.status = PayrollStatus::Processed;
        }

        info!("Processed {} payroll entries", pending.len());
        self.store.toaster().success(
            "Payroll processed",
            &format!("{} payroll entries processed", pending.len()),
        );
        Ok(pending.len())
    }

    pub fn total_net(&self, status: PayrollStatus) -> Decimal {
        self.list()
            .iter()
            .filter(|e| e.status == status)
            .map(|e| e.net_pay())
            .sum()
    }
}
