pub mod branch;
pub mod company;
pub mod payroll;
pub mod store;
pub mod user_account;
pub mod vehicle;

pub use branch::Branch;
pub use company::{CompanyProfile, CompanyProfileStore};
pub use payroll::{PayrollEntry, PayrollStatus, PayrollStore};
pub use store::{Record, RecordStore};
pub use user_account::UserAccount;
pub use vehicle::{Vehicle, VehicleStatus};
