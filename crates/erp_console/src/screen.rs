use crate::console::Console;
use erp_records::{Branch, Record, RecordStore, UserAccount, Vehicle};
use erp_types::modules;

/// A record type with its own CRUD screen, gated by one module key
pub trait Screen: Record {
    const MODULE: &'static str;

    fn store(console: &Console) -> &RecordStore<Self>;
    fn store_mut(console: &mut Console) -> &mut RecordStore<Self>;
}

impl Screen for Vehicle {
    const MODULE: &'static str = modules::VEHICLES;

    fn store(console: &Console) -> &RecordStore<Self> {
        &console.vehicles
    }

    fn store_mut(console: &mut Console) -> &mut RecordStore<Self> {
        &mut console.vehicles
    }
}

impl Screen for Branch {
    const MODULE: &'static str = modules::BRANCHES;

    fn store(console: &Console) -> &RecordStore<Self> {
        &console.branches
    }

    fn store_mut(console: &mut Console) -> &mut RecordStore<Self> {
        &mut console.branches
    }
}

impl Screen for UserAccount {
    const MODULE: &'static str = modules::USERS;

    fn store(console: &Console) -> &RecordStore<Self> {
        &console.users
    }

    fn store_mut(console: &mut Console) -> &mut RecordStore<Self> {
        &mut console.users
    }
}
