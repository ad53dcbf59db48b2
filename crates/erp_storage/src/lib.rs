pub mod client;
pub mod theme;

pub use client::{get_storage_system, ClientStorage, FileStorage, MemoryStorage, StorageClientEnum};
pub use theme::ThemeStore;
