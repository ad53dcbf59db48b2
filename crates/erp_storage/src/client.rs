use erp_error::StorageError;
use erp_settings::{ErpConfig, StorageType};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Key/value storage that outlives a session (the console's equivalent of browser local storage)
pub trait ClientStorage: Send + Sync {
    fn name(&self) -> &str;
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStorage for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(lock(&self.items).get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock(&self.items).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        lock(&self.items).remove(key);
        Ok(())
    }
}

/// Storage persisted as a single JSON object on disk.
/// Every write rewrites the whole file; a missing file reads as empty.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // serializes read-modify-write cycles within the process
    guard: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            guard: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::ReadError(format!("{}: {}", self.path.display(), e)))?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StorageError::ReadError(format!("{}: {}", self.path.display(), e)))
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::WriteError(format!("{}", e)))?;
            }
        }

        let contents =
            serde_json::to_string_pretty(items).map_err(|_| StorageError::SerializationError)?;

        fs::write(&self.path, contents)
            .map_err(|e| StorageError::WriteError(format!("{}: {}", self.path.display(), e)))
    }
}

impl ClientStorage for FileStorage {
    fn name(&self) -> &str {
        "FileStorage"
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = lock(&self.guard);
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = lock(&self.guard);
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)?;
        debug!("Stored key {} in {}", key, self.path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = lock(&self.guard);
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
            debug!("Removed key {} from {}", key, self.path.display());
        }
        Ok(())
    }
}

pub enum StorageClientEnum {
    Memory(MemoryStorage),
    File(FileStorage),
}

impl StorageClientEnum {
    pub fn new(config: &ErpConfig) -> Self {
        match config.storage_type() {
            StorageType::Memory => StorageClientEnum::Memory(MemoryStorage::new()),
            StorageType::File => StorageClientEnum::File(FileStorage::new(&config.storage_file())),
        }
    }

    fn inner(&self) -> &dyn ClientStorage {
        match self {
            StorageClientEnum::Memory(client) => client,
            StorageClientEnum::File(client) => client,
        }
    }
}

impl ClientStorage for StorageClientEnum {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner().get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner().set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner().remove_item(key)
    }
}

pub fn get_storage_system(config: &ErpConfig) -> Arc<dyn ClientStorage> {
    Arc::new(StorageClientEnum::new(config))
}
