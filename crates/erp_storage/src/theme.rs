use crate::client::ClientStorage;
use erp_error::{SettingsError, StorageError};
use erp_types::{ThemeColor, THEME_COLOR_KEY};
use std::sync::Arc;
use tracing::{info, warn};

/// Reads and writes the console accent color under the `theme-color` key
pub struct ThemeStore {
    storage: Arc<dyn ClientStorage>,
    default_color: ThemeColor,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn ClientStorage>, default_color: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            storage,
            default_color: default_color.parse()?,
        })
    }

    pub fn default_color(&self) -> &ThemeColor {
        &self.default_color
    }

    /// Stored color, or the configured default when nothing valid is stored
    pub fn theme_color(&self) -> ThemeColor {
        match self.storage.get_item(THEME_COLOR_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme color: {}", e);
                self.default_color.clone()
            }),
            Ok(None) => self.default_color.clone(),
            Err(e) => {
                warn!("Failed to read theme color: {}", e);
                self.default_color.clone()
            }
        }
    }

    pub fn set_theme_color(&self, color: &ThemeColor) -> Result<(), StorageError> {
        self.storage.set_item(THEME_COLOR_KEY, color.as_str())?;
        info!("Theme color set to {}", color);
        Ok(())
    }

    pub fn reset(&self) -> Result<(), StorageError> {
        self.storage.remove_item(THEME_COLOR_KEY)
    }
}
