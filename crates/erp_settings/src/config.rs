use erp_error::SettingsError;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const MEMORY_STORAGE_PATH: &str = ":memory:";

const DEFAULT_STORAGE_PATH: &str = "./erp_storage.json";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
const DEFAULT_TOAST_LIMIT: usize = 1;
const DEFAULT_TOAST_REMOVE_DELAY_MS: u64 = 1_000_000;
const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
const DEFAULT_THEME_COLOR: &str = "#0f172a";

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum StorageType {
    Memory,
    File,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::Memory => write!(f, "memory"),
            StorageType::File => write!(f, "file"),
        }
    }
}

impl std::str::FromStr for StorageType {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed_lowercase = s.trim().trim_matches('"').to_lowercase();
        match trimmed_lowercase.as_str() {
            "memory" => Ok(StorageType::Memory),
            "file" => Ok(StorageType::File),
            _ => Err(SettingsError::Error(format!(
                "Unsupported storage type: {}",
                s
            ))),
        }
    }
}

/// ErpConfig is the main configuration struct for the console.
/// Every value can be overridden through an environment variable.
#[derive(Debug, Clone)]
pub struct ErpConfig {
    pub app_name: String,
    pub app_env: String,
    pub app_version: String,
    pub storage_path: String,
    pub simulated_latency_ms: u64,
    pub toast_limit: usize,
    pub toast_remove_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub default_theme_color: String,
    pub log_level: String,
}

impl Default for ErpConfig {
    fn default() -> Self {
        ErpConfig::from_lookup(|key| env::var(key).ok())
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl ErpConfig {
    /// Build a config from an arbitrary key lookup. `Default` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ErpConfig {
            app_name: "erp-console".to_string(),
            app_env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            storage_path: lookup("ERP_STORAGE_PATH")
                .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string()),
            simulated_latency_ms: parse_or(
                lookup("ERP_SIMULATED_LATENCY_MS"),
                DEFAULT_SIMULATED_LATENCY_MS,
            ),
            toast_limit: parse_or(lookup("ERP_TOAST_LIMIT"), DEFAULT_TOAST_LIMIT),
            toast_remove_delay_ms: parse_or(
                lookup("ERP_TOAST_REMOVE_DELAY_MS"),
                DEFAULT_TOAST_REMOVE_DELAY_MS,
            ),
            toast_duration_ms: parse_or(
                lookup("ERP_TOAST_DURATION_MS"),
                DEFAULT_TOAST_DURATION_MS,
            ),
            default_theme_color: lookup("ERP_THEME_COLOR")
                .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
            log_level: lookup("ERP_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Config for tests and embedding: memory storage, no latency
    pub fn in_memory() -> Self {
        ErpConfig {
            storage_path: MEMORY_STORAGE_PATH.to_string(),
            simulated_latency_ms: 0,
            ..ErpConfig::from_lookup(|_| None)
        }
    }

    pub fn storage_type(&self) -> StorageType {
        if self.storage_path.trim() == MEMORY_STORAGE_PATH {
            StorageType::Memory
        } else {
            StorageType::File
        }
    }

    pub fn storage_file(&self) -> PathBuf {
        PathBuf::from(self.storage_path.trim())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn toast_remove_delay(&self) -> Duration {
        Duration::from_millis(self.toast_remove_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ErpConfig::from_lookup(|_| None);
        assert_eq!(config.app_name, "erp-console");
        assert_eq!(config.app_env, "development");
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.storage_path, "./erp_storage.json");
        assert_eq!(config.simulated_latency_ms, 1000);
        assert_eq!(config.toast_limit, 1);
        assert_eq!(config.toast_remove_delay_ms, 1_000_000);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.default_theme_color, "#0f172a");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.storage_type(), StorageType::File);
    }

    #[test]
    fn test_overrides() {
        let config = ErpConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("ERP_STORAGE_PATH", ":memory:"),
            ("ERP_SIMULATED_LATENCY_MS", "25"),
            ("ERP_TOAST_LIMIT", "3"),
            ("ERP_TOAST_REMOVE_DELAY_MS", "500"),
        ]));

        assert_eq!(config.app_env, "production");
        assert_eq!(config.storage_type(), StorageType::Memory);
        assert_eq!(config.simulated_latency(), Duration::from_millis(25));
        assert_eq!(config.toast_limit, 3);
        assert_eq!(config.toast_remove_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = ErpConfig::from_lookup(lookup_from(&[
            ("ERP_SIMULATED_LATENCY_MS", "soon"),
            ("ERP_TOAST_LIMIT", "-1"),
        ]));
        assert_eq!(config.simulated_latency_ms, 1000);
        assert_eq!(config.toast_limit, 1);
    }

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!("Memory".parse::<StorageType>().unwrap(), StorageType::Memory);
        assert_eq!(" \"file\" ".parse::<StorageType>().unwrap(), StorageType::File);
        assert!("s3".parse::<StorageType>().is_err());
    }

    #[test]
    fn test_in_memory() {
        let config = ErpConfig::in_memory();
        assert_eq!(config.storage_type(), StorageType::Memory);
        assert_eq!(config.simulated_latency(), Duration::ZERO);
    }
}
