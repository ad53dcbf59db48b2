use anyhow::{Context, Result as AnyhowResult};
use erp_logging::setup_logging;
use erp_settings::ErpConfig;
use erp_utils::color::LogColors;
use tracing::info;

/// Load config from the environment and, when asked, start logging
pub fn setup_components(with_logging: bool) -> AnyhowResult<ErpConfig> {
    let config = ErpConfig::default();

    if with_logging {
        setup_logging(&config.log_level)
            .context(LogColors::purple("Failed to setup logging"))?;
    }

    info!(
        "Starting {} {} ({})",
        config.app_name, config.app_version, config.app_env
    );
    info!("Storage: {} at {}", config.storage_type(), config.storage_path);

    Ok(config)
}
