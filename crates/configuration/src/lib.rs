use crate::error::ConfigError;
use std::collections::HashSet;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::{DEFAULT_LOG_DIRECTIVE, init_tracing};
pub use settings::{
    DEFAULT_ACCOUNT_ID, DeskConfig, EvaluationCatalog, MAX_SEED, ModelOption, PlatformOption,
    SeedTable, SizeOption,
};

/// Prefix for environment overrides, e.g. `VELOCITY_DEFAULT_ACCOUNT_ID`.
pub const ENV_PREFIX: &str = "VELOCITY";

/// Command-line arguments that locate the configuration file.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Path to the TOML configuration file. A missing file means built-in defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: std::path::PathBuf,
}

/// Loads the desk configuration from a TOML file plus `VELOCITY_*` environment overrides.
///
/// The file is optional and every section has a default, so loading from a
/// non-existent path yields `DeskConfig::default()`. The result is validated
/// before it is returned.
pub fn load_config(path: &Path) -> Result<DeskConfig, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    let config = builder.try_deserialize::<DeskConfig>()?;
    validate(&config)?;

    tracing::debug!(
        path = %path.display(),
        accounts = config.seeds.len(),
        default_account = %config.default_account_id,
        "Configuration loaded."
    );
    Ok(config)
}

/// Checks the invariants the generator and checkout rely on.
pub fn validate(config: &DeskConfig) -> Result<(), ConfigError> {
    if !config.seeds.contains(&config.default_account_id) {
        return Err(ConfigError::ValidationError(format!(
            "default account '{}' has no seed",
            config.default_account_id
        )));
    }
    if let Some((id, _)) = config.seeds.iter().find(|(_, seed)| *seed == 0) {
        return Err(ConfigError::ValidationError(format!(
            "seed for account '{}' must be positive",
            id
        )));
    }
    if let Some((id, seed)) = config.seeds.iter().find(|(_, seed)| *seed > MAX_SEED) {
        return Err(ConfigError::ValidationError(format!(
            "seed {} for account '{}' exceeds {}",
            seed, id, MAX_SEED
        )));
    }

    let catalog = &config.catalog;
    if catalog.models.is_empty() || catalog.sizes.is_empty() || catalog.platforms.is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog needs at least one model, size and platform".to_string(),
        ));
    }
    if catalog.models.iter().all(|m| m.coming_soon) {
        return Err(ConfigError::ValidationError(
            "catalog has no model available for purchase".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for size in &catalog.sizes {
        if !seen.insert(size.value) {
            return Err(ConfigError::ValidationError(format!(
                "account size {} is listed twice",
                size.value
            )));
        }
        if size.base_price.is_sign_negative() {
            return Err(ConfigError::ValidationError(format!(
                "base price for size {} is negative",
                size.value
            )));
        }
    }

    Ok(())
}
