use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`STAY__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "STAY";
const DEFAULT_CONFIG: &str = "stay";

/// Custom error type for config loading.
#[stay_derive::stay_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// 1. **Base File**: `path`, or `stay` (any supported extension) in the working directory.
///    The file is required.
/// 2. **Environment Overrides**: variables prefixed with `STAY__`; nested keys are separated by
///    double underscores (`STAY__LOGGING__LEVEL` maps to `logging.level`). Values are
///    parsed, so `STAY__LOGGING__CONSOLE=false` fills a boolean field.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed, or the
/// merged tree does not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use stay_kernel::config::load_config;
/// use stay_kernel::domain::config::StayConfig;
///
/// let cfg: StayConfig = load_config(Some("config/stay.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Shared by [`load_config`] and tests: `env` replaces the process environment when set.
fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
