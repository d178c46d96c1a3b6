use crate::error::{SettingsError, SettingsErrorExt};
use config::{Config, Environment, File, Map};
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings file looked up when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "adapter";

/// Prefix of environment variables overriding settings (`VV__VV__NAMET=Theta`).
pub const ENV_PREFIX: &str = "VV";

/// Loads the adapter settings document, layering environment overrides on top of a file.
///
/// 1. **Base File**: the given path, or `adapter` in the working directory. The format is
///    picked from the extension (TOML, YAML, JSON, ...); a bare name probes the known ones.
/// 2. **Environment Overrides**: variables prefixed with `VV__`; nested keys are separated by
///    double underscores. Their keys are lowercased, so `VV__VV__nameT` lands on `vv.namet`;
///    [`SettingsView`](crate::settings::SettingsView) checks that path before the file's
///    `VV.nameT`, so the override wins.
///
/// The document is returned unparsed: modules read it through
/// [`SettingsView`](crate::settings::SettingsView) with their own defaults.
///
/// # Errors
/// Returns [`SettingsError::Config`] if the file cannot be found or is malformed.
///
/// # Example
/// ```rust,no_run
/// use vv_kernel::config::load_settings;
/// use vv_kernel::settings::SettingsView;
///
/// let settings = load_settings(Some("config/adapter.toml")).unwrap();
/// let name_t: String = settings.lookup_or_default("VV", "nameT", "T".to_owned());
/// ```
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Config, SettingsError> {
    build_settings(path, environment())
}

/// Like [`load_settings`], but takes the overrides from `vars` instead of the process
/// environment. Names keep the `VV__` prefix.
///
/// # Errors
/// Returns [`SettingsError::Config`] if the file cannot be found or is malformed.
pub fn load_settings_with_env<I>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<Config, SettingsError>
where
    I: IntoIterator<Item = (String, String)>,
{
    build_settings(path, environment().source(Some(vars.into_iter().collect::<Map<_, _>>())))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__")
}

fn build_settings(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<Config, SettingsError> {
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading settings from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment)
        .build()
        .context("Failed to build settings")
}
