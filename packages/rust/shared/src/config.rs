//! Application configuration for coursegrid.
//!
//! User config lives at `~/.coursegrid/coursegrid.toml`.
//! CLI flags override config file values, which override defaults.
//!
//! Institution tables (period labels, clock times) are never configured here;
//! they are compiled into each institution parser.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CourseGridError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "coursegrid.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".coursegrid";

// ---------------------------------------------------------------------------
// Config structs (matching coursegrid.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Institution parser used when none is given on the command line.
    #[serde(default = "default_institution")]
    pub institution: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            institution: default_institution(),
            pretty: default_true(),
        }
    }
}

fn default_institution() -> String {
    "gxic".into()
}
fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.coursegrid/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CourseGridError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.coursegrid/coursegrid.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CourseGridError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        CourseGridError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    init_config_in(&config_dir()?)
}

/// Write a default config file into `dir`, creating it if needed.
///
/// Fails with a config error if the file already exists; it is never overwritten.
pub fn init_config_in(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| CourseGridError::io(dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        tracing::warn!(?path, "config file already exists, not overwriting");
        return Err(CourseGridError::config(format!(
            "{} already exists; edit or remove it first",
            path.display()
        )));
    }

    let config = AppConfig::default();
    let content = toml::to_string_pretty(&config)
        .map_err(|e| CourseGridError::Serialization(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CourseGridError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
