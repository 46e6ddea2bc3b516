use crate::persistence::{default_log_file, default_task_file};
use crate::ui::DEFAULT_INFO_WIDTH;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// User settings stored in config.json
///
/// Every key is optional; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub task_file: Option<PathBuf>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub info_width: Option<usize>,
}

/// Settings after defaults and command-line overrides are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub task_file: PathBuf,
    pub log_file: PathBuf,
    pub info_width: usize,
}

/// Default config location: <config dir>/task-manager/config.json
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("task-manager").join("config.json"))
}

/// Load settings from a config file (a missing file gives defaults)
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(settings)
}

impl Settings {
    /// Fill in defaults, letting explicit paths win over the file
    pub fn resolve(
        self,
        task_file: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Result<ResolvedSettings> {
        let task_file = match task_file.or(self.task_file) {
            Some(path) => path,
            None => default_task_file()?,
        };
        let log_file = match log_file.or(self.log_file) {
            Some(path) => path,
            None => default_log_file()?,
        };

        Ok(ResolvedSettings {
            task_file,
            log_file,
            info_width: self.info_width.unwrap_or(DEFAULT_INFO_WIDTH),
        })
    }
}
