use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the settings file in the platform config directory.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// `settings.toml` under the platform config directory, or the current
    /// directory when no home directory can be resolved.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "SurgeryCalendar", "SurgeryCalendar") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}; using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Failed to load settings from {}", self.path.display()))?;

        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create settings directory {}", parent.display())
                })?;
            }
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Parse and validate settings from TOML text.
    pub fn parse(content: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(content).context("Invalid settings TOML")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }
}
