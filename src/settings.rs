//! Viewer settings with persistence
//!
//! Settings are saved to `~/.config/tessera/settings.toml` unless a path is
//! given on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera_assets::LoadOptions;
use tessera_core::ShadingMode;
use tracing::{info, warn};

/// All viewer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub loader: LoadOptions,
    pub viewer: ViewerSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tessera"))
    }

    /// Get the default settings file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("Could not determine config directory");
                Self::default()
            }
        }
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::default_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }
}

/// Model cycling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Models shown in turn
    pub models: Vec<PathBuf>,
    /// Shown in place of a model that failed to load
    pub fallback_model: Option<PathBuf>,
    /// Seconds between model swaps (0 disables swapping)
    pub swap_interval: f32,
    /// Material the renderer should use
    pub shading: ShadingMode,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            fallback_model: None,
            swap_interval: 5.0,
            shading: ShadingMode::Lit,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `tessera_assets=debug`
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_assets::NormalMode;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.viewer.swap_interval, 5.0);
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "viewer = 12").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[loader]\nnormal_mode = \"accumulate\"\n\n[viewer]\nshading = \"normals\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.loader.normal_mode, NormalMode::Accumulate);
        assert_eq!(settings.viewer.shading, ShadingMode::Normals);
        assert_eq!(settings.viewer.swap_interval, 5.0);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.viewer.models = vec![PathBuf::from("monkey.obj"), PathBuf::from("sphere.obj")];
        settings.viewer.fallback_model = Some(PathBuf::from("error.obj"));
        settings.loader = LoadOptions::lenient();
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }
}
