//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages all user-editable settings of the event bus: transition timing
//! for visibility toggles, notification timing and capacity, which groups
//! of seed handlers get installed, and logging. Loads and saves settings as
//! TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::BusError;
use crate::logging::LoggerConfig;

/// Timing of the two-phase visibility transition.
///
/// `show` flips the target into its entry state and settles it after
/// `enter_delay`; `hide` starts the exit state and removes the target from
/// layout once `duration` has elapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Full transition window; the hidden end state lands after this.
    #[serde(with = "humantime_serde")]
    pub duration: Duration,

    /// Next-tick delay before an entering target settles to fully shown.
    #[serde(with = "humantime_serde")]
    pub enter_delay: Duration,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            enter_delay: Duration::from_millis(10),
        }
    }
}

/// Which groups of seed handlers `reset_to_defaults` installs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Button, cancel, card and custom-action acknowledgments.
    pub controls: bool,

    /// Form submission and input/switch/checkbox change logging.
    pub forms: bool,

    /// Home/about/services/contact route changes.
    pub navigation: bool,

    /// show/hide/toggle component visibility control.
    pub visibility: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            controls: true,
            forms: true,
            navigation: true,
            visibility: true,
        }
    }
}

impl SeedConfig {
    /// No seed handlers at all; an empty registry.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            controls: false,
            forms: false,
            navigation: false,
            visibility: false,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transitions: TransitionConfig,

    #[serde(default)]
    pub toasts: toastr::ToastConfig,

    #[serde(default)]
    pub seeds: SeedConfig,

    #[serde(default)]
    pub logging: LoggerConfig,
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults (and writes them out) when no file exists yet.
    pub async fn load() -> Result<Self, BusError> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path)
                .await
                .map_err(|e| BusError::config_io(&path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), BusError> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| BusError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str)
            .await
            .map_err(|e| BusError::config_io(&path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, BusError> {
        let proj_dirs = ProjectDirs::from("org", "example", "EBus")
            .ok_or_else(|| BusError::Other("Could not determine config directory.".to_string()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Returns the config directory (without filename).
    pub fn config_dir() -> Result<PathBuf, BusError> {
        let proj_dirs = ProjectDirs::from("org", "example", "EBus")
            .ok_or_else(|| BusError::Other("Could not determine config directory.".to_string()))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_timings() {
        let config = Config::default();

        assert_eq!(config.transitions.duration, Duration::from_millis(300));
        assert_eq!(config.transitions.enter_delay, Duration::from_millis(10));
        assert_eq!(config.toasts.auto_dismiss, Duration::from_secs(5));
        assert!(config.seeds.visibility);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [transitions]
            duration = "450ms"
            enter_delay = "10ms"

            [seeds]
            controls = true
            forms = true
            navigation = false
            visibility = true
            "#,
        )
        .expect("config fragment parses");

        assert_eq!(cfg.transitions.duration, Duration::from_millis(450));
        assert!(!cfg.seeds.navigation);
        // Untouched sections come from Default.
        assert_eq!(cfg.toasts.max_visible, toastr::ToastConfig::default().max_visible);
    }
}
