//! Persisted per-monitor playback settings.
//!
//! Settings are keyed by monitor name so they survive display re-detection;
//! geometry always comes from the hardware scan, never from disk.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_MUTE_THRESHOLD, DEFAULT_PAUSE_THRESHOLD};
use crate::error::AppError;
use crate::models::Monitor;
use crate::platform::DetectedMonitor;
use crate::validation::validate_threshold;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    pub name: String,
    #[serde(default = "default_mute_threshold")]
    pub mute_threshold: f64,
    #[serde(default = "default_pause_threshold")]
    pub pause_threshold: f64,
    #[serde(default)]
    pub performance_mode: bool,
}

fn default_mute_threshold() -> f64 {
    DEFAULT_MUTE_THRESHOLD
}

fn default_pause_threshold() -> f64 {
    DEFAULT_PAUSE_THRESHOLD
}

impl MonitorSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mute_threshold: DEFAULT_MUTE_THRESHOLD,
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
            performance_mode: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub monitors: Vec<MonitorSettings>,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn settings_for(&self, name: &str) -> Option<&MonitorSettings> {
        self.monitors.iter().find(|m| m.name == name)
    }

    /// Merge the detected hardware into the saved settings: known monitors
    /// keep their settings, newly attached ones get defaults appended.
    /// Returns true when anything was added (caller should persist).
    pub fn sync_with_hardware(&mut self, detected: &[DetectedMonitor]) -> bool {
        let mut changed = false;
        for hardware in detected {
            if self.settings_for(&hardware.name).is_none() {
                info!("New monitor detected: {}", hardware.name);
                self.monitors.push(MonitorSettings::new(&hardware.name));
                changed = true;
            }
        }
        changed
    }

    /// Build the monitor set for the registry: detected geometry joined with
    /// saved settings. Out-of-range saved thresholds are replaced with the
    /// defaults rather than rejected, so a hand-edited config cannot keep
    /// the engine from starting.
    pub fn build_monitors(&self, detected: &[DetectedMonitor]) -> Result<Vec<Monitor>, AppError> {
        let mut monitors = Vec::with_capacity(detected.len());
        for (index, hardware) in detected.iter().enumerate() {
            let id = u32::try_from(index)
                .map_err(|_| AppError::Internal("monitor index overflow".into()))?;
            let mut monitor = Monitor::new(id, &hardware.name, hardware.rect, hardware.primary)?;

            if let Some(settings) = self.settings_for(&hardware.name) {
                monitor.performance_mode = settings.performance_mode;
                apply_threshold(&mut monitor, "mute_threshold", settings.mute_threshold);
                apply_threshold(&mut monitor, "pause_threshold", settings.pause_threshold);
            }
            monitors.push(monitor);
        }
        Ok(monitors)
    }
}

fn apply_threshold(monitor: &mut Monitor, field: &'static str, value: f64) {
    match validate_threshold(field, value) {
        Ok(value) => {
            if field == "mute_threshold" {
                monitor.mute_threshold = value;
            } else {
                monitor.pause_threshold = value;
            }
        }
        Err(e) => warn!("Ignoring saved {field} for {}: {e}", monitor.name),
    }
}

/// Default location of the settings file.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let proj_dirs = ProjectDirs::from("com", "wallpapery", "Wallpapery")
        .ok_or_else(|| AppError::Internal("could not determine project directories".into()))?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
