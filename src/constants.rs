// src/constants.rs

/// Default coverage fraction above which a monitor's wallpaper is muted
pub const DEFAULT_MUTE_THRESHOLD: f64 = 0.01;

/// Default coverage fraction above which rendering is paused (performance mode)
pub const DEFAULT_PAUSE_THRESHOLD: f64 = 0.6;

/// Minimum interval between evaluated polling ticks, in milliseconds
pub const DEFAULT_POLL_COOLDOWN_MS: u64 = 500;

/// Interval after controller construction during which no mute/pause
/// call is issued, in seconds
pub const DEFAULT_STARTUP_GRACE_SECS: u64 = 5;

/// Hard timeout for each external window-manager query, in milliseconds
pub const QUERY_TIMEOUT_MS: u64 = 200;

/// Minimum whitespace-delimited fields in a window-list record
/// (id, desktop, x, y, width, height)
pub const MIN_RECORD_FIELDS: usize = 6;

/// Name of the persisted settings file under the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";
