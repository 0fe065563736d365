use crate::constants::{DEFAULT_MUTE_THRESHOLD, DEFAULT_PAUSE_THRESHOLD};
use crate::coverage::Rect;
use crate::error::AppError;
use crate::validation::{validate_monitor_geometry, validate_threshold};

/// One display output.
///
/// Geometry is immutable after creation; it only changes through a full
/// registry rebuild when the display topology changes. The thresholds and
/// `performance_mode` come from user settings.
#[derive(Debug, Clone)]
pub struct Monitor {
    pub id: u32,
    pub name: String,
    pub rect: Rect,
    pub primary: bool,
    pub performance_mode: bool,
    pub mute_threshold: f64,
    pub pause_threshold: f64,
}

impl Monitor {
    pub fn new(id: u32, name: impl Into<String>, rect: Rect, primary: bool) -> Result<Self, AppError> {
        validate_monitor_geometry(rect.width, rect.height)?;
        Ok(Self {
            id,
            name: name.into(),
            rect,
            primary,
            performance_mode: false,
            mute_threshold: DEFAULT_MUTE_THRESHOLD,
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
        })
    }

    pub fn area(&self) -> i64 {
        self.rect.area()
    }

    pub fn set_mute_threshold(&mut self, value: f64) -> Result<(), AppError> {
        self.mute_threshold = validate_threshold("mute_threshold", value)?;
        Ok(())
    }

    pub fn set_pause_threshold(&mut self, value: f64) -> Result<(), AppError> {
        self.pause_threshold = validate_threshold("pause_threshold", value)?;
        Ok(())
    }
}

/// Mutable per-monitor playback state, written only by the playback policy.
///
/// `last_muted` starts as `None` ("unknown") so the first evaluated tick
/// always issues an explicit mute decision; it resets to `None` whenever the
/// engine set is rebuilt.
#[derive(Debug, Clone)]
pub struct MonitorRuntimeState {
    pub monitor_id: u32,
    pub last_muted: Option<bool>,
    pub last_paused: bool,
    pub last_coverage: f64,
}

impl MonitorRuntimeState {
    pub fn new(monitor_id: u32) -> Self {
        Self {
            monitor_id,
            last_muted: None,
            last_paused: false,
            last_coverage: 0.0,
        }
    }

    /// Forget everything; the next tick re-establishes mute/pause from scratch.
    pub fn reset(&mut self) {
        self.last_muted = None;
        self.last_paused = false;
        self.last_coverage = 0.0;
    }
}
