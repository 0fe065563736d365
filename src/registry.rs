//! Registry of known display outputs and their playback runtime state.

use log::info;

use crate::models::{Monitor, MonitorRuntimeState};

/// Owns the set of monitors for the controller's lifetime. Geometry stays
/// fixed between rebuilds; runtime state is mutated by the playback policy
/// as decisions are applied.
#[derive(Debug, Default)]
pub struct MonitorRegistry {
    monitors: Vec<Monitor>,
    runtime: Vec<MonitorRuntimeState>,
}

impl MonitorRegistry {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        let runtime = monitors
            .iter()
            .map(|m| MonitorRuntimeState::new(m.id))
            .collect();
        Self { monitors, runtime }
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn monitor(&self, monitor_id: u32) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.id == monitor_id)
    }

    pub fn monitor_mut(&mut self, monitor_id: u32) -> Option<&mut Monitor> {
        self.monitors.iter_mut().find(|m| m.id == monitor_id)
    }

    pub fn runtime(&self, monitor_id: u32) -> Option<&MonitorRuntimeState> {
        self.runtime.iter().find(|s| s.monitor_id == monitor_id)
    }

    pub fn runtime_mut(&mut self, monitor_id: u32) -> Option<&mut MonitorRuntimeState> {
        self.runtime.iter_mut().find(|s| s.monitor_id == monitor_id)
    }

    /// Replace the whole monitor set after a display-topology change.
    ///
    /// All runtime state is discarded rather than matched up against the new
    /// set; stale per-monitor identifiers must not survive a re-scan.
    pub fn rebuild(&mut self, monitors: Vec<Monitor>) {
        info!(
            "Rebuilding monitor registry: {} -> {} monitors",
            self.monitors.len(),
            monitors.len()
        );
        self.runtime = monitors
            .iter()
            .map(|m| MonitorRuntimeState::new(m.id))
            .collect();
        self.monitors = monitors;
    }

    /// Reset runtime state to "unknown" without touching geometry. Used when
    /// the rendering engine set is recreated (hot-reload) so the next tick
    /// re-establishes mute/pause from scratch.
    pub fn reset_runtime(&mut self) {
        for state in &mut self.runtime {
            state.reset();
        }
    }
}
