//! Visibility-driven playback controller.
//!
//! On each polling tick the controller snapshots the window list, measures
//! per-monitor occlusion by valid windows, and drives the rendering engines'
//! mute/pause state through the sink. Side effects fire only on decision
//! edges, so a settled desktop produces no sink traffic at all.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::constants::{DEFAULT_POLL_COOLDOWN_MS, DEFAULT_STARTUP_GRACE_SECS};
use crate::coverage;
use crate::error::AppError;
use crate::models::{Monitor, WindowId};
use crate::platform::WindowSystem;
use crate::registry::MonitorRegistry;
use crate::sink::RenderSink;

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Ticks arriving faster than this are no-ops, decoupling evaluation
    /// cadence from however often the host event loop fires timers.
    pub poll_cooldown: Duration,
    /// No mute/pause call is issued for this long after construction, so
    /// engines mid-registration are not interrupted by a premature decision.
    pub startup_grace: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_cooldown: Duration::from_millis(DEFAULT_POLL_COOLDOWN_MS),
            startup_grace: Duration::from_secs(DEFAULT_STARTUP_GRACE_SECS),
        }
    }
}

pub struct VisibilityController<W: WindowSystem> {
    window_system: W,
    registry: MonitorRegistry,
    config: ControllerConfig,
    started_at: Instant,
    last_evaluated: Option<Instant>,
}

impl<W: WindowSystem> VisibilityController<W> {
    pub fn new(window_system: W, registry: MonitorRegistry, config: ControllerConfig) -> Self {
        Self {
            window_system,
            registry,
            config,
            started_at: Instant::now(),
            last_evaluated: None,
        }
    }

    pub fn registry(&self) -> &MonitorRegistry {
        &self.registry
    }

    /// Replace the monitor set after a display-topology change. Runtime
    /// state resets to unknown.
    pub fn rebuild_monitors(&mut self, monitors: Vec<Monitor>) {
        self.registry.rebuild(monitors);
    }

    /// Forget last-applied mute/pause state. Called when the host rebuilds
    /// its rendering engines so the next tick re-establishes both from
    /// scratch instead of trusting state applied to engines that no longer
    /// exist.
    pub fn reset_runtime(&mut self) {
        self.registry.reset_runtime();
    }

    /// One polling tick: snapshot, classify, measure, decide, apply.
    ///
    /// A failed window-list query aborts the tick with an error and leaves
    /// all prior state untouched; it is never treated as "all monitors now
    /// uncovered". Sink failures are logged per monitor and retried on the
    /// next tick.
    pub fn tick(&mut self, sink: &dyn RenderSink) -> Result<(), AppError> {
        let now = Instant::now();
        if let Some(last) = self.last_evaluated {
            if now.duration_since(last) < self.config.poll_cooldown {
                return Ok(());
            }
        }
        self.last_evaluated = Some(now);

        let windows = self.window_system.snapshot()?;

        // The wallpaper surfaces themselves never count as occluders;
        // engines may be recreated, so the id set is fresh each tick.
        let owned: HashSet<WindowId> = sink.window_ids().into_iter().collect();

        // Validity verdicts are cached per window for this tick only. A
        // window may legitimately change state between ticks, so nothing
        // carries over.
        let mut verdicts: HashMap<WindowId, bool> = HashMap::new();

        let mut coverage_map: Vec<(u32, f64)> = Vec::with_capacity(self.registry.monitors().len());
        for monitor in self.registry.monitors() {
            let mut max_coverage = 0.0f64;
            for window in &windows {
                if owned.contains(&window.id) {
                    continue;
                }
                if coverage::overlap_area(&window.rect, &monitor.rect) <= 0 {
                    continue;
                }
                let valid = *verdicts
                    .entry(window.id.clone())
                    .or_insert_with(|| self.window_system.is_valid(&window.id));
                if !valid {
                    continue;
                }
                max_coverage =
                    max_coverage.max(coverage::coverage_fraction(&window.rect, &monitor.rect));
            }
            coverage_map.push((monitor.id, max_coverage));
        }

        let grace_active = now.duration_since(self.started_at) < self.config.startup_grace;
        for (monitor_id, monitor_coverage) in coverage_map {
            self.apply_policy(sink, monitor_id, monitor_coverage, grace_active);
        }
        Ok(())
    }

    /// Turn one monitor's coverage fraction into mute/pause transitions.
    fn apply_policy(
        &mut self,
        sink: &dyn RenderSink,
        monitor_id: u32,
        monitor_coverage: f64,
        grace_active: bool,
    ) {
        let Some(monitor) = self.registry.monitor(monitor_id) else {
            return;
        };
        let mute_threshold = monitor.mute_threshold;
        let pause_threshold = monitor.pause_threshold;
        let performance_mode = monitor.performance_mode;

        let Some(state) = self.registry.runtime_mut(monitor_id) else {
            return;
        };
        state.last_coverage = monitor_coverage;

        if grace_active {
            // Decisions are computed but never applied during startup.
            return;
        }

        let should_mute = monitor_coverage > mute_threshold;
        if state.last_muted != Some(should_mute) {
            match sink.set_muted(monitor_id, should_mute) {
                Ok(()) => {
                    debug!(
                        "Monitor {monitor_id}: {} at {:.1}% coverage",
                        if should_mute { "muted" } else { "unmuted" },
                        monitor_coverage * 100.0
                    );
                    state.last_muted = Some(should_mute);
                }
                // State stays as-is so the same transition is retried
                // next tick; other monitors are unaffected.
                Err(e) => warn!("Mute call failed: {e}"),
            }
        }

        if performance_mode {
            let should_pause = monitor_coverage > pause_threshold;
            if should_pause != state.last_paused {
                match sink.set_paused(monitor_id, should_pause) {
                    Ok(()) => {
                        debug!(
                            "Monitor {monitor_id}: {} at {:.1}% coverage",
                            if should_pause { "paused" } else { "resumed" },
                            monitor_coverage * 100.0
                        );
                        state.last_paused = should_pause;
                    }
                    Err(e) => warn!("Pause call failed: {e}"),
                }
            }
        }
    }
}
