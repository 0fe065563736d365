//! Interface to the per-monitor rendering engines.

use log::info;

use crate::error::AppError;
use crate::models::WindowId;

/// The set of active rendering engines, one per monitor. Implementations are
/// supplied by the host application and borrowed by the controller for the
/// duration of a tick; the controller never owns or destroys them.
///
/// `set_muted` and `set_paused` must be safe to call redundantly, though the
/// policy only calls them on decision edges.
pub trait RenderSink {
    /// Window ids owned by the rendering engines themselves. These are
    /// excluded from occlusion so the wallpaper never mutes itself; queried
    /// every tick because engines may be recreated.
    fn window_ids(&self) -> Vec<WindowId>;

    fn set_muted(&self, monitor_id: u32, muted: bool) -> Result<(), AppError>;

    fn set_paused(&self, monitor_id: u32, paused: bool) -> Result<(), AppError>;
}

/// Sink that only logs transitions. Used by the standalone watcher binary to
/// observe decisions without any rendering engines attached.
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn window_ids(&self) -> Vec<WindowId> {
        Vec::new()
    }

    fn set_muted(&self, monitor_id: u32, muted: bool) -> Result<(), AppError> {
        if muted {
            info!("Monitor {monitor_id}: muted (covered)");
        } else {
            info!("Monitor {monitor_id}: unmuted (clear)");
        }
        Ok(())
    }

    fn set_paused(&self, monitor_id: u32, paused: bool) -> Result<(), AppError> {
        if paused {
            info!("Monitor {monitor_id}: rendering paused");
        } else {
            info!("Monitor {monitor_id}: rendering resumed");
        }
        Ok(())
    }
}
