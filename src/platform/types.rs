use crate::coverage::Rect;
use crate::error::AppError;
use crate::models::{WindowId, WindowSnapshot};

/// A display output as reported by the windowing system, before user
/// settings are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedMonitor {
    pub name: String,
    pub rect: Rect,
    pub primary: bool,
}

/// Source of window-manager state for one polling tick.
pub trait WindowSystem {
    /// Current on-screen window list with geometry. Zero windows is an empty
    /// Vec; `QueryUnavailable` only when the query tool itself is missing or
    /// its output is unusable as a whole. Individual malformed records are
    /// skipped, not fatal.
    fn snapshot(&self) -> Result<Vec<WindowSnapshot>, AppError>;

    /// Whether a window counts toward occlusion. Hidden windows, shell
    /// chrome (desktop/dock types), unmapped windows, and any window whose
    /// attributes cannot be queried are all invalid; a transient query
    /// failure must never produce a false "desktop is covered" decision.
    fn is_valid(&self, id: &WindowId) -> bool;
}

impl<W: WindowSystem + ?Sized> WindowSystem for &W {
    fn snapshot(&self) -> Result<Vec<WindowSnapshot>, AppError> {
        (**self).snapshot()
    }

    fn is_valid(&self, id: &WindowId) -> bool {
        (**self).is_valid(id)
    }
}
