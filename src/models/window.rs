use crate::coverage::Rect;

/// Opaque window-manager handle, kept in the textual form the listing tool
/// reports (e.g. `0x03400007`) so it can be passed straight back to the
/// per-window attribute queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One on-screen window as reported by the window manager.
///
/// Snapshots are ephemeral: rebuilt from a fresh query every polling tick
/// and never carried across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub rect: Rect,
}

impl WindowSnapshot {
    pub fn new(id: impl Into<WindowId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}
