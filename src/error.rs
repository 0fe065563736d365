use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("window list query unavailable: {reason}")]
    QueryUnavailable { reason: String },

    #[error("attribute query failed for window {window}: {reason}")]
    AttributeQueryFailed { window: String, reason: String },

    #[error("sink rejected {action} for monitor {monitor_id}: {reason}")]
    SinkInvocation {
        monitor_id: u32,
        action: &'static str,
        reason: String,
    },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// True for the failures that abort a whole polling tick, as opposed
    /// to per-window or per-monitor failures that only narrow it.
    pub fn aborts_tick(&self) -> bool {
        matches!(self, AppError::QueryUnavailable { .. })
    }
}
