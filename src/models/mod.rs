pub mod monitor;
pub mod window;

pub use monitor::{Monitor, MonitorRuntimeState};
pub use window::{WindowId, WindowSnapshot};
