pub mod config;
pub mod constants;
pub mod controller;
pub mod coverage;
pub mod error;
pub mod models;
pub mod platform;
pub mod registry;
pub mod sink;
#[cfg(test)]
mod test_utils;
pub mod validation;

pub use config::EngineConfig;
pub use controller::{ControllerConfig, VisibilityController};
pub use error::AppError;
pub use models::{Monitor, MonitorRuntimeState, WindowId, WindowSnapshot};
pub use registry::MonitorRegistry;
pub use sink::RenderSink;
