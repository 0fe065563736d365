pub mod types;

pub use types::{DetectedMonitor, WindowSystem};

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::{detect_monitors, X11WindowSystem as NativeWindowSystem};

// Stub for development on other platforms
#[cfg(not(target_os = "linux"))]
pub struct NativeWindowSystem;

#[cfg(not(target_os = "linux"))]
impl NativeWindowSystem {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_os = "linux"))]
impl Default for NativeWindowSystem {
    fn default() -> Self {
        Self
    }
}

#[cfg(not(target_os = "linux"))]
impl WindowSystem for NativeWindowSystem {
    fn snapshot(&self) -> Result<Vec<crate::models::WindowSnapshot>, crate::error::AppError> {
        Ok(Vec::new())
    }

    fn is_valid(&self, _id: &crate::models::WindowId) -> bool {
        false
    }
}

#[cfg(not(target_os = "linux"))]
pub fn detect_monitors() -> Result<Vec<DetectedMonitor>, crate::error::AppError> {
    Ok(Vec::new())
}
