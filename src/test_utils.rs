//! Shared test doubles for the controller and platform seams.

#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::coverage::Rect;
use crate::error::AppError;
use crate::models::{Monitor, WindowId, WindowSnapshot};
use crate::platform::WindowSystem;
use crate::sink::RenderSink;

/// Scripted window-manager state. Tests pass `&FakeWindowSystem` to the
/// controller and mutate the fields between ticks.
#[derive(Debug, Default)]
pub struct FakeWindowSystem {
    pub windows: RefCell<Vec<WindowSnapshot>>,
    pub invalid: RefCell<HashSet<WindowId>>,
    pub fail_snapshot: Cell<bool>,
    pub snapshot_calls: Cell<usize>,
    pub validity_calls: RefCell<Vec<WindowId>>,
}

impl FakeWindowSystem {
    pub fn with_windows(windows: Vec<WindowSnapshot>) -> Self {
        let fake = Self::default();
        *fake.windows.borrow_mut() = windows;
        fake
    }

    pub fn mark_invalid(&self, id: impl Into<WindowId>) {
        self.invalid.borrow_mut().insert(id.into());
    }
}

impl WindowSystem for FakeWindowSystem {
    fn snapshot(&self) -> Result<Vec<WindowSnapshot>, AppError> {
        self.snapshot_calls.set(self.snapshot_calls.get() + 1);
        if self.fail_snapshot.get() {
            return Err(AppError::QueryUnavailable {
                reason: "simulated query failure".into(),
            });
        }
        Ok(self.windows.borrow().clone())
    }

    fn is_valid(&self, id: &WindowId) -> bool {
        self.validity_calls.borrow_mut().push(id.clone());
        !self.invalid.borrow().contains(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Muted(u32, bool),
    Paused(u32, bool),
}

/// Sink that records every invocation and can be told to reject calls.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: RefCell<Vec<SinkCall>>,
    pub owned: RefCell<Vec<WindowId>>,
    pub reject_muted: Cell<bool>,
    pub reject_paused: Cell<bool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl RenderSink for RecordingSink {
    fn window_ids(&self) -> Vec<WindowId> {
        self.owned.borrow().clone()
    }

    fn set_muted(&self, monitor_id: u32, muted: bool) -> Result<(), AppError> {
        if self.reject_muted.get() {
            return Err(AppError::SinkInvocation {
                monitor_id,
                action: "setMuted",
                reason: "simulated engine failure".into(),
            });
        }
        self.calls.borrow_mut().push(SinkCall::Muted(monitor_id, muted));
        Ok(())
    }

    fn set_paused(&self, monitor_id: u32, paused: bool) -> Result<(), AppError> {
        if self.reject_paused.get() {
            return Err(AppError::SinkInvocation {
                monitor_id,
                action: "setPaused",
                reason: "simulated engine failure".into(),
            });
        }
        self.calls.borrow_mut().push(SinkCall::Paused(monitor_id, paused));
        Ok(())
    }
}

/// Full-HD monitor at the given origin with default thresholds.
pub fn test_monitor(id: u32, x: i32, y: i32) -> Monitor {
    Monitor::new(id, format!("TEST-{id}"), Rect::new(x, y, 1920, 1080), id == 0)
        .expect("test monitor geometry is valid")
}

pub fn window(id: &str, x: i32, y: i32, width: i32, height: i32) -> WindowSnapshot {
    WindowSnapshot::new(id, Rect::new(x, y, width, height))
}
