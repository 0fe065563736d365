//! X11 window-manager queries via the standard EWMH command-line tools.
//!
//! The window list comes from `wmctrl -lG`; per-window validity is decided
//! from `xprop` and `xwininfo` output. Every external call runs under a hard
//! timeout so a hung window manager cannot stall the host event loop.

use std::io;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};
use x11rb::connection::Connection;
use x11rb::protocol::randr::ConnectionExt as _;
use x11rb::protocol::xproto::ConnectionExt as _;

use super::types::{DetectedMonitor, WindowSystem};
use crate::constants::{MIN_RECORD_FIELDS, QUERY_TIMEOUT_MS};
use crate::coverage::Rect;
use crate::error::AppError;
use crate::models::{WindowId, WindowSnapshot};

pub struct X11WindowSystem {
    query_timeout: Duration,
}

impl X11WindowSystem {
    pub fn new() -> Self {
        Self {
            query_timeout: Duration::from_millis(QUERY_TIMEOUT_MS),
        }
    }

    #[cfg(test)]
    fn with_timeout(query_timeout: Duration) -> Self {
        Self { query_timeout }
    }

    /// Run one external query tool and capture stdout.
    fn query(&self, tool: &str, args: &[&str]) -> Result<String, AppError> {
        let mut cmd = Command::new(tool);
        cmd.args(args);

        let output = run_with_timeout(&mut cmd, self.query_timeout).map_err(|e| {
            AppError::QueryUnavailable {
                reason: format!("{tool}: {e}"),
            }
        })?;

        if !output.status.success() {
            return Err(AppError::QueryUnavailable {
                reason: format!("{tool} exited with {}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Per-window attribute query; failures are narrowed to the one window.
    fn query_window(&self, tool: &str, args: &[&str], id: &WindowId) -> Result<String, AppError> {
        self.query(tool, args).map_err(|e| AppError::AttributeQueryFailed {
            window: id.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for X11WindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSystem for X11WindowSystem {
    fn snapshot(&self) -> Result<Vec<WindowSnapshot>, AppError> {
        let listing = self.query("wmctrl", &["-lG"])?;

        let mut windows = Vec::new();
        for line in listing.lines() {
            match parse_window_record(line) {
                Some(window) => windows.push(window),
                None => {
                    if !line.trim().is_empty() {
                        debug!("Skipping malformed window record: {line:?}");
                    }
                }
            }
        }
        Ok(windows)
    }

    fn is_valid(&self, id: &WindowId) -> bool {
        let props = (|| -> Result<(String, String, String), AppError> {
            let state = self.query_window("xprop", &["-id", id.as_str(), "_NET_WM_STATE"], id)?;
            let window_type =
                self.query_window("xprop", &["-id", id.as_str(), "_NET_WM_WINDOW_TYPE"], id)?;
            let stats = self.query_window("xwininfo", &["-id", id.as_str(), "-stats"], id)?;
            Ok((state, window_type, stats))
        })();

        match props {
            Ok((state, window_type, stats)) => classify_window(&state, &window_type, &stats),
            Err(e) => {
                // Fail-safe: a window we cannot inspect never counts as an
                // occluder, so a transient tool error cannot mute the wallpaper.
                debug!("Treating window {id} as invalid: {e}");
                false
            }
        }
    }
}

/// Parse one `wmctrl -lG` record: `id desktop x y width height host title...`.
/// The title may contain spaces and is ignored. Records with fewer than six
/// fields, or with non-numeric geometry, yield `None`.
fn parse_window_record(line: &str) -> Option<WindowSnapshot> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_RECORD_FIELDS {
        return None;
    }

    let id = *fields.first()?;
    let x = fields.get(2)?.parse::<i32>().ok()?;
    let y = fields.get(3)?.parse::<i32>().ok()?;
    let width = fields.get(4)?.parse::<i32>().ok()?;
    let height = fields.get(5)?.parse::<i32>().ok()?;

    Some(WindowSnapshot::new(id, Rect::new(x, y, width, height)))
}

/// Decide validity from raw property dumps. A window is excluded when it is
/// hidden, is shell chrome (desktop/dock type), or is not currently mapped
/// and viewable.
fn classify_window(state: &str, window_type: &str, stats: &str) -> bool {
    if state.contains("_NET_WM_STATE_HIDDEN") {
        return false;
    }
    if window_type.contains("_NET_WM_WINDOW_TYPE_DESKTOP")
        || window_type.contains("_NET_WM_WINDOW_TYPE_DOCK")
    {
        return false;
    }
    if !stats.contains("IsViewable") {
        return false;
    }
    true
}

/// Run a command with a hard deadline, killing it on timeout. Timeouts are
/// reported as `io::ErrorKind::TimedOut`.
fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> io::Result<Output> {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()?;

    let deadline = Instant::now() + timeout;
    loop {
        if child.try_wait()?.is_some() {
            return child.wait_with_output();
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("command timed out after {}ms", timeout.as_millis()),
            ));
        }
        thread::sleep(Duration::from_millis(5));
    }
}

/// Scan connected outputs through RandR. Monitor ids are assigned by
/// enumeration order, matching how the registry keys runtime state.
pub fn detect_monitors() -> Result<Vec<DetectedMonitor>, AppError> {
    let (conn, screen_num) = x11rb::connect(None).map_err(|e| AppError::QueryUnavailable {
        reason: format!("X11 connection failed: {e}"),
    })?;

    let root = conn
        .setup()
        .roots
        .get(screen_num)
        .ok_or_else(|| AppError::Internal(format!("invalid X11 screen index {screen_num}")))?
        .root;

    let reply = conn
        .randr_get_monitors(root, true)
        .map_err(|e| AppError::Internal(format!("RandR monitor query failed: {e}")))?
        .reply()
        .map_err(|e| AppError::Internal(format!("RandR monitor reply failed: {e}")))?;

    let mut monitors = Vec::with_capacity(reply.monitors.len());
    for info in &reply.monitors {
        let name = conn
            .get_atom_name(info.name)
            .ok()
            .and_then(|cookie| cookie.reply().ok())
            .map_or_else(
                || format!("Display-{}", monitors.len()),
                |r| String::from_utf8_lossy(&r.name).into_owned(),
            );

        monitors.push(DetectedMonitor {
            name,
            rect: Rect::new(
                i32::from(info.x),
                i32::from(info.y),
                i32::from(info.width),
                i32::from(info.height),
            ),
            primary: info.primary,
        });
    }

    if monitors.is_empty() {
        warn!("RandR reported no monitors");
    }
    Ok(monitors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_record_valid() {
        let line = "0x03400007  0 0    0    2560 1440 mint  Mozilla Firefox";
        let window = parse_window_record(line).unwrap();
        assert_eq!(window.id.as_str(), "0x03400007");
        assert_eq!(window.rect, Rect::new(0, 0, 2560, 1440));
    }

    #[test]
    fn test_parse_window_record_negative_origin() {
        let line = "0x01e00004 -1 -1920 0 1920 1080 mint Desktop";
        let window = parse_window_record(line).unwrap();
        assert_eq!(window.rect.x, -1920);
    }

    #[test]
    fn test_parse_window_record_title_with_spaces_ignored() {
        let line = "0x0520000a  1 100 200 800 600 mint main.rs - Code - OSS";
        let window = parse_window_record(line).unwrap();
        assert_eq!(window.rect, Rect::new(100, 200, 800, 600));
    }

    #[test]
    fn test_parse_window_record_too_few_fields() {
        assert!(parse_window_record("0x03400007 0 0 0 2560").is_none());
        assert!(parse_window_record("").is_none());
    }

    #[test]
    fn test_parse_window_record_non_numeric_geometry() {
        assert!(parse_window_record("0x03400007 0 a b 2560 1440 mint x").is_none());
    }

    #[test]
    fn test_classify_hidden_window_invalid() {
        let state = "_NET_WM_STATE(ATOM) = _NET_WM_STATE_HIDDEN, _NET_WM_STATE_MAXIMIZED_VERT";
        assert!(!classify_window(state, "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_NORMAL", "IsViewable"));
    }

    #[test]
    fn test_classify_desktop_and_dock_invalid() {
        let desktop = "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_DESKTOP";
        let dock = "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_DOCK";
        assert!(!classify_window("", desktop, "IsViewable"));
        assert!(!classify_window("", dock, "IsViewable"));
    }

    #[test]
    fn test_classify_unmapped_invalid() {
        let stats = "xwininfo: Window id: 0x1 \"x\"\n  Map State: IsUnMapped";
        assert!(!classify_window("", "_NET_WM_WINDOW_TYPE_NORMAL", stats));
    }

    #[test]
    fn test_classify_normal_viewable_valid() {
        let state = "_NET_WM_STATE(ATOM) = _NET_WM_STATE_MAXIMIZED_VERT";
        let window_type = "_NET_WM_WINDOW_TYPE(ATOM) = _NET_WM_WINDOW_TYPE_NORMAL";
        let stats = "Map State: IsViewable";
        assert!(classify_window(state, window_type, stats));
    }

    #[test]
    fn test_run_with_timeout_captures_output() {
        let output = run_with_timeout(Command::new("echo").arg("hello"), Duration::from_secs(2))
            .unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[test]
    fn test_run_with_timeout_kills_slow_command() {
        let err = run_with_timeout(Command::new("sleep").arg("5"), Duration::from_millis(50))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn test_missing_tool_is_query_unavailable() {
        let system = X11WindowSystem::with_timeout(Duration::from_millis(100));
        let err = system
            .query("definitely-not-a-real-tool-xyz", &[])
            .unwrap_err();
        assert!(matches!(err, AppError::QueryUnavailable { .. }));
    }
}
