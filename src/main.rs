//! Standalone visibility watcher.
//!
//! Runs the playback controller against a logging sink so decisions can be
//! observed without any rendering engines attached. The host application
//! embeds the controller the same way, substituting its engine sink.

use std::thread;
use std::time::Duration;

use log::{error, info, warn};

use wallpapery::config::{default_config_path, EngineConfig};
use wallpapery::controller::{ControllerConfig, VisibilityController};
use wallpapery::error::AppError;
use wallpapery::platform::{detect_monitors, NativeWindowSystem};
use wallpapery::registry::MonitorRegistry;
use wallpapery::sink::LogSink;

fn run() -> Result<(), AppError> {
    let config_path = default_config_path()?;
    let mut config = EngineConfig::load(&config_path)?;

    let detected = detect_monitors()?;
    info!("Detected {} monitor(s)", detected.len());

    if config.sync_with_hardware(&detected) {
        if let Err(e) = config.save(&config_path) {
            warn!("Could not persist settings to {}: {e}", config_path.display());
        }
    }

    let monitors = config.build_monitors(&detected)?;
    for monitor in &monitors {
        info!(
            "Monitor {} ({}): {}x{}+{}+{} mute>{:.3} pause>{:.2} performance_mode={}",
            monitor.id,
            monitor.name,
            monitor.rect.width,
            monitor.rect.height,
            monitor.rect.x,
            monitor.rect.y,
            monitor.mute_threshold,
            monitor.pause_threshold,
            monitor.performance_mode
        );
    }

    let registry = MonitorRegistry::new(monitors);
    let mut controller = VisibilityController::new(
        NativeWindowSystem::new(),
        registry,
        ControllerConfig::default(),
    );

    let sink = LogSink;
    loop {
        if let Err(e) = controller.tick(&sink) {
            // Prior state is retained; the next tick retries the query.
            warn!("Polling tick failed: {e}");
        }
        thread::sleep(Duration::from_millis(250));
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Wallpapery visibility watcher starting");
    if let Err(e) = run() {
        error!("Fatal: {e}");
        std::process::exit(1);
    }
}
