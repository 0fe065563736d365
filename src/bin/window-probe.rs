//! Diagnostic probe: dump the current window list with geometry and the
//! validity verdict the controller would use for each window. Helps answer
//! "why did my wallpaper (not) mute" without running the full watcher.

use log::{error, info};

use wallpapery::coverage;
use wallpapery::platform::{detect_monitors, NativeWindowSystem, WindowSystem};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let system = NativeWindowSystem::new();

    let monitors = match detect_monitors() {
        Ok(monitors) => monitors,
        Err(e) => {
            error!("Monitor detection failed: {e}");
            std::process::exit(1);
        }
    };
    for (index, monitor) in monitors.iter().enumerate() {
        info!(
            "Monitor {index} ({}): {}x{}+{}+{}{}",
            monitor.name,
            monitor.rect.width,
            monitor.rect.height,
            monitor.rect.x,
            monitor.rect.y,
            if monitor.primary { " [primary]" } else { "" }
        );
    }

    let windows = match system.snapshot() {
        Ok(windows) => windows,
        Err(e) => {
            error!("Window list query failed: {e}");
            std::process::exit(1);
        }
    };
    info!("Found {} window(s)", windows.len());

    for window in &windows {
        let valid = system.is_valid(&window.id);
        let per_monitor: Vec<String> = monitors
            .iter()
            .enumerate()
            .map(|(index, monitor)| {
                let fraction = coverage::coverage_fraction(&window.rect, &monitor.rect);
                format!("m{index}={:.1}%", fraction * 100.0)
            })
            .collect();
        info!(
            "{} {}x{}+{}+{} valid={valid} {}",
            window.id,
            window.rect.width,
            window.rect.height,
            window.rect.x,
            window.rect.y,
            per_monitor.join(" ")
        );
    }
}
