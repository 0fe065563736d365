//! Pure rectangle math for occlusion measurement.
//!
//! Everything here is side-effect free; the controller feeds it window and
//! monitor geometry each tick and aggregates the results.

/// Axis-aligned rectangle in desktop coordinates.
///
/// Window geometry reported by the window manager may have negative origins
/// (monitors left of or above the primary), so positions are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

/// Overlapping pixel area of two rectangles; zero when disjoint.
pub fn overlap_area(a: &Rect, b: &Rect) -> i64 {
    let overlap_w = i64::from((a.x + a.width).min(b.x + b.width)) - i64::from(a.x.max(b.x));
    let overlap_h = i64::from((a.y + a.height).min(b.y + b.height)) - i64::from(a.y.max(b.y));

    if overlap_w > 0 && overlap_h > 0 {
        overlap_w * overlap_h
    } else {
        0
    }
}

/// Fraction of `monitor` covered by `window`, in `[0, 1]`.
///
/// Returns 0.0 for a degenerate monitor rather than dividing by zero; the
/// registry rejects zero-area monitors at construction.
#[allow(clippy::cast_precision_loss, reason = "monitor areas are far below 2^52")]
pub fn coverage_fraction(window: &Rect, monitor: &Rect) -> f64 {
    let monitor_area = monitor.area();
    if monitor_area <= 0 {
        return 0.0;
    }

    overlap_area(window, monitor) as f64 / monitor_area as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_rects_have_zero_overlap() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        let right_of = Rect::new(1920, 0, 400, 300);
        let below = Rect::new(0, 1080, 400, 300);
        let far_away = Rect::new(-5000, -5000, 100, 100);

        assert_eq!(overlap_area(&right_of, &monitor), 0);
        assert_eq!(overlap_area(&below, &monitor), 0);
        assert_eq!(overlap_area(&far_away, &monitor), 0);
    }

    #[test]
    fn test_window_containing_monitor_covers_fully() {
        let monitor = Rect::new(100, 100, 1920, 1080);
        let window = Rect::new(0, 0, 4000, 3000);

        assert_eq!(overlap_area(&window, &monitor), monitor.area());
        assert!((coverage_fraction(&window, &monitor) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_overlap_is_clipped() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        // Hangs off the top-left corner; only a 100x50 sliver is on-screen.
        let window = Rect::new(-300, -200, 400, 250);

        assert_eq!(overlap_area(&window, &monitor), 100 * 50);
    }

    #[test]
    fn test_coverage_fraction_matches_small_window_scenario() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        let window = Rect::new(0, 0, 200, 150);

        let fraction = coverage_fraction(&window, &monitor);
        assert!((fraction - (200.0 * 150.0) / (1920.0 * 1080.0)).abs() < 1e-12);
        assert!(fraction > 0.01);
    }

    #[test]
    fn test_coverage_monotonic_in_window_size() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        let mut previous = 0.0;

        for size in (100..=2200).step_by(300) {
            let window = Rect::new(50, 50, size, size);
            let fraction = coverage_fraction(&window, &monitor);
            assert!(
                fraction >= previous,
                "coverage shrank when window grew to {size}"
            );
            assert!(fraction <= 1.0);
            previous = fraction;
        }
    }

    #[test]
    fn test_window_spanning_two_monitors_clips_independently() {
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 1920, 1080);
        // Centered on the seam: 400px on each side.
        let window = Rect::new(1520, 100, 800, 600);

        assert_eq!(overlap_area(&window, &left), 400 * 600);
        assert_eq!(overlap_area(&window, &right), 400 * 600);
    }

    #[test]
    fn test_degenerate_monitor_yields_zero_fraction() {
        let monitor = Rect::new(0, 0, 0, 1080);
        let window = Rect::new(0, 0, 500, 500);

        assert!(coverage_fraction(&window, &monitor).abs() < f64::EPSILON);
    }
}
