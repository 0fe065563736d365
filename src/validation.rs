use crate::error::AppError;

/// Validate a coverage threshold. Must be a finite fraction in (0, 1].
///
/// Mute and pause thresholds are validated independently; some profiles
/// deliberately set the pause threshold below the mute threshold, so no
/// ordering between the two is enforced.
pub fn validate_threshold(field: &'static str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput {
            field,
            reason: "must be a finite number".into(),
        });
    }
    if value <= 0.0 {
        return Err(AppError::InvalidInput {
            field,
            reason: "must be greater than 0".into(),
        });
    }
    if value > 1.0 {
        return Err(AppError::InvalidInput {
            field,
            reason: "cannot exceed 1.0".into(),
        });
    }
    Ok(value)
}

/// Validate monitor geometry. Width and height must both be positive so
/// that the derived area is never zero.
pub fn validate_monitor_geometry(width: i32, height: i32) -> Result<(), AppError> {
    if width <= 0 {
        return Err(AppError::InvalidInput {
            field: "width",
            reason: format!("must be positive, got {width}"),
        });
    }
    if height <= 0 {
        return Err(AppError::InvalidInput {
            field: "height",
            reason: format!("must be positive, got {height}"),
        });
    }
    Ok(())
}
