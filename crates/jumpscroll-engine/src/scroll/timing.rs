//! Time calculation utilities for scroll runs
//!
//! Timestamps are frame times in milliseconds as delivered by the scheduler.

/// Run progress (0.0 to 1.0) after `elapsed` ms of a `duration` ms run
///
/// A zero or negative duration is always complete.
#[inline]
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Check if a run is complete
#[inline]
pub fn is_complete(elapsed: f64, duration: f64) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// `true` for values a scroll property reports when it is unset or unsupported
#[inline]
pub fn is_falsy(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(300.0, 200.0, 0.5) - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(0.0, 1000.0), 0.0);
        assert_eq!(progress(250.0, 1000.0), 0.25);
        assert_eq!(progress(2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(0.0, 0.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_is_complete() {
        assert!(!is_complete(999.9, 1000.0));
        assert!(is_complete(1000.0, 1000.0));
        assert!(is_complete(0.0, 0.0));
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(0.0));
        assert!(is_falsy(-0.0));
        assert!(is_falsy(f64::NAN));
        assert!(!is_falsy(0.5));
        assert!(!is_falsy(-12.0));
    }
}
