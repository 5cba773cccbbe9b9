//! Configuration helpers for jump runs
//!
//! Re-exports configuration from jumpscroll-core and provides additional utilities.

use std::time::Duration;

use jumpscroll_core::config::DEFAULT_DURATION_MS;

// Re-export config types from core
pub use jumpscroll_core::{Axis, EasingType, JumpConfig};

/// Extension trait for JumpConfig with utility methods
pub trait JumpConfigExt {
    /// Get run duration as Duration (the default duration if unrepresentable)
    fn run_duration(&self) -> Duration;

    /// Get frame interval for the configured frame rate, never shorter than 1ms
    fn frame_interval(&self) -> Duration;

    /// Check if runs animate at all (a zero duration lands on the first frame)
    fn is_animated(&self) -> bool;
}

impl JumpConfigExt for JumpConfig {
    #[inline]
    fn run_duration(&self) -> Duration {
        let fallback = Duration::from_secs_f64(DEFAULT_DURATION_MS / 1000.0);
        if !self.duration_ms.is_finite() {
            return fallback;
        }
        Duration::try_from_secs_f64(self.duration_ms.max(0.0) / 1000.0).unwrap_or(fallback)
    }

    #[inline]
    fn frame_interval(&self) -> Duration {
        if self.frame_rate == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.frame_rate as u64).max(1))
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.duration_ms > 0.0 && self.easing != EasingType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_duration() {
        let config = JumpConfig {
            duration_ms: 250.0,
            ..Default::default()
        };
        assert_eq!(config.run_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_run_duration_unrepresentable_uses_default() {
        let mut config = JumpConfig {
            duration_ms: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(config.run_duration(), Duration::from_millis(1000));

        config.duration_ms = f64::NAN;
        assert_eq!(config.run_duration(), Duration::from_millis(1000));

        config.duration_ms = f64::MAX;
        assert_eq!(config.run_duration(), Duration::from_millis(1000));

        config.duration_ms = -20.0;
        assert_eq!(config.run_duration(), Duration::ZERO);
    }

    #[test]
    fn test_frame_interval() {
        let mut config = JumpConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));

        config.frame_rate = 120;
        assert_eq!(config.frame_interval(), Duration::from_millis(8));

        config.frame_rate = 0;
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_frame_interval_high_frame_rate() {
        let mut config = JumpConfig {
            frame_rate: 2000,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(1));

        config.frame_rate = u32::MAX;
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_animated() {
        let mut config = JumpConfig::default();
        assert!(config.is_animated());

        config.easing = EasingType::None;
        assert!(!config.is_animated());

        config.easing = EasingType::Linear;
        config.duration_ms = 0.0;
        assert!(!config.is_animated());
    }
}
