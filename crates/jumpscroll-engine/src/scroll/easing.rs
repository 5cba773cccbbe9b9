//! Easing curves mapping elapsed time to an interpolated offset
//!
//! Named curves ([`EasingType`]) are normalized: they map progress in `[0, 1]` to
//! `[0, 1]`. The engine consumes them through [`Easing::sample`], which uses the
//! `(elapsed, start, distance, duration)` form shared with custom curves.

use std::fmt;
use std::rc::Rc;

pub use jumpscroll_core::EasingType;

use super::timing::{lerp, progress};

/// Custom easing: `(elapsed, start, distance, duration) -> offset`
pub type EasingFn = Rc<dyn Fn(f64, f64, f64, f64) -> f64>;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;

    /// Offset at `elapsed` ms into a run of `duration` ms covering `distance` from `start`
    fn sample(&self, elapsed: f64, start: f64, distance: f64, duration: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::QuadInOut => quad_ease_in_out(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }

    #[inline]
    fn sample(&self, elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
        lerp(start, start + distance, self.apply(progress(elapsed, duration)))
    }
}

/// Quadratic ease-in-out: 2t² up to the midpoint, mirrored after it
#[inline]
fn quad_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Interpolation curve used by a run
#[derive(Clone)]
pub enum Easing {
    Curve(EasingType),
    /// Receives raw elapsed time, which may exceed the duration on the last frame
    Custom(EasingFn),
}

impl Easing {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64, f64, f64, f64) -> f64 + 'static,
    {
        Easing::Custom(Rc::new(f))
    }

    #[inline]
    pub fn sample(&self, elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
        match self {
            Easing::Curve(curve) => curve.sample(elapsed, start, distance, duration),
            Easing::Custom(f) => f(elapsed, start, distance, duration),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Curve(EasingType::default())
    }
}

impl From<EasingType> for Easing {
    fn from(curve: EasingType) -> Self {
        Easing::Curve(curve)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Curve(curve) => f.debug_tuple("Curve").field(curve).finish(),
            Easing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
