//! Per-invocation jump options

use std::fmt;
use std::rc::Rc;

use jumpscroll_core::config::DEFAULT_DURATION_MS;
use tracing::warn;

use super::config::{Axis, JumpConfig};
use super::easing::Easing;
use super::surface::Container;

/// Run length, fixed or derived from the travel distance
#[derive(Clone)]
pub enum JumpDuration {
    /// Milliseconds
    Fixed(f64),
    /// Called once with the signed distance; returns milliseconds
    PerDistance(Rc<dyn Fn(f64) -> f64>),
}

impl JumpDuration {
    /// Milliseconds for a run covering `distance`
    ///
    /// Finite results are used as-is; a zero or negative duration completes on the
    /// first frame. NaN and infinite results fall back to the default duration.
    pub fn resolve(&self, distance: f64) -> f64 {
        let ms = match self {
            JumpDuration::Fixed(ms) => *ms,
            JumpDuration::PerDistance(f) => f(distance),
        };
        if ms.is_finite() {
            ms
        } else {
            warn!(duration = ms, fallback = DEFAULT_DURATION_MS, "Unusable jump duration, using default");
            DEFAULT_DURATION_MS
        }
    }
}

impl Default for JumpDuration {
    fn default() -> Self {
        JumpDuration::Fixed(DEFAULT_DURATION_MS)
    }
}

impl fmt::Debug for JumpDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpDuration::Fixed(ms) => f.debug_tuple("Fixed").field(ms).finish(),
            JumpDuration::PerDistance(_) => f.write_str("PerDistance(..)"),
        }
    }
}

/// Options for a single jump
///
/// Built with chained setters on top of [`Default`] or a [`JumpConfig`]:
///
/// ```ignore
/// let options = JumpOptions::new()
///     .offset(-64.0)
///     .duration_fn(|distance| distance.abs() / 2.0)
///     .on_complete(|| println!("arrived"));
/// ```
#[derive(Default)]
pub struct JumpOptions {
    pub axis: Axis,
    pub duration: JumpDuration,
    /// Pixel adjustment added to the computed stop
    pub offset: f64,
    pub callback: Option<Box<dyn FnOnce()>>,
    pub easing: Easing,
    /// Focus the target element on completion
    pub a11y: bool,
    /// Numeric targets are absolute offsets
    pub exact: bool,
    pub container: Container,
}

impl JumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the configured defaults
    pub fn from_config(config: &JumpConfig) -> Self {
        Self {
            axis: config.axis,
            duration: JumpDuration::Fixed(config.duration_ms),
            offset: config.offset,
            easing: Easing::Curve(config.easing),
            a11y: config.a11y,
            exact: config.exact,
            ..Self::default()
        }
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn duration_ms(mut self, ms: f64) -> Self {
        self.duration = JumpDuration::Fixed(ms);
        self
    }

    /// Derive the duration from the signed travel distance
    pub fn duration_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.duration = JumpDuration::PerDistance(Rc::new(f));
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.callback = Some(Box::new(f));
        self
    }

    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn a11y(mut self, enabled: bool) -> Self {
        self.a11y = enabled;
        self
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn container(mut self, container: impl Into<Container>) -> Self {
        self.container = container.into();
        self
    }
}

impl fmt::Debug for JumpOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JumpOptions")
            .field("axis", &self.axis)
            .field("duration", &self.duration)
            .field("offset", &self.offset)
            .field("callback", &self.callback.is_some())
            .field("easing", &self.easing)
            .field("a11y", &self.a11y)
            .field("exact", &self.exact)
            .field("container", &self.container)
            .finish()
    }
}
