//! Time-eased scroll runs
//!
//! A run moves a scroll surface from its current offset to a resolved stop offset over
//! a bounded duration, sampling an easing curve on every frame the scheduler delivers.
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `easing` - Pure easing curves and the `(elapsed, start, distance, duration)` sampler
//! - `timing` - Progress and interpolation helpers
//! - `config` - Configuration helpers (re-exported from jumpscroll-core)
//!
//! ## Molecular layer
//! - `surface` - Scroll surface adapter over the viewport or an element
//! - `target` - Resolves a target into start, stop and distance
//! - `options` - Per-invocation options
//! - `animation` - Per-frame loop owning the run state
//! - `completion` - Final correction, focus transfer and callback
//!
//! # Usage
//!
//! ```ignore
//! use jumpscroll_engine::{Jumper, JumpOptions, ManualScheduler};
//!
//! let frames = Rc::new(ManualScheduler::new());
//! let jumper = Jumper::new(document, frames.clone());
//!
//! jumper.jump("#install", JumpOptions::new().offset(-48.0).a11y(true))?;
//!
//! // Host frame loop
//! frames.dispatch(now_ms);
//! ```

// Atomic layer
pub mod config;
pub mod easing;
pub mod timing;

// Molecular layer
pub mod animation;
mod completion;
pub mod options;
pub mod surface;
pub mod target;

// Re-exports for convenient access
pub use config::JumpConfigExt;
pub use easing::{Easing, EasingFn, EasingType, EasingTypeExt};
pub use options::{JumpDuration, JumpOptions};
pub use surface::{Container, Surface};
pub use target::{Resolution, Target};
