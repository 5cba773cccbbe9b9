//! Per-frame animation loop
//!
//! A [`RunState`] is owned by the chain of frame callbacks: each tick takes the state by
//! value and either moves it into the next requested frame or hands it to the
//! completion handler. Nothing outlives the run.

use std::rc::Rc;

use tracing::trace;

use super::completion;
use super::easing::Easing;
use super::surface::Surface;
use super::target::Resolution;
use super::timing::is_complete;
use crate::host::{Axis, ElementRef};
use crate::scheduler::FrameScheduler;

/// State of one run, from entry to completion
pub struct RunState {
    pub(crate) surface: Surface,
    pub(crate) axis: Axis,
    pub(crate) start: f64,
    pub(crate) stop: f64,
    pub(crate) distance: f64,
    /// Milliseconds
    pub(crate) duration: f64,
    /// Latched on the first tick
    pub(crate) time_start: Option<f64>,
    pub(crate) time_elapsed: f64,
    pub(crate) target_element: Option<ElementRef>,
    pub(crate) a11y: bool,
    pub(crate) exact: bool,
    pub(crate) easing: Easing,
    pub(crate) on_complete: Option<Box<dyn FnOnce()>>,
}

impl RunState {
    pub(crate) fn new(
        surface: Surface,
        axis: Axis,
        resolution: Resolution,
        easing: Easing,
        exact: bool,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> Self {
        Self {
            surface,
            axis,
            start: resolution.start,
            stop: resolution.stop,
            distance: resolution.distance,
            duration: resolution.duration,
            time_start: None,
            time_elapsed: 0.0,
            target_element: resolution.element,
            a11y: resolution.a11y,
            exact,
            easing,
            on_complete,
        }
    }

    /// Offset the run lands on
    #[inline]
    pub fn destination(&self) -> f64 {
        self.start + self.distance
    }

    /// Advance to `time_current`; returns `true` while the run keeps going
    pub(crate) fn step(&mut self, time_current: f64) -> bool {
        let time_start = *self.time_start.get_or_insert(time_current);
        self.time_elapsed = time_current - time_start;

        let next = self
            .easing
            .sample(self.time_elapsed, self.start, self.distance, self.duration);
        self.surface.set_offset(self.axis, next);

        trace!(
            elapsed = self.time_elapsed,
            duration = self.duration,
            offset = next,
            "Jump frame"
        );

        !is_complete(self.time_elapsed, self.duration)
    }
}

/// Request the first frame of a run
pub(crate) fn start(run: RunState, scheduler: Rc<dyn FrameScheduler>) {
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |time_current| tick(run, next, time_current)));
}

fn tick(mut run: RunState, scheduler: Rc<dyn FrameScheduler>, time_current: f64) {
    if run.step(time_current) {
        start(run, scheduler);
    } else {
        completion::finish(run);
    }
}
