//! Invocation entry point

use std::rc::Rc;

use jumpscroll_core::Result;
use tracing::debug;

use crate::host::Document;
use crate::scheduler::FrameScheduler;
use crate::scroll::animation::{self, RunState};
use crate::scroll::options::JumpOptions;
use crate::scroll::surface::Surface;
use crate::scroll::target::{self, Resolution, Target};

/// Starts scroll runs against a document
///
/// Holds only the host capabilities. Every [`jump`](Jumper::jump) builds a fresh run
/// that owns all of its state; runs never share anything and cannot be cancelled.
#[derive(Clone)]
pub struct Jumper {
    document: Rc<dyn Document>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl Jumper {
    pub fn new(document: Rc<dyn Document>, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            document,
            scheduler,
        }
    }

    /// Animate towards `target` and return immediately
    ///
    /// The run proceeds on frames delivered by the scheduler. Selectors that match
    /// nothing fail here, before any frame is requested.
    pub fn jump(&self, target: impl Into<Target>, options: JumpOptions) -> Result<()> {
        let target = target.into();
        debug!(?target, ?options, "Jump requested");

        let surface = Surface::resolve(self.document.as_ref(), &options.container)?;
        debug!(viewport = surface.is_viewport(), "Resolved scroll surface");
        let resolution = target::resolve(self.document.as_ref(), &surface, &target, &options)?;

        let JumpOptions {
            axis,
            easing,
            exact,
            callback,
            ..
        } = options;
        let run = RunState::new(surface, axis, resolution, easing, exact, callback);
        animation::start(run, Rc::clone(&self.scheduler));

        Ok(())
    }

    /// Resolve `target` without starting a run
    pub fn plan(&self, target: impl Into<Target>, options: &JumpOptions) -> Result<Resolution> {
        let surface = Surface::resolve(self.document.as_ref(), &options.container)?;
        target::resolve(self.document.as_ref(), &surface, &target.into(), options)
    }
}
