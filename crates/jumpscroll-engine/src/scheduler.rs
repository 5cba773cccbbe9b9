//! Per-frame scheduling capability
//!
//! The engine never owns a clock. It hands a one-shot callback to a [`FrameScheduler`],
//! which invokes it once with the next frame's timestamp in milliseconds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// Callback receiving the frame timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Something that can run a callback on the next frame
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Scheduler whose frames are delivered explicitly by the caller
///
/// Callbacks requested while a frame is being dispatched wait for the next
/// [`dispatch`](ManualScheduler::dispatch).
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<Vec<FrameCallback>>,
    frames: Cell<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one frame stamped `now_ms` to every pending callback
    ///
    /// Returns the number of callbacks run.
    pub fn dispatch(&self, now_ms: f64) -> usize {
        let callbacks = std::mem::take(&mut *self.pending.borrow_mut());
        let count = callbacks.len();
        for callback in callbacks {
            callback(now_ms);
        }
        if count > 0 {
            self.frames.set(self.frames.get() + 1);
        }
        count
    }

    /// Deliver a sequence of frames, stopping early once nothing is pending
    pub fn dispatch_all<I>(&self, timestamps: I) -> usize
    where
        I: IntoIterator<Item = f64>,
    {
        let mut delivered = 0;
        for now_ms in timestamps {
            if self.is_idle() {
                break;
            }
            self.dispatch(now_ms);
            delivered += 1;
        }
        delivered
    }

    /// Deliver frames every `step_ms` starting at `start_ms` until nothing is pending
    ///
    /// Gives up after `max_frames` frames and returns the number delivered.
    pub fn run_until_idle(&self, start_ms: f64, step_ms: f64, max_frames: usize) -> usize {
        self.dispatch_all((0..max_frames).map(|i| start_ms + step_ms * i as f64))
    }

    pub fn is_idle(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Frames that ran at least one callback
    pub fn frames_dispatched(&self) -> u64 {
        self.frames.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push(callback);
    }
}

/// Drives a [`ManualScheduler`] in real time from a tokio interval
///
/// Frames are stamped with milliseconds elapsed since the driver was created.
/// Callbacks are `!Send`, so the driver must be awaited on the thread that owns the
/// scheduler (a current-thread runtime or a `LocalSet`).
pub struct FrameDriver {
    frames: Rc<ManualScheduler>,
    interval: Duration,
    origin: Instant,
}

impl FrameDriver {
    pub fn new(frames: Rc<ManualScheduler>, interval: Duration) -> Self {
        Self {
            frames,
            interval,
            origin: Instant::now(),
        }
    }

    pub fn scheduler(&self) -> Rc<ManualScheduler> {
        Rc::clone(&self.frames)
    }

    /// Tick until no frame is pending; returns the number of frames delivered
    pub async fn run_until_idle(&self) -> u64 {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut delivered = 0;
        while !self.frames.is_idle() {
            let tick = ticker.tick().await;
            let now_ms = tick.duration_since(self.origin).as_secs_f64() * 1000.0;
            let ran = self.frames.dispatch(now_ms);
            trace!(now_ms, callbacks = ran, "Frame dispatched");
            delivered += 1;
        }

        debug!(frames = delivered, "Frame driver idle");
        delivered
    }
}
