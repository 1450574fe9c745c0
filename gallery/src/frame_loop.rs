//! Owned handle for a self-rescheduling per-frame callback.
//!
//! The browser side implements [`FrameScheduler`] over
//! `requestAnimationFrame`; tests implement it with a counter. [`FrameLoop`]
//! holds at most one outstanding request and releases it on every exit
//! path: the frame firing, an explicit [`FrameLoop::cancel`], or drop.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

/// Something that can request and cancel one frame callback.
pub trait FrameScheduler {
    type Handle;

    /// Request the next frame. `None` when the platform refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None }
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Ensure a frame is requested. No-op while one is already pending.
    /// Returns whether a frame is pending afterwards.
    pub fn schedule(&mut self) -> bool {
        if self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
        self.pending.is_some()
    }

    /// The pending frame ran; its handle is spent.
    pub fn frame_fired(&mut self) {
        self.pending = None;
    }

    /// Cancel the pending frame, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
