//! `requestAnimationFrame` bridge for the gallery's frame loop.
//!
//! ARCHITECTURE
//! ============
//! [`RafScheduler`] implements `gallery::frame_loop::FrameScheduler` over the
//! browser's animation-frame API. [`FrameDriver`] owns a `FrameLoop` of it and
//! a per-frame step closure; the closure returns whether another frame is
//! needed and the driver reschedules accordingly. Components keep the driver
//! in a local `StoredValue`; dropping it cancels any pending frame.

#[cfg(test)]
#[path = "frame_driver_test.rs"]
mod frame_driver_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gallery::frame_loop::{FrameLoop, FrameScheduler};
#[cfg(feature = "hydrate")]
use gallery::overlay::FrameDirective;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Assumed duration of the first frame after an idle period.
pub const FIRST_FRAME_MS: f64 = 1000.0 / 60.0;

/// Converts animation-frame timestamps into per-frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Milliseconds since the previous tick; [`FIRST_FRAME_MS`] after a reset.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) if now_ms.is_finite() => (now_ms - last).max(0.0),
            _ => FIRST_FRAME_MS,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        dt
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(feature = "hydrate")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
pub struct RafScheduler {
    callback: FrameCallback,
}

#[cfg(feature = "hydrate")]
impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("frame: requestAnimationFrame refused: {e:?}");
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.cancel_animation_frame(handle) {
            log::warn!("frame: cancelAnimationFrame failed: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct FrameDriver {
    frames: Rc<RefCell<FrameLoop<RafScheduler>>>,
    clock: Rc<RefCell<FrameClock>>,
}

#[cfg(feature = "hydrate")]
impl FrameDriver {
    /// `step(dt_ms)` advances the animation and returns `true` while more
    /// frames are needed.
    pub fn new(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let frames = Rc::new(RefCell::new(FrameLoop::new(RafScheduler { callback: Rc::clone(&callback) })));
        let clock = Rc::new(RefCell::new(FrameClock::default()));

        let frames_weak = Rc::downgrade(&frames);
        let clock_cb = Rc::clone(&clock);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let Some(frames) = frames_weak.upgrade() else {
                return;
            };
            frames.borrow_mut().frame_fired();
            let dt = clock_cb.borrow_mut().tick(ts);
            if step(dt) {
                frames.borrow_mut().schedule();
            } else {
                clock_cb.borrow_mut().reset();
            }
        }) as Box<dyn FnMut(f64)>);
        *callback.borrow_mut() = Some(cb);

        Self { frames, clock }
    }

    pub fn schedule(&self) {
        self.frames.borrow_mut().schedule();
    }

    pub fn cancel(&self) {
        self.frames.borrow_mut().cancel();
        self.clock.borrow_mut().reset();
    }

    pub fn apply(&self, directive: FrameDirective) {
        match directive {
            FrameDirective::Schedule => self.schedule(),
            FrameDirective::Cancel => self.cancel(),
            FrameDirective::Keep => {}
        }
    }
}
