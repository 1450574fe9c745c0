//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (element geometry, animation
//! frames, timers) from page and component logic. Browser-only pieces are
//! gated on the `hydrate` feature; the pure parts are tested natively.

pub mod dom;
pub mod frame_driver;
