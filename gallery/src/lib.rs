//! Motion engine for the storefront's explore gallery and page effects.
//!
//! This crate is pure Rust with no DOM access; the Leptos client feeds it
//! pointer positions, element rectangles and frame timestamps, and paints
//! whatever it returns. Keeping the math here lets every motion rule be
//! unit-tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`overlay`] | [`overlay::GalleryOverlay`]: open/close lifecycle, load tickets, pointer routing |
//! | [`mapper`] | Pointer position or delta to canvas target offset |
//! | [`motion`] | Spring follower and momentum/decay integrator |
//! | [`frame_loop`] | Cancellable handle around a per-frame callback scheduler |
//! | [`layout`] | Hand-authored slot tables indexed cyclically |
//! | [`source`] | [`source::ProductSource`] seam for the product fetch |
//! | [`parallax`] | Hero pointer parallax and scroll-linked offsets |
//! | [`trail`] | Ink-trail dots behind the custom cursor |
//! | [`config`] | [`config::GalleryConfig`] and validation |
//! | [`geom`] | `Point` / `Rect` |
//! | [`consts`] | Shipped tuning constants |

pub mod config;
pub mod consts;
pub mod frame_loop;
pub mod geom;
pub mod layout;
pub mod mapper;
pub mod motion;
pub mod overlay;
pub mod parallax;
pub mod source;
pub mod trail;
