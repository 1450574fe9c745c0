//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each struct is a plain value wrapped in an `RwSignal` by `App` or by the
//! page that owns it; methods here hold the transition rules so they can be
//! tested without a DOM.

pub mod cart;
pub mod catalog;
pub mod product;
pub mod ui;
