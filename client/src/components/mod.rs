//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the storefront sections. Motion math comes from the
//! `gallery` crate; components only measure the DOM, forward events and paint
//! the returned transforms.

pub mod artist_process;
pub mod chaos_hero;
pub mod collection_card;
pub mod custom_cursor;
pub mod gallery_modal;
pub mod masonry_gallery;
pub mod page_chrome;
