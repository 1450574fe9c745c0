//! Networking modules for the storefront JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls the server's `/api/*` routes, which proxy the managed catalog
//! backend. Wire types come from the shared `catalog` crate.

pub mod api;
