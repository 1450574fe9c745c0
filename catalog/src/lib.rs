//! Shared catalog model for the storefront server and the WASM client.
//!
//! This crate owns the wire representation of everything the storefront reads
//! from the managed backend: products, collections, store settings, and the
//! money format used to display prices. Both the Axum server (which proxies
//! the backend) and the Leptos client (which renders it) depend on these
//! types so the JSON shape is defined exactly once.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`product`] | Products, variants, collections and the active-product query |
//! | [`variant`] | Option selection, matching variant, price/image/stock lookup |
//! | [`money`] | Price formatting (`format_money`) |
//! | [`settings`] | Store settings and gallery tuning sent to the client |
//! | [`error`] | [`CatalogError`] for text parsers |

pub mod error;
pub mod money;
pub mod product;
pub mod settings;
pub mod variant;

pub use error::CatalogError;
pub use money::{MoneyFormat, format_money};
pub use product::{Collection, Product, ProductOption, ProductQuery, ProductStatus, ProductVariant, product_route};
pub use settings::{GalleryTuning, MotionMode, StoreSettings};
pub use variant::{DEFAULT_EDITION, VariantSelection, variant_in_stock};
