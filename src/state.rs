//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the catalog reader behind a trait object so route tests can swap in
//! a mock, plus the store settings resolved once at startup.

use std::sync::Arc;

use catalog::StoreSettings;

use crate::backend::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub settings: Arc<StoreSettings>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>, settings: StoreSettings) -> Self {
        Self { catalog, settings: Arc::new(settings) }
    }
}
