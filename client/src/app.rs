//! Root application component with routing and context providers.

use catalog::StoreSettings;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{index::IndexPage, product::ProductPage};
use crate::state::{cart::CartState, catalog::CatalogState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store settings, catalog and cart contexts and sets up
/// client-side routing. Settings start at their defaults and are replaced
/// once `/api/settings` answers.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = RwSignal::new(StoreSettings::default());
    let catalog = RwSignal::new(CatalogState::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(settings);
    provide_context(catalog);
    provide_context(cart);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_settings().await {
            Ok(loaded) => settings.set(loaded),
            Err(e) => log::error!("app: error fetching store settings: {e}"),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text=move || settings.with(|s| s.store_name.clone())/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=(StaticSegment("products"), ParamSegment("slug")) view=ProductPage/>
            </Routes>
        </Router>
    }
}
