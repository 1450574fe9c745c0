//! Storefront home: hero, collection grid, collections, process story and
//! the explore overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is fetched once per visit into the app-wide `CatalogState`.
//! `UiState` is scoped to this page, so navigating to a product detail route
//! drops the overlay together with the page.

use catalog::StoreSettings;
use leptos::prelude::*;

use crate::components::artist_process::ArtistProcess;
use crate::components::chaos_hero::ChaosHero;
use crate::components::collection_card::CollectionCard;
use crate::components::custom_cursor::CustomCursor;
use crate::components::gallery_modal::GalleryModal;
use crate::components::masonry_gallery::MasonryGallery;
use crate::components::page_chrome::PageChrome;
use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;

#[component]
pub fn IndexPage() -> impl IntoView {
    let catalog_state = expect_context::<RwSignal<CatalogState>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let settings = expect_context::<RwSignal<StoreSettings>>();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let query = catalog::ProductQuery::active(settings.with_untracked(|s| s.store_id.clone()));
        catalog_state.update(CatalogState::start_loading);
        leptos::task::spawn_local(async move {
            let products = crate::net::api::fetch_products().await;
            let collections = crate::net::api::fetch_collections().await;
            let applied = catalog_state.try_update(|c| {
                c.apply_products(products, &query);
                c.apply_collections(collections);
            });
            if applied.is_none() {
                log::debug!("index: left the page before the catalog arrived");
            }
        });
    });

    let open_gallery = Callback::new(move |()| ui.update(UiState::open_gallery));

    let view_collection = Callback::new(move |id: String| {
        log::debug!("index: view collection {id}");
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash("collection") {
                log::warn!("index: could not jump to the collection: {e:?}");
            }
        }
    });

    let products = Signal::derive(move || catalog_state.with(|c| c.products.clone()));

    view! {
        <CustomCursor>
            <PageChrome>
                <ChaosHero on_gallery=open_gallery/>
                <Show
                    when=move || catalog_state.with(CatalogState::shows_gallery)
                    fallback=move || {
                        view! {
                            <section class="masonry masonry--empty" id="collection">
                                <p class="masonry__status">
                                    {move || {
                                        if catalog_state.with(|c| c.loading) { "Loading the collection…" } else { "No pieces available yet" }
                                    }}
                                </p>
                            </section>
                        }
                    }
                >
                    <MasonryGallery products=products/>
                </Show>
                <Show when=move || catalog_state.with(|c| !c.collections.is_empty())>
                    <section class="collections">
                        <h2 class="collections__heading">"Collections"</h2>
                        <div class="collections__grid">
                            {move || {
                                catalog_state
                                    .with(|c| c.collections.clone())
                                    .into_iter()
                                    .map(|collection| view! { <CollectionCard collection=collection on_view=view_collection/> })
                                    .collect_view()
                            }}
                        </div>
                    </section>
                </Show>
                <ArtistProcess/>
            </PageChrome>
            <GalleryModal/>
        </CustomCursor>
    }
}
