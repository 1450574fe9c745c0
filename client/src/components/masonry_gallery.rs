//! Asymmetric gallery-wall grid of the collection.

#[cfg(test)]
#[path = "masonry_gallery_test.rs"]
mod masonry_gallery_test;

use catalog::{Product, StoreSettings, format_money};
use gallery::layout::LayoutTable;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::catalog::{image_or_placeholder, piece_count_label};

/// How a tile renders relative to the hovered tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileEmphasis {
    Rest,
    Focused,
    Dimmed,
}

#[must_use]
pub fn tile_emphasis(tile_id: &str, hovered: Option<&str>) -> TileEmphasis {
    match hovered {
        None => TileEmphasis::Rest,
        Some(id) if id == tile_id => TileEmphasis::Focused,
        Some(_) => TileEmphasis::Dimmed,
    }
}

impl TileEmphasis {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Rest => "masonry__tile",
            Self::Focused => "masonry__tile masonry__tile--focused",
            Self::Dimmed => "masonry__tile masonry__tile--dimmed",
        }
    }
}

#[component]
pub fn MasonryGallery(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let settings = expect_context::<RwSignal<StoreSettings>>();
    let hovered = RwSignal::new(None::<String>);
    let layout = LayoutTable::masonry();

    let tiles = move || {
        let products = products.get();
        let money = settings.with(|s| s.money.clone());
        layout
            .place(&products)
            .map(|(_, product, slot)| {
                let id = product.id.clone();
                let enter_id = id.clone();
                let leave_id = id.clone();
                let class_id = id.clone();
                let title = product.title.clone();
                let alt = title.clone();
                let price = format_money(product.price, &money);
                let image = image_or_placeholder(product.primary_image());
                let route = product.route();
                view! {
                    <div
                        class=move || tile_emphasis(&class_id, hovered.get().as_deref()).css_class()
                        style:height=format!("{}px", slot.height_px)
                        on:pointerenter=move |_| hovered.set(Some(enter_id.clone()))
                        on:pointerleave=move |_| {
                            hovered.update(|h| {
                                if h.as_deref() == Some(leave_id.as_str()) {
                                    *h = None;
                                }
                            });
                        }
                    >
                        <A href=route attr:class="masonry__link">
                            <div class="masonry__art">
                                <img class="masonry__image" src=image alt=alt/>
                                <div class="masonry__overlay">
                                    <h3 class="masonry__title">{title}</h3>
                                    <p class="masonry__label">"2024 • Limited Edition"</p>
                                    <p class="masonry__price">{price}</p>
                                    <div class="masonry__cta">"View Piece →"</div>
                                </div>
                            </div>
                            <div class="masonry__border"></div>
                        </A>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="masonry" id="collection">
            <div class="masonry__header">
                <h2 class="masonry__heading">"The Collection"</h2>
                <p class="masonry__count">{move || piece_count_label(products.with(Vec::len))}</p>
            </div>
            <div class="masonry__grid">{tiles}</div>
            <p class="masonry__note">"Each piece is authenticated and numbered"</p>
        </section>
    }
}
