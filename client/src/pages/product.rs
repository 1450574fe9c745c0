//! Product detail page for `/products/{slug}`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slug comes from the route. Each slug change resets
//! `ProductPageState` and starts one fetch; a response that arrives after the
//! route moved on is dropped. Option buttons, stock and price all derive from
//! the page state's variant selection.

use catalog::{Product, StoreSettings};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::page_chrome::PageChrome;
use crate::state::cart::CartState;
use crate::state::product::ProductPageState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    NotFound,
    Ready,
}

#[component]
pub fn ProductPage() -> impl IntoView {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let params = use_params_map();
    let page = RwSignal::new(ProductPageState::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(slug) = params.read().get("slug") else {
            page.update(|p| p.loaded(Ok(None)));
            return;
        };
        page.update(ProductPageState::start_loading);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_product(&slug).await;
            let current = params.try_with_untracked(|p| p.get("slug") == Some(slug.clone()));
            if current != Some(true) {
                log::debug!("product: dropping stale result for {slug}");
                return;
            }
            if page.try_update(|p| p.loaded(result)).is_none() {
                log::debug!("product: page closed before {slug} arrived");
            }
        });
    });

    let phase = Memo::new(move |_| {
        page.with(|p| {
            if p.loading {
                Phase::Loading
            } else if p.product.is_some() {
                Phase::Ready
            } else {
                Phase::NotFound
            }
        })
    });

    view! {
        <PageChrome>
            {move || match phase.get() {
                Phase::Loading => view! { <ProductSkeleton/> }.into_any(),
                Phase::NotFound => view! { <ProductNotFound/> }.into_any(),
                Phase::Ready => {
                    page.with_untracked(|p| p.product.clone())
                        .map(|product| view! { <ProductDetail product=product page=page/> }.into_any())
                        .unwrap_or_else(|| view! { <ProductNotFound/> }.into_any())
                }
            }}
        </PageChrome>
    }
}

#[component]
fn ProductSkeleton() -> impl IntoView {
    view! {
        <div class="product product--loading" aria-busy="true">
            <div class="product__image-frame skeleton"></div>
            <div class="product__info">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
            </div>
        </div>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="product-missing">
            <h1 class="product-missing__title">"Piece Not Found"</h1>
            <A href="/" attr:class="product-missing__link">
                "Return to Collection"
            </A>
        </div>
    }
}

#[component]
fn ProductDetail(product: Product, page: RwSignal<ProductPageState>) -> impl IntoView {
    let settings = expect_context::<RwSignal<StoreSettings>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let Product { title, description, options, .. } = product;
    let alt = title.clone();

    let price = move || {
        let money = settings.with(|s| s.money.clone());
        page.with(|p| p.price_label(&money))
    };
    let compare_at = move || {
        let money = settings.with(|s| s.money.clone());
        page.with(|p| p.compare_at_label(&money))
    };

    let option_groups = options
        .into_iter()
        .map(|option| {
            let name = option.name;
            let buttons = option
                .values
                .into_iter()
                .map(|value| view! { <OptionButton option=name.clone() value=value page=page/> })
                .collect_view();
            view! {
                <div class="product__option">
                    <p class="product__option-name">{name.clone()}</p>
                    <div class="product__option-values">{buttons}</div>
                </div>
            }
        })
        .collect_view();

    let acquire = move |_ev: leptos::ev::MouseEvent| {
        let Some(line) = page.with_untracked(ProductPageState::cart_line) else {
            return;
        };
        log::info!("product: acquired {} x{}", line.product_id, line.quantity);
        cart.update(|c| c.add(line));
    };

    view! {
        <article class="product">
            <div class="product__image-frame">
                <img class="product__image" src=move || page.with(ProductPageState::image_src) alt=alt/>
            </div>
            <div class="product__info">
                <h1 class="product__title">{title}</h1>
                <div class="product__pricing">
                    <span class="product__price">{price}</span>
                    {move || compare_at().map(|label| view! { <span class="product__compare-at">{label}</span> })}
                </div>
                <p class="product__edition-note">"Limited Edition • 2024"</p>
                {description.map(|html| {
                    view! {
                        <section class="product__about">
                            <h2 class="product__section-title">"About This Piece"</h2>
                            <div class="product__description" inner_html=html></div>
                        </section>
                    }
                })}
                <div class="product__options">{option_groups}</div>
                <div class="product__quantity">
                    <p class="product__option-name">"Quantity"</p>
                    <div class="product__stepper">
                        <button
                            class="product__stepper-button"
                            aria-label="Decrease quantity"
                            disabled=move || !page.with(ProductPageState::can_decrement)
                            on:click=move |_| page.update(ProductPageState::decrement)
                        >
                            "−"
                        </button>
                        <span class="product__stepper-value">{move || page.with(|p| p.quantity)}</span>
                        <button
                            class="product__stepper-button"
                            aria-label="Increase quantity"
                            on:click=move |_| page.update(ProductPageState::increment)
                        >
                            "+"
                        </button>
                    </div>
                </div>
                <button
                    class="product__acquire"
                    disabled=move || !page.with(ProductPageState::in_stock)
                    on:click=acquire
                >
                    {move || page.with(ProductPageState::action_label)}
                </button>
                <Show when=move || page.with(ProductPageState::has_matching_variant)>
                    <dl class="product__details">
                        <dt>"Edition Number"</dt>
                        <dd>{move || page.with(ProductPageState::edition_label)}</dd>
                        <dt>"Availability"</dt>
                        <dd>{move || page.with(ProductPageState::stock_label)}</dd>
                    </dl>
                </Show>
                <A href="/" attr:class="product__back">
                    "← Back to Collection"
                </A>
            </div>
        </article>
    }
}

/// One option value; unavailable combinations are disabled and dimmed.
#[component]
fn OptionButton(option: String, value: String, page: RwSignal<ProductPageState>) -> impl IntoView {
    let key = StoredValue::new((option, value.clone()));
    let selected = move || key.with_value(|(o, v)| page.with(|p| p.selection.is_selected(o, v)));
    let available = move || key.with_value(|(o, v)| page.with(|p| p.is_value_available(o, v)));

    view! {
        <button
            class="product__option-value"
            class:product__option-value--selected=selected
            class:product__option-value--unavailable=move || !available()
            disabled=move || !available()
            on:click=move |_| key.with_value(|(o, v)| page.update(|p| p.select_option(o, v)))
        >
            {value}
        </button>
    }
}
