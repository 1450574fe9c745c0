//! Full-screen explore overlay over an oversized product canvas.
//!
//! ARCHITECTURE
//! ============
//! All motion state lives in one `gallery::overlay::GalleryOverlay` held in a
//! `StoredValue`. Pointer handlers feed it and apply the `FrameDirective` it
//! returns to a local [`FrameDriver`](crate::util::frame_driver::FrameDriver);
//! each animation frame ticks the overlay and republishes the canvas
//! transform. Everything the view reads is copied into plain signals by
//! [`OverlayView::publish`], so rendering never borrows the overlay.
//!
//! Opening is driven by `UiState::gallery_open`. Each open reconfigures the
//! same overlay from the store tuning and takes a fresh `LoadTicket`; a fetch that resolves after a close or a re-open is dropped
//! by the overlay rather than painted.

#[cfg(test)]
#[path = "gallery_modal_test.rs"]
mod gallery_modal_test;

use catalog::{MoneyFormat, StoreSettings, format_money};
use gallery::config::GalleryConfig;
use gallery::geom::{Point, Rect};
use gallery::overlay::{FrameDirective, GalleryOverlay, PointerResponse};
use leptos::prelude::*;

use crate::state::catalog::image_or_placeholder;
use crate::state::ui::UiState;
use crate::util::dom::slot_style;

#[cfg(feature = "hydrate")]
use crate::util::frame_driver::FrameDriver;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// One rendered card on the explore canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryCard {
    pub id: String,
    pub title: String,
    pub route: String,
    pub image: String,
    pub price: String,
    pub style: String,
}

/// Cards for every loaded product, placed by the overlay's layout table.
#[must_use]
pub fn card_views(overlay: &GalleryOverlay, money: &MoneyFormat) -> Vec<GalleryCard> {
    overlay
        .placed_items()
        .into_iter()
        .map(|item| GalleryCard {
            id: item.product.id.clone(),
            title: item.product.title.clone(),
            route: item.product.route(),
            image: image_or_placeholder(item.product.primary_image()),
            price: format_money(item.product.price, money),
            style: slot_style(item.slot.top_percent, item.slot.left_percent, item.slot.height_px),
        })
        .collect()
}

/// Canvas size as a percentage of the viewport.
#[must_use]
pub fn canvas_style(config: &GalleryConfig) -> String {
    let size = config.canvas_percent();
    format!("width: {}%; height: {}%;", size.x, size.y)
}

/// Overlay config from the store's tuning; invalid tuning falls back to defaults.
#[must_use]
pub fn config_from_settings(settings: &StoreSettings) -> GalleryConfig {
    GalleryConfig::from_tuning(&settings.gallery).unwrap_or_else(|e| {
        log::warn!("gallery: invalid tuning, using defaults: {e}");
        GalleryConfig::default()
    })
}

/// Feed one pointer move to the overlay. When the move repositioned the
/// canvas without a frame (momentum tracking cancels the loop), the transform
/// to paint right away comes back alongside the response.
pub fn route_pointer_move(overlay: &mut GalleryOverlay, client: Point, rect: &Rect) -> (PointerResponse, Option<String>) {
    let before = overlay.offset();
    let response = overlay.pointer_move(client, rect);
    let paint = (response.frames == FrameDirective::Cancel && overlay.offset() != before)
        .then(|| overlay.canvas_transform());
    (response, paint)
}

#[derive(Clone, Copy)]
struct OverlayView {
    transform: RwSignal<String>,
    loading: RwSignal<bool>,
    cards: RwSignal<Vec<GalleryCard>>,
    hovered: RwSignal<Option<String>>,
    canvas: RwSignal<String>,
}

impl OverlayView {
    fn new(overlay: &GalleryOverlay) -> Self {
        Self {
            transform: RwSignal::new(overlay.canvas_transform()),
            loading: RwSignal::new(false),
            cards: RwSignal::new(Vec::new()),
            hovered: RwSignal::new(None),
            canvas: RwSignal::new(canvas_style(overlay.config())),
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn publish(self, overlay: &GalleryOverlay, money: &MoneyFormat) {
        self.transform.set(overlay.canvas_transform());
        self.loading.set(overlay.is_loading());
        self.cards.set(card_views(overlay, money));
        self.canvas.set(canvas_style(overlay.config()));
        self.publish_hover(overlay);
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn publish_motion(self, overlay: &GalleryOverlay) {
        self.transform.set(overlay.canvas_transform());
    }

    fn publish_hover(self, overlay: &GalleryOverlay) {
        self.hovered.set(overlay.hovered().map(str::to_owned));
    }
}

#[cfg(feature = "hydrate")]
type LocalValue<T> = StoredValue<T, LocalStorage>;

/// Route a pointer response to the frame driver and, in momentum mode, re-arm
/// the quiet timer that ends the gesture.
#[cfg(feature = "hydrate")]
fn apply_response(
    response: PointerResponse,
    overlay: StoredValue<GalleryOverlay>,
    frames: LocalValue<FrameDriver>,
    quiet: LocalValue<Option<Timeout>>,
) {
    frames.with_value(|f| f.apply(response.frames));
    if !response.arm_quiet_timer {
        return;
    }
    let Some(quiet_ms) = overlay.try_with_value(|o| o.config().quiet_interval_ms) else {
        return;
    };
    let timer = Timeout::new(quiet_ms, move || {
        let Some(directive) = overlay.try_update_value(GalleryOverlay::pointer_stopped) else {
            return;
        };
        if frames.try_with_value(|f| f.apply(directive)).is_none() {
            log::debug!("gallery: quiet timer fired after unmount");
        }
    });
    quiet.set_value(Some(timer));
}

#[component]
pub fn GalleryModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let settings = expect_context::<RwSignal<StoreSettings>>();
    let initial = GalleryOverlay::new(GalleryConfig::default());
    let view_state = OverlayView::new(&initial);
    let overlay = StoredValue::new(initial);
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let frames: LocalValue<FrameDriver> = StoredValue::new_local(FrameDriver::new(move |dt_ms| {
        overlay
            .try_update_value(|o| {
                let more = o.tick(dt_ms);
                view_state.publish_motion(o);
                more
            })
            .unwrap_or(false)
    }));
    #[cfg(feature = "hydrate")]
    let quiet: LocalValue<Option<Timeout>> = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let open = ui.with(|u| u.gallery_open);
        let current = settings.get_untracked();
        let money = current.money.clone();
        if !open {
            overlay.update_value(GalleryOverlay::close);
            frames.with_value(FrameDriver::cancel);
            quiet.set_value(None);
            overlay.with_value(|o| view_state.publish(o, &money));
            return;
        }

        let ticket = overlay.try_update_value(|o| {
            o.reconfigure(config_from_settings(&current));
            let ticket = o.open();
            if let Some(rect) = crate::util::dom::viewport_rect() {
                o.center(&rect);
            }
            ticket
        });
        let Some(ticket) = ticket else {
            return;
        };
        overlay.with_value(|o| view_state.publish(o, &money));

        let query = catalog::ProductQuery::active(current.store_id.clone());
        leptos::task::spawn_local(async move {
            let result = gallery::source::load_active(&crate::net::api::HttpProductSource, &query).await;
            let Some(outcome) = overlay.try_update_value(|o| o.finish_load(ticket, result)) else {
                return;
            };
            log::debug!("gallery: load finished: {outcome:?}");
            if overlay.try_with_value(|o| view_state.publish(o, &money)).is_none() {
                log::debug!("gallery: unmounted before load finished");
            }
        });
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = modal_ref.get() {
            if let Err(e) = el.focus() {
                log::debug!("gallery: focus failed: {e:?}");
            }
        }
    });

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(el) = modal_ref.get_untracked() else {
                    return;
                };
                let rect = crate::util::dom::element_rect(&el);
                let client = crate::util::dom::client_point(&ev);
                let Some((response, paint)) = overlay.try_update_value(|o| route_pointer_move(o, client, &rect)) else {
                    return;
                };
                if let Some(transform) = paint {
                    view_state.transform.set(transform);
                }
                apply_response(response, overlay, frames, quiet);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_enter = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(response) = overlay.try_update_value(GalleryOverlay::pointer_enter) {
                    apply_response(response, overlay, frames, quiet);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(response) = overlay.try_update_value(GalleryOverlay::pointer_leave) {
                    quiet.set_value(None);
                    apply_response(response, overlay, frames, quiet);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ui.update(UiState::close_gallery);
        }
    };

    let cards = move || {
        view_state
            .cards
            .get()
            .into_iter()
            .map(|card| {
                let GalleryCard { id, title, route, image, price, style } = card;
                let enter_id = id.clone();
                let leave_id = id.clone();
                let class_id = id.clone();
                let alt = title.clone();
                view! {
                    <div
                        class="gallery-card"
                        class:gallery-card--hovered=move || {
                            view_state.hovered.with(|h| h.as_deref() == Some(class_id.as_str()))
                        }
                        style=style
                        on:pointerenter=move |_| {
                            overlay.update_value(|o| o.hover(&enter_id));
                            overlay.with_value(|o| view_state.publish_hover(o));
                        }
                        on:pointerleave=move |_| {
                            overlay.update_value(|o| o.unhover(&leave_id));
                            overlay.with_value(|o| view_state.publish_hover(o));
                        }
                        on:click=move |_| {
                            let route = overlay.try_update_value(|o| o.select(&id)).flatten();
                            log::debug!("gallery: selected {route:?}");
                        }
                    >
                        <a class="gallery-card__link" href=route>
                            <img class="gallery-card__image" src=image alt=alt/>
                            <div class="gallery-card__info">
                                <h3 class="gallery-card__title">{title}</h3>
                                <p class="gallery-card__year">"2024"</p>
                                <p class="gallery-card__price">{price}</p>
                            </div>
                        </a>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || ui.with(|u| u.gallery_open)>
            <div
                class="gallery-modal"
                role="dialog"
                aria-modal="true"
                aria-label="Explore the gallery"
                tabindex="0"
                node_ref=modal_ref
                on:pointermove=on_pointer_move
                on:pointerenter=on_pointer_enter
                on:pointerleave=on_pointer_leave
                on:keydown=on_keydown
            >
                <button
                    class="gallery-modal__close"
                    aria-label="Close gallery"
                    on:click=move |_| ui.update(UiState::close_gallery)
                >
                    "✕"
                </button>
                <div
                    class="gallery-modal__canvas"
                    style=move || format!("{} transform: {};", view_state.canvas.get(), view_state.transform.get())
                >
                    {move || {
                        if view_state.loading.get() {
                            view! { <p class="gallery-modal__loading">"Loading Gallery…"</p> }.into_any()
                        } else {
                            cards().into_any()
                        }
                    }}
                </div>
                <p class="gallery-modal__hint">"Move your cursor to explore"</p>
            </div>
        </Show>
    }
}
