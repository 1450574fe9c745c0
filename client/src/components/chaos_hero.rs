//! Full-screen hero: "CHAOS / CONTROL" with pointer parallax.
//!
//! DESIGN
//! ======
//! Pointer offset from the section center, divided by 20, drives two
//! clamped maps: "CHAOS" follows the pointer, "CONTROL" and the slash move
//! against it. Entering the section toggles a short blur pulse.

use gallery::parallax::HeroParallax;
use leptos::prelude::*;

use crate::util::dom::translate_px;

#[component]
pub fn ChaosHero(on_gallery: Callback<()>) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let parallax = RwSignal::new(HeroParallax::default());
    let hovering = RwSignal::new(false);

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(section) = section_ref.get_untracked() else {
                    return;
                };
                let rect = crate::util::dom::element_rect(&section);
                if let Some(pointer) = gallery::parallax::hero_pointer(crate::util::dom::client_point(&ev), &rect) {
                    parallax.set(gallery::parallax::hero_parallax(pointer));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <section
            class="chaos-hero"
            node_ref=section_ref
            on:pointermove=on_pointer_move
            on:pointerenter=move |_| hovering.set(true)
            on:pointerleave=move |_| hovering.set(false)
        >
            <div class="chaos-hero__drips" aria-hidden="true">
                <div class="chaos-hero__drip chaos-hero__drip--a"></div>
                <div class="chaos-hero__drip chaos-hero__drip--b"></div>
                <div class="chaos-hero__drip chaos-hero__drip--c"></div>
            </div>
            <div class="chaos-hero__type">
                <div
                    class="chaos-hero__word"
                    class:chaos-hero__word--pulse=move || hovering.get()
                    style:transform=move || translate_px(parallax.get().chaos)
                >
                    <h1>"CHAOS"</h1>
                </div>
                <div class="chaos-hero__slash" style:transform=move || translate_px(parallax.get().control)>
                    "/"
                </div>
                <div
                    class="chaos-hero__word chaos-hero__word--late"
                    class:chaos-hero__word--pulse=move || hovering.get()
                    style:transform=move || translate_px(parallax.get().control)
                >
                    <h1>"CONTROL"</h1>
                </div>
                <p class="chaos-hero__subtitle">"A Pollock-Inspired Collection"</p>
                <button class="chaos-hero__gallery" on:click=move |_| on_gallery.run(())>
                    "Gallery"
                </button>
            </div>
            <div class="chaos-hero__scroll" aria-hidden="true">
                <div class="chaos-hero__scroll-bar"></div>
            </div>
        </section>
    }
}
