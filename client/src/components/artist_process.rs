//! Split-screen "drip technique" section with a scroll-linked image.
//!
//! The image shifts from -20% to 20% of its height as the section travels
//! from entering the viewport bottom to leaving its top.

use leptos::prelude::*;

const PROCESS_IMAGE: &str = "https://images.unsplash.com/photo-1549887534-1541e9326642?w=800&h=1000&fit=crop";

#[component]
pub fn ArtistProcess() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let image_offset = RwSignal::new(gallery::parallax::scroll_parallax_percent(0.0));

    #[cfg(feature = "hydrate")]
    {
        let update = move || {
            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let Some(viewport) = crate::util::dom::viewport_rect() else {
                return;
            };
            let rect = crate::util::dom::element_rect(&section);
            let progress = gallery::parallax::scroll_progress(rect.top, rect.height, viewport.height);
            image_offset.set(gallery::parallax::scroll_parallax_percent(progress));
        };
        Effect::new(move || {
            if section_ref.get().is_some() {
                update();
            }
        });
        let scroll = window_event_listener(leptos::ev::scroll, move |_| update());
        let resize = window_event_listener(leptos::ev::resize, move |_| update());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    }

    view! {
        <section class="artist-process" node_ref=section_ref>
            <div class="artist-process__grid">
                <div class="artist-process__text">
                    <h2 class="artist-process__title">"The Drip" <br/> "Technique"</h2>
                    <p class="artist-process__lead">
                        "A revolutionary method pioneered by Jackson Pollock in the late 1940s, the drip technique abandoned traditional brushwork in favor of pure gestural abstraction."
                    </p>
                    <p>
                        "Paint is poured, dripped, and thrown onto canvas laid flat on the floor, allowing the artist to work from all angles. The resulting compositions capture spontaneous movement frozen in time."
                    </p>
                    <p class="artist-process__quote">"\"I am nature\" (Jackson Pollock, 1950)"</p>
                    <div class="artist-process__stats">
                        <div>
                            <div class="artist-process__stat">"8"</div>
                            <div class="artist-process__stat-label">"Pieces"</div>
                        </div>
                        <div>
                            <div class="artist-process__stat">"1/1"</div>
                            <div class="artist-process__stat-label">"Edition"</div>
                        </div>
                        <div>
                            <div class="artist-process__stat">"2024"</div>
                            <div class="artist-process__stat-label">"Series"</div>
                        </div>
                    </div>
                </div>
                <div class="artist-process__media">
                    <div
                        class="artist-process__parallax"
                        style:transform=move || format!("translateY({:.2}%)", image_offset.get())
                    >
                        <img class="artist-process__image" src=PROCESS_IMAGE alt="Abstract expressionism process"/>
                    </div>
                </div>
            </div>
        </section>
    }
}
