//! Frameless collection card.

use catalog::Collection;
use leptos::prelude::*;

/// Image-first card; clicking hands the collection id to `on_view`.
#[component]
pub fn CollectionCard(collection: Collection, on_view: Callback<String>) -> impl IntoView {
    let Collection { id, name, description, image, .. } = collection;
    let alt = name.clone();

    view! {
        <div class="collection-card" on:click=move |_| on_view.run(id.clone())>
            <div class="collection-card__frame">
                {match image.filter(|url| !url.trim().is_empty()) {
                    Some(src) => view! { <img class="collection-card__image" src=src alt=alt/> }.into_any(),
                    None => view! { <div class="collection-card__empty">"No Image"</div> }.into_any(),
                }}
            </div>
            <div class="collection-card__meta">
                <h3 class="collection-card__name">{name}</h3>
                {description.map(|text| view! { <p class="collection-card__description">{text}</p> })}
                <div class="collection-card__cta">"View Collection →"</div>
            </div>
        </div>
    }
}
