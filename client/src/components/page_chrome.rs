//! Header, footer and cart badge wrapped around every page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::cart::CartState;

/// Page frame: header with brand, navigation and cart badge; footer note.
#[component]
pub fn PageChrome(children: Children) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="page">
            <header class="page-header">
                <div class="page-header__inner">
                    <A href="/" attr:class="page-header__brand">
                        "CHAOS THEORY"
                    </A>
                    <nav class="page-header__nav">
                        <A href="/" attr:class="page-header__link">
                            "Collection"
                        </A>
                        <a href="/blog" class="page-header__link">
                            "Journal"
                        </a>
                    </nav>
                    <button class="page-header__cart" aria-label="Cart">
                        <span class="page-header__cart-icon" aria-hidden="true">
                            "◯"
                        </span>
                        {move || {
                            cart.get()
                                .badge_label()
                                .map(|count| view! { <span class="page-header__cart-badge">{count}</span> })
                        }}
                    </button>
                </div>
            </header>
            <main class="page-main">{children()}</main>
            <footer class="page-footer">
                <p class="page-footer__note">"Curated in Mexico City"</p>
            </footer>
        </div>
    }
}
