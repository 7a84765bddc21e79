//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Starknet SVG NFT"</span>
                </A>
                <A href="/status" attr:class="nav-link-clean">
                    <span class="nav-link">"Wallet"</span>
                </A>
            </div>
        </nav>
    }
}
