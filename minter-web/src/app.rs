//! SVG Minter Web App - Leptos Frontend
//!
//! Wallet widget and network dropdown on top, routed pages below.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use shared::mint::Minter;

use crate::components::{ConnectWidget, Navbar, NetworkSelector};
use crate::pages::{MintPage, StatusPage};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(minter: Minter) -> impl IntoView {
    provide_wallet_context();
    provide_context(minter);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <header class="toolbar">
                    <ConnectWidget/>
                    <NetworkSelector/>
                </header>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=MintPage/>
                        <Route path=path!("/status") view=StatusPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Minter"</span>
            </A>
        </div>
    }
}
