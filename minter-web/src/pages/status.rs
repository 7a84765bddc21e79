//! Wallet Status Page - Show connected wallet info

use leptos::prelude::*;
use leptos_router::components::A;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn StatusPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="card status-card">
            <h1 class="card-title">"Wallet Status"</h1>

            {move || {
                match (wallet_ctx.address(), wallet_ctx.provider()) {
                    (Some(address), Some(provider)) => view! {
                        <div>
                            <div class="status-panel">
                                <p class="label">"Status"</p>
                                <p class="value connected">"Connected"</p>

                                <p class="label">"Wallet"</p>
                                <p class="value">{provider.name()}</p>

                                <p class="label">"Account Address"</p>
                                <p class="value address">{address}</p>
                            </div>

                            <button
                                class="btn btn-danger"
                                on:click=move |_| wallet_ctx.disconnect()
                            >
                                "Disconnect Wallet"
                            </button>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div>
                            <p class="info">"No wallet connected"</p>
                            <A href="/">
                                <span class="btn">"Back to Minter"</span>
                            </A>
                        </div>
                    }.into_any(),
                }
            }}
        </div>
    }
}
