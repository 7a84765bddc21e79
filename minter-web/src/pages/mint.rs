//! Mint Page
//!
//! Collects name, description and SVG markup, then mints through the
//! connected wallet. The button stays disabled while a mint is pending or no
//! wallet is connected.

use leptos::prelude::*;
use leptos::logging::log;
use shared::mint::{MintForm, Minter};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn MintPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let minter = StoredValue::new(expect_context::<Minter>());
    let form = RwSignal::new(MintForm::default());

    let mint = move || {
        let account = wallet_ctx.account();
        let connected = account.is_some();
        let Some(request) = form.try_update(|f| f.begin_submit(connected)).flatten() else {
            log!("Mint not started");
            return;
        };

        let minter = minter.get_value();

        leptos::task::spawn_local(async move {
            let result = minter.submit(&request, account.as_ref()).await;
            form.update(|f| f.finish_submit(result));
        });
    };

    view! {
        <div class="card mint-card">
            <h1>"SVG Minter"</h1>

            <input
                type="text"
                placeholder="Enter NFT name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
            />

            <input
                type="text"
                placeholder="Enter NFT description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
            />

            <textarea
                class="svg-input"
                placeholder="Enter SVG data here"
                prop:value=move || form.with(|f| f.svg_data.clone())
                on:input=move |ev| form.update(|f| f.set_svg_data(event_target_value(&ev)))
            ></textarea>

            <button
                class="btn"
                on:click=move |_| mint()
                disabled=move || !form.with(|f| f.can_submit(wallet_ctx.is_connected()))
            >
                {move || if form.with(|f| f.is_submitting) { "Minting..." } else { "Mint" }}
            </button>

            {move || form.with(|f| f.error.clone()).map(|err| view! {
                <div class="error">
                    <p>{err}</p>
                </div>
            })}

            {move || form.with(|f| f.transaction_hash.clone()).map(|hash| view! {
                <div class="success">
                    <p>"Minted successfully! Transaction hash:"</p>
                    <p class="tx-hash">{hash}</p>
                </div>
            })}
        </div>
    }
}
