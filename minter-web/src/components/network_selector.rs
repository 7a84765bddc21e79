//! Network Switch Dropdown
//!
//! The displayed selection changes on click; the wallet's switch request runs
//! afterwards and only the latest request's failure is shown.

use leptos::prelude::*;
use leptos::logging::log;
use shared::account::ChainSwitcher;
use shared::network::{Network, NetworkSelector as SelectorState};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn NetworkSelector() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let selector = RwSignal::new(SelectorState::default());

    let select = move |network: Network| {
        let Some((chain_id, seq)) = selector.try_update(|s| s.select(network)) else {
            return;
        };
        log!("Switching network to {} ({})", network.display_name(), chain_id);

        match wallet_ctx.switcher() {
            Some(switcher) => {
                leptos::task::spawn_local(async move {
                    let result = switcher.switch_chain(chain_id).await;
                    selector.update(|s| s.record_switch(seq, result));
                });
            }
            None => selector.update(|s| {
                s.record_switch(seq, Err("wallet not connected".to_string()))
            }),
        }
    };

    view! {
        <div class="network-selector">
            <button class="network-toggle" on:click=move |_| selector.update(|s| s.toggle())>
                <span>{move || selector.with(|s| s.selected.display_name())}</span>
                <span>{move || if selector.with(|s| s.is_open) { "▲" } else { "▼" }}</span>
            </button>

            <Show when=move || selector.with(|s| s.is_open)>
                <div class="network-options">
                    {Network::ALL
                        .into_iter()
                        .map(|network| view! {
                            <div
                                class="network-option"
                                class:selected=move || selector.with(|s| s.is_selected(network))
                                on:click=move |_| select(network)
                            >
                                <Show when=move || selector.with(|s| s.is_selected(network))>
                                    <span class="check">"✓"</span>
                                </Show>
                                {network.display_name()}
                            </div>
                        })
                        .collect_view()}
                </div>
            </Show>

            {move || selector.with(|s| s.error_message()).map(|msg| view! {
                <p class="error">{msg}</p>
            })}
        </div>
    }
}
