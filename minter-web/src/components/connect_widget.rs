//! Wallet Connection Widget
//!
//! Lists the injected Starknet wallets, connects to the one the user picks and
//! shows the connected address with a Disconnect button.

use leptos::prelude::*;
use leptos::logging::log;
use shared::utils::truncate_address;
use crate::services::wallet::{
    WalletProvider,
    WalletState,
    connect_wallet_provider,
    get_available_wallets,
    get_connected_wallet_address,
};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectWidget() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let (available_wallets, set_available_wallets) = signal::<Vec<WalletProvider>>(vec![]);

    // Detect wallets on mount and pick up a session the wallet already authorized
    Effect::new(move || {
        let providers = get_available_wallets();
        log!("Detected {} Starknet wallet(s)", providers.len());

        if !wallet_ctx.wallet.with_untracked(|state| state.is_connected()) {
            let restored = providers.iter().find_map(|provider| {
                get_connected_wallet_address(*provider).map(|address| (address, *provider))
            });
            if let Some((address, provider)) = restored {
                log!("Restored {} session", provider.name());
                wallet_ctx.set_connected(address, provider);
            }
        }

        set_available_wallets.set(providers);
    });

    let connect = move |provider: WalletProvider| {
        wallet_ctx.set_connecting();

        leptos::task::spawn_local(async move {
            match connect_wallet_provider(provider).await {
                Ok(address) => {
                    log!("Wallet connected: {}", address);
                    wallet_ctx.set_connected(address, provider);
                }
                Err(e) => {
                    log!("Failed to connect {}: {}", provider.name(), e);
                    wallet_ctx.set_error(e);
                }
            }
        });
    };

    let disconnect = move |_| {
        log!("Wallet disconnected");
        wallet_ctx.disconnect();
    };

    view! {
        <div class="connect-widget">
            {move || match wallet_ctx.wallet.get() {
                WalletState::Connected { address, provider } => view! {
                    <div class="connected">
                        <p class="success">
                            "Connected: "
                            <span class="address" title=address.clone()>{truncate_address(&address)}</span>
                        </p>
                        <p class="provider">{provider.name()}</p>
                        <button class="btn btn-danger" on:click=disconnect>
                            "Disconnect"
                        </button>
                    </div>
                }.into_any(),
                WalletState::Connecting => view! {
                    <div class="info">
                        <div class="spinner"></div>
                        <p>"Approve the connection in your wallet..."</p>
                    </div>
                }.into_any(),
                state => {
                    let error = match state {
                        WalletState::Error(e) => Some(e),
                        _ => None,
                    };
                    view! {
                        <div>
                            {error.map(|err| view! {
                                <div class="error">
                                    <p>{err}</p>
                                </div>
                            })}
                            {move || {
                                let wallets = available_wallets.get();
                                if wallets.is_empty() {
                                    view! {
                                        <p class="info">
                                            "No Starknet wallet detected. Install Argent X or Braavos to continue."
                                        </p>
                                    }.into_any()
                                } else {
                                    wallets
                                        .into_iter()
                                        .map(|provider| view! {
                                            <button class="btn" on:click=move |_| connect(provider)>
                                                {format!("Connect {}", provider.name())}
                                            </button>
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
