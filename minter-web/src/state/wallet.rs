//! Wallet state management

use leptos::prelude::*;
use crate::services::wallet::{InjectedAccount, InjectedWallet, WalletProvider, WalletState};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        self.wallet.with(|state| state.provider())
    }

    /// Account to sign mints with, if connected
    pub fn account(&self) -> Option<InjectedAccount> {
        self.wallet.with(|state| state.account())
    }

    /// Chain switcher for the connected wallet
    pub fn switcher(&self) -> Option<InjectedWallet> {
        self.provider().map(InjectedWallet)
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String, provider: WalletProvider) {
        self.wallet.set(WalletState::Connected { address, provider });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
