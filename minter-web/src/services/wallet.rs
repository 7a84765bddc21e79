//! Injected Starknet Wallet Integration via wasm-bindgen
//!
//! Browser wallets (Argent X, Braavos) inject a `window.starknet_*` object.
//! This module wraps detection, connection, chain switching and call
//! execution, and exposes the connected wallet through the core
//! [`Account`] / [`ChainSwitcher`] traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::account::{Account, Call, ChainSwitcher, InvocationDetails, InvokeResult};
use shared::network::Network;
use wasm_bindgen::prelude::*;

/// Supported wallet provider types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    ArgentX,
    Braavos,
}

impl WalletProvider {
    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::ArgentX => "Argent X",
            WalletProvider::Braavos => "Braavos",
        }
    }

    /// Identifier understood by the JS helpers.
    pub fn id(&self) -> &'static str {
        match self {
            WalletProvider::ArgentX => "argentx",
            WalletProvider::Braavos => "braavos",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "argentx" => Some(WalletProvider::ArgentX),
            "braavos" => Some(WalletProvider::Braavos),
            _ => None,
        }
    }
}

// ============================================================================
// WALLET DETECTION, CONNECTION AND EXECUTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function getWallet(provider) {
    if (provider === 'argentx') {
        return window.starknet_argentX || null;
    }
    if (provider === 'braavos') {
        return window.starknet_braavos || null;
    }
    return null;
}

function errorMessage(error) {
    if (error instanceof Error) {
        return error.message;
    }
    if (error && typeof error === 'object' && error.message) {
        return String(error.message);
    }
    return String(error);
}

export function detectWallets() {
    const wallets = [];
    if (window.starknet_argentX) {
        wallets.push({ name: 'Argent X', provider: 'argentx', installed: true });
    }
    if (window.starknet_braavos) {
        wallets.push({ name: 'Braavos', provider: 'braavos', installed: true });
    }
    return wallets;
}

export async function connectWallet(provider) {
    const wallet = getWallet(provider);
    if (!wallet) {
        throw provider + ' wallet not found. Please install it first.';
    }
    try {
        await wallet.enable();
    } catch (error) {
        throw errorMessage(error);
    }
    if (!wallet.isConnected || !wallet.account) {
        throw 'Wallet did not grant account access';
    }
    return {
        address: wallet.selectedAddress || wallet.account.address,
        chainId: wallet.chainId || null,
    };
}

export function getWalletAddress(provider) {
    const wallet = getWallet(provider);
    if (wallet && wallet.isConnected) {
        return wallet.selectedAddress || (wallet.account && wallet.account.address) || null;
    }
    return null;
}

export async function switchChain(provider, chainId) {
    const wallet = getWallet(provider);
    if (!wallet) {
        throw 'Wallet not found';
    }
    try {
        await wallet.request({
            type: 'wallet_switchStarknetChain',
            params: { chainId },
        });
    } catch (error) {
        throw errorMessage(error);
    }
}

export async function executeCall(provider, call, maxFee) {
    const wallet = getWallet(provider);
    if (!wallet || !wallet.account) {
        throw 'Wallet not connected';
    }
    try {
        const res = await wallet.account.execute(call, undefined, { maxFee });
        return res.transaction_hash;
    } catch (error) {
        throw errorMessage(error);
    }
}
")]
extern "C" {
    /// List installed wallets as `[{ name, provider, installed }]`
    fn detectWallets() -> JsValue;

    /// Enable the wallet and return `{ address, chainId }`
    #[wasm_bindgen(catch)]
    async fn connectWallet(provider: &str) -> Result<JsValue, JsValue>;

    /// Address of an already connected wallet (null otherwise)
    fn getWalletAddress(provider: &str) -> Option<String>;

    #[wasm_bindgen(catch)]
    async fn switchChain(provider: &str, chain_id: &str) -> Result<JsValue, JsValue>;

    /// Execute `{ contractAddress, entrypoint, calldata }`; resolves to the transaction hash
    #[wasm_bindgen(catch)]
    async fn executeCall(provider: &str, call: JsValue, max_fee: &str) -> Result<JsValue, JsValue>;
}

/// Convert a rejected JS promise value to a message.
fn js_error_message(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("Wallet error: {:?}", err))
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state with provider information
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String, provider: WalletProvider },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            WalletState::Connected { provider, .. } => Some(*provider),
            _ => None,
        }
    }

    /// Account handle for the connected wallet.
    pub fn account(&self) -> Option<InjectedAccount> {
        match self {
            WalletState::Connected { address, provider } => Some(InjectedAccount {
                address: address.clone(),
                provider: *provider,
            }),
            _ => None,
        }
    }
}

/// Detected wallet information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    pub provider: String,
    pub installed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectResponse {
    address: String,
    chain_id: Option<String>,
}

/// Get list of installed wallet providers
pub fn get_available_wallets() -> Vec<WalletProvider> {
    let wallets: Vec<DetectedWallet> =
        serde_wasm_bindgen::from_value(detectWallets()).unwrap_or_else(|_| vec![]);
    wallets
        .iter()
        .filter(|w| w.installed)
        .filter_map(|w| WalletProvider::from_id(&w.provider))
        .collect()
}

/// Connect to a wallet provider, returning the account address
pub async fn connect_wallet_provider(provider: WalletProvider) -> Result<String, String> {
    let result = connectWallet(provider.id()).await.map_err(js_error_message)?;
    let response: ConnectResponse = serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Unexpected connect response: {}", e))?;

    let network = response
        .chain_id
        .as_deref()
        .and_then(Network::from_chain_id)
        .map(|n| n.display_name())
        .unwrap_or("unknown network");
    log::info!("Connected {} on {}", provider.name(), network);
    Ok(response.address)
}

/// Get address from an already connected wallet
pub fn get_connected_wallet_address(provider: WalletProvider) -> Option<String> {
    getWalletAddress(provider.id())
}

/// Connected account backed by an injected wallet
#[derive(Clone, Debug, PartialEq)]
pub struct InjectedAccount {
    address: String,
    provider: WalletProvider,
}

#[async_trait(?Send)]
impl Account for InjectedAccount {
    fn address(&self) -> &str {
        &self.address
    }

    async fn execute(&self, call: &Call, details: &InvocationDetails) -> Result<InvokeResult, String> {
        let js_call = serde_wasm_bindgen::to_value(call)
            .map_err(|e| format!("Failed to encode call: {}", e))?;

        let hash = executeCall(self.provider.id(), js_call, &details.max_fee_hex())
            .await
            .map_err(js_error_message)?;

        hash.as_string()
            .map(|transaction_hash| InvokeResult { transaction_hash })
            .ok_or_else(|| "Wallet returned no transaction hash".to_string())
    }
}

/// Chain switching through an injected wallet
#[derive(Clone, Copy, Debug)]
pub struct InjectedWallet(pub WalletProvider);

#[async_trait(?Send)]
impl ChainSwitcher for InjectedWallet {
    async fn switch_chain(&self, chain_id: &str) -> Result<(), String> {
        switchChain(self.0.id(), chain_id)
            .await
            .map(|_| ())
            .map_err(js_error_message)
    }
}
