//! # Account Traits
//!
//! Seams between the mint flow and the wallet that signs and sends calls.
//! The browser front end implements these over the injected wallet object;
//! tests implement them in memory.
//!
//! Futures are `?Send` because wallet handles live on the single browser
//! thread.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::byte_array::Calldata;

/// A single contract invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub contract_address: String,
    pub entrypoint: String,
    pub calldata: Calldata,
}

/// Transaction-level parameters sent alongside a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvocationDetails {
    /// Fee ceiling in wei
    pub max_fee: u128,
}

impl InvocationDetails {
    /// `0x`-prefixed hex form of the fee ceiling.
    pub fn max_fee_hex(&self) -> String {
        format!("{:#x}", self.max_fee)
    }
}

/// Response of a successful execute call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeResult {
    pub transaction_hash: String,
}

/// A connected account able to execute contract calls.
#[async_trait(?Send)]
pub trait Account {
    /// Address of the connected account
    fn address(&self) -> &str;

    /// Sign and submit `call`, returning once the wallet settles.
    async fn execute(&self, call: &Call, details: &InvocationDetails) -> Result<InvokeResult, String>;
}

/// Wallet-side network switching.
#[async_trait(?Send)]
pub trait ChainSwitcher {
    /// Ask the wallet to move to `chain_id` (hex chain identifier).
    async fn switch_chain(&self, chain_id: &str) -> Result<(), String>;
}
