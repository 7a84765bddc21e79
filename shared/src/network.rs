//! # Networks
//!
//! The two Starknet networks the minter can target, and the dropdown state
//! used to pick between them. The selection is purely local: it changes the
//! moment the user clicks, whatever the wallet does with the switch request.

use serde::{Deserialize, Serialize};

use crate::account::ChainSwitcher;
use crate::constants::{SN_MAIN_CHAIN_ID, SN_SEPOLIA_CHAIN_ID};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Sepolia,
}

impl Network {
    /// Options in dropdown order.
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Sepolia];

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Sepolia => "Sepolia",
        }
    }

    /// Hex chain identifier sent to the wallet.
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => SN_MAIN_CHAIN_ID,
            Network::Sepolia => SN_SEPOLIA_CHAIN_ID,
        }
    }

    /// Short-string name the chain identifier encodes.
    pub fn short_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "SN_MAIN",
            Network::Sepolia => "SN_SEPOLIA",
        }
    }

    /// Look up a network by hex chain identifier, ignoring case.
    pub fn from_chain_id(chain_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.chain_id().eq_ignore_ascii_case(chain_id))
    }
}

/// Dropdown state for the network selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkSelector {
    pub selected: Network,
    pub is_open: bool,
    pub switch_error: Option<String>,
    /// Sequence number of the latest switch request.
    pub switch_seq: u64,
}

impl NetworkSelector {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn is_selected(&self, network: Network) -> bool {
        self.selected == network
    }

    /// Show `network` as selected and close the dropdown.
    ///
    /// Returns the chain identifier to request from the wallet and the
    /// sequence number to hand back to [`record_switch`](Self::record_switch).
    pub fn select(&mut self, network: Network) -> (&'static str, u64) {
        self.selected = network;
        self.is_open = false;
        self.switch_error = None;
        self.switch_seq += 1;
        (network.chain_id(), self.switch_seq)
    }

    /// Record the wallet's answer to switch request `seq`.
    ///
    /// Answers to anything but the latest request are dropped.
    pub fn record_switch(&mut self, seq: u64, result: Result<(), String>) {
        if seq != self.switch_seq {
            log::debug!("Ignoring stale network switch result #{}", seq);
            return;
        }
        match result {
            Ok(()) => self.switch_error = None,
            Err(err) => {
                log::warn!("Network switch failed: {}", err);
                self.switch_error = Some(err);
            }
        }
    }

    /// Inline error text, if the last switch failed.
    pub fn error_message(&self) -> Option<String> {
        self.switch_error
            .as_ref()
            .map(|err| format!("Error switching network: {}", err))
    }

    /// Select `network` and ask `switcher` to follow.
    pub async fn select_and_switch<S>(&mut self, network: Network, switcher: &S)
    where
        S: ChainSwitcher + ?Sized,
    {
        let (chain_id, seq) = self.select(network);
        let result = switcher.switch_chain(chain_id).await;
        self.record_switch(seq, result);
    }
}
