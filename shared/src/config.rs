//! # Mint Configuration
//!
//! [`MintConfig`] holds the call target and fee ceiling used by every mint.
//! The defaults come from [`crate::constants`]; the front end validates the
//! config once and provides it through context.
//!
//! ```rust
//! use shared::config::MintConfig;
//!
//! let config = MintConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.entrypoint, "mint");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{CONTRACT_ADDRESS, DEFAULT_MAX_FEE, MINT_ENTRYPOINT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Entrypoint cannot be empty")]
    EmptyEntrypoint,

    #[error("Max fee must be greater than zero")]
    ZeroMaxFee,
}

/// Call target and fee settings for mint submissions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintConfig {
    /// Hex address of the NFT contract
    pub contract_address: String,

    /// Entrypoint name on the contract
    pub entrypoint: String,

    /// Maximum fee in wei
    pub max_fee: u128,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            contract_address: CONTRACT_ADDRESS.to_string(),
            entrypoint: MINT_ENTRYPOINT.to_string(),
            max_fee: DEFAULT_MAX_FEE,
        }
    }
}

impl MintConfig {
    pub fn with_contract_address(mut self, address: impl Into<String>) -> Self {
        self.contract_address = address.into();
        self
    }

    pub fn with_max_fee(mut self, max_fee: u128) -> Self {
        self.max_fee = max_fee;
        self
    }

    /// Validate configuration values.
    ///
    /// The address must be `0x`-prefixed hex that fits in a felt (at most 64
    /// hex digits).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let digits = self
            .contract_address
            .strip_prefix("0x")
            .ok_or_else(|| ConfigError::InvalidAddress(self.contract_address.clone()))?;

        if digits.is_empty()
            || digits.len() > 64
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::InvalidAddress(self.contract_address.clone()));
        }

        if self.entrypoint.trim().is_empty() {
            return Err(ConfigError::EmptyEntrypoint);
        }

        if self.max_fee == 0 {
            return Err(ConfigError::ZeroMaxFee);
        }

        Ok(())
    }
}
