//! # SVG Minter Core
//!
//! Platform-independent pieces of the SVG minter: everything between the form
//! inputs and the wallet's execute call. The browser front end (`minter-web`)
//! renders this state and supplies the wallet through the [`account`] traits.
//!
//! ## Structure
//!
//! - **[`metadata`]**: token metadata JSON with the SVG embedded as a data URI
//! - **[`byte_array`]**: Cairo `ByteArray` encoding and compiled [`Calldata`](byte_array::Calldata)
//! - **[`mint`]**: [`Minter`](mint::Minter) (validate, build, submit) and [`MintForm`](mint::MintForm) state
//! - **[`network`]**: the Mainnet/Sepolia catalogue and selector state
//! - **[`account`]**: `Account` / `ChainSwitcher` traits implemented by the wallet
//! - **[`config`]**, **[`constants`]**, **[`error`]**, **[`utils`]**
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::mint::{MintRequest, Minter};
//! # async fn run(account: &dyn shared::account::Account) -> shared::error::Result<()> {
//! let minter = Minter::default();
//! let request = MintRequest::new("Art1", "desc", "<svg></svg>");
//! let tx_hash = minter.submit(&request, Some(account)).await?;
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod byte_array;
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod mint;
pub mod network;
pub mod utils;

pub use error::{MintError, Result};
pub use utils::*;
