//! # Mint Error Handling
//!
//! [`MintError`] covers every way a mint can fail before or during submission.
//! All variants are caught by the submit operation, logged with their cause and
//! turned into a user-facing string with [`MintError::user_message`].
//!
//! ## Error Categories
//!
//! 1. **Input** - [`Validation`](MintError::Validation): a required field is empty
//! 2. **Wallet** - [`Connection`](MintError::Connection): no account is connected
//! 3. **External** - [`Submission`](MintError::Submission): the execute call threw
//! 4. **Internal** - [`Encoding`](MintError::Encoding): the metadata could not be serialized

use thiserror::Error;

/// Convenience type alias for `Result<T, MintError>`.
pub type Result<T> = std::result::Result<T, MintError>;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter all required data before minting.";
pub const NOT_CONNECTED_MESSAGE: &str = "Please connect your wallet first.";
pub const MINT_FAILED_MESSAGE: &str = "An error occurred while minting. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    /// One or more of name, description or SVG data is empty.
    #[error("Validation error: missing fields ({0})")]
    Validation(String),

    /// No wallet account is available to sign the mint.
    #[error("Connection error: wallet not connected")]
    Connection,

    /// The wallet's execute call failed or was rejected.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Metadata serialization failed.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl MintError {
    /// Message shown under the mint form.
    ///
    /// Submission and encoding failures share one generic message; the cause
    /// only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            MintError::Validation(_) => MISSING_FIELDS_MESSAGE,
            MintError::Connection => NOT_CONNECTED_MESSAGE,
            MintError::Submission(_) | MintError::Encoding(_) => MINT_FAILED_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for MintError {
    fn from(err: serde_json::Error) -> Self {
        MintError::Encoding(format!("JSON error: {}", err))
    }
}
