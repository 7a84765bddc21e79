//! # Token Metadata
//!
//! Builds the JSON metadata string stored on-chain for each minted token.
//! The SVG markup is embedded verbatim as a data URI; double quotes inside it
//! are swapped for single quotes so the URI stays a clean JSON string value.
//!
//! ```rust
//! use shared::metadata::build_metadata;
//!
//! let json = build_metadata("Art1", "desc", "<svg></svg>").unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"name":"Art1","description":"desc","image":"data:image/svg+xml,<svg></svg>"}"#
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::SVG_MEDIA_TYPE;
use crate::error::Result;

/// Metadata payload for one token. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl TokenMetadata {
    pub fn new(name: &str, description: &str, svg_data: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: svg_data_uri(svg_data),
        }
    }

    /// Compact JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Wrap SVG markup in a `data:image/svg+xml,` URI.
pub fn svg_data_uri(svg_data: &str) -> String {
    format!("data:{},{}", SVG_MEDIA_TYPE, svg_data.replace('"', "'"))
}

/// Build the metadata JSON string for a mint.
pub fn build_metadata(name: &str, description: &str, svg_data: &str) -> Result<String> {
    TokenMetadata::new(name, description, svg_data).to_json()
}
