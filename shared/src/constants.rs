//! Fixed chain and contract identifiers

/// Deployed SVG NFT contract that receives `mint` calls.
pub const CONTRACT_ADDRESS: &str =
    "0x029c4a89d43d618d62d0b0aab56ac0f0f5124b692ee2c0428eee29d0e0e97ff2";

/// Entrypoint invoked on [`CONTRACT_ADDRESS`].
pub const MINT_ENTRYPOINT: &str = "mint";

/// Fee ceiling passed with every mint, in wei (0.001 ETH).
pub const DEFAULT_MAX_FEE: u128 = 1_000_000_000_000_000;

// Chain identifiers (short-string encodings of "SN_MAIN" / "SN_SEPOLIA")
pub const SN_MAIN_CHAIN_ID: &str = "0x534e5f4d41494e";
pub const SN_SEPOLIA_CHAIN_ID: &str = "0x534e5f5345504f4c4941";

/// Media type used for the `image` data URI.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";
