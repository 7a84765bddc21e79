//! # Address Formatting
//!
//! Display helpers for Starknet account addresses (`0x`-prefixed hex).
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x029c4a89d43d618d62d0b0aab56ac0f0f5124b692ee2c0428eee29d0e0e97ff2";
//! assert_eq!(format_address(address, 6, 4), "0x029c...7ff2");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of an address.
///
/// Addresses too short to shorten are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// assert_eq!(format_address("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Hex addresses are ASCII, but guard against anything else before slicing
    if address_len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(address_len - suffix_len)
    {
        return address.to_string();
    }

    format!(
        "{}...{}",
        &address[..prefix_len],
        &address[address_len - suffix_len..]
    )
}

/// `0x` plus four hex digits, then the last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
