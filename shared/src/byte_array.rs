//! # Cairo ByteArray Encoding
//!
//! Strings passed to a Cairo contract as `ByteArray` are split into 31-byte
//! words. Full words go into `data`; the trailing partial word is carried as
//! `pending_word` together with its byte length. Compiled calldata is
//!
//! ```text
//! [data.len, data[0], ..., data[n-1], pending_word, pending_word_len]
//! ```
//!
//! with every felt rendered in decimal.
//!
//! ```rust
//! use shared::byte_array::{ByteArray, Calldata};
//!
//! let calldata = Calldata::from(&ByteArray::from_str_bytes("hello"));
//! assert_eq!(calldata.to_string(), "0,448378203247,5");
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of bytes packed into one felt word.
pub const BYTES_PER_WORD: usize = 31;

/// A field element built from at most [`BYTES_PER_WORD`] big-endian bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Felt(BigUint);

impl Felt {
    pub fn zero() -> Self {
        Felt(BigUint::default())
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= BYTES_PER_WORD);
        Felt(BigUint::from_bytes_be(bytes))
    }

    /// Decimal form, as compiled into calldata.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// `0x`-prefixed lowercase hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", self.0.to_str_radix(16))
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("short string is longer than 31 bytes: {0}")]
    TooLong(String),

    #[error("short string contains non-ASCII characters: {0}")]
    NonAscii(String),

    #[error("invalid calldata element: {0:?}")]
    InvalidElement(String),
}

/// Encode an ASCII string of at most 31 characters as a single felt, in hex.
///
/// ```rust
/// use shared::byte_array::encode_short_string;
///
/// assert_eq!(encode_short_string("SN_MAIN").unwrap(), "0x534e5f4d41494e");
/// ```
pub fn encode_short_string(value: &str) -> Result<String, EncodeError> {
    if !value.is_ascii() {
        return Err(EncodeError::NonAscii(value.to_string()));
    }
    if value.len() > BYTES_PER_WORD {
        return Err(EncodeError::TooLong(value.to_string()));
    }
    Ok(Felt::from_bytes_be(value.as_bytes()).to_hex())
}

/// Cairo `ByteArray` representation of a UTF-8 string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteArray {
    pub data: Vec<Felt>,
    pub pending_word: Felt,
    pub pending_word_len: usize,
}

impl ByteArray {
    /// Split `value` into 31-byte words.
    ///
    /// Lengths are counted in UTF-8 bytes, so multi-byte characters may
    /// straddle two words.
    pub fn from_str_bytes(value: &str) -> Self {
        let bytes = value.as_bytes();
        let full_words = bytes.len() / BYTES_PER_WORD;
        let (full, pending) = bytes.split_at(full_words * BYTES_PER_WORD);

        Self {
            data: full
                .chunks_exact(BYTES_PER_WORD)
                .map(Felt::from_bytes_be)
                .collect(),
            pending_word: Felt::from_bytes_be(pending),
            pending_word_len: pending.len(),
        }
    }

    /// Number of calldata elements this value compiles to.
    pub fn calldata_len(&self) -> usize {
        self.data.len() + 3
    }
}

/// Compiled calldata: the ordered felt arguments of a contract call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calldata(Vec<String>);

impl Calldata {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&ByteArray> for Calldata {
    fn from(value: &ByteArray) -> Self {
        let mut elements = Vec::with_capacity(value.calldata_len());
        elements.push(value.data.len().to_string());
        elements.extend(value.data.iter().map(Felt::to_decimal));
        elements.push(value.pending_word.to_decimal());
        elements.push(value.pending_word_len.to_string());
        Calldata(elements)
    }
}

/// Comma-joined form, as handed to the wallet.
impl fmt::Display for Calldata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Split a comma-joined calldata string back into its arguments.
impl FromStr for Calldata {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Calldata::default());
        }

        s.split(',')
            .map(|element| {
                if !element.is_empty() && element.chars().all(|c| c.is_ascii_digit()) {
                    Ok(element.to_string())
                } else {
                    Err(EncodeError::InvalidElement(element.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Calldata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let array = ByteArray::from_str_bytes("");
        assert!(array.data.is_empty());
        assert_eq!(array.pending_word_len, 0);
        assert_eq!(Calldata::from(&array).as_slice(), ["0", "0", "0"]);
    }

    #[test]
    fn test_short_string_is_pending_word() {
        let array = ByteArray::from_str_bytes("hello");
        assert!(array.data.is_empty());
        assert_eq!(array.pending_word.to_hex(), "0x68656c6c6f");
        assert_eq!(array.pending_word_len, 5);
    }

    #[test]
    fn test_exact_word_has_empty_pending() {
        let value = "a".repeat(BYTES_PER_WORD);
        let array = ByteArray::from_str_bytes(&value);
        assert_eq!(array.data.len(), 1);
        assert_eq!(array.pending_word, Felt::zero());
        assert_eq!(array.pending_word_len, 0);

        let calldata = Calldata::from(&array);
        assert_eq!(calldata.len(), 4);
        assert_eq!(calldata.as_slice()[0], "1");
        assert_eq!(calldata.as_slice()[2..], ["0", "0"]);
    }

    #[test]
    fn test_long_string_splits_into_words() {
        let value = "b".repeat(BYTES_PER_WORD * 2 + 4);
        let array = ByteArray::from_str_bytes(&value);
        assert_eq!(array.data.len(), 2);
        assert_eq!(array.data[0], array.data[1]);
        assert_eq!(array.pending_word, Felt::from_bytes_be(b"bbbb"));
        assert_eq!(array.pending_word_len, 4);
        assert_eq!(Calldata::from(&array).len(), array.calldata_len());
    }

    #[test]
    fn test_multibyte_characters_count_bytes() {
        // "é" is two bytes in UTF-8
        let array = ByteArray::from_str_bytes("é");
        assert_eq!(array.pending_word_len, 2);
        assert_eq!(array.pending_word.to_hex(), "0xc3a9");
    }

    #[test]
    fn test_calldata_string_round_trip() {
        let calldata = Calldata::from(&ByteArray::from_str_bytes(&"xyz".repeat(40)));
        let parsed: Calldata = calldata.to_string().parse().unwrap();
        assert_eq!(parsed, calldata);
    }

    #[test]
    fn test_calldata_parse_rejects_garbage() {
        assert!("1,,2".parse::<Calldata>().is_err());
        assert!("0x12".parse::<Calldata>().is_err());
        assert!("".parse::<Calldata>().unwrap().is_empty());
    }

    #[test]
    fn test_encode_short_string() {
        assert_eq!(encode_short_string("SN_SEPOLIA").unwrap(), "0x534e5f5345504f4c4941");
        assert!(matches!(
            encode_short_string(&"x".repeat(32)),
            Err(EncodeError::TooLong(_))
        ));
        assert!(matches!(encode_short_string("né"), Err(EncodeError::NonAscii(_))));
    }
}
