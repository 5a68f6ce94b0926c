//! Textual UUID codec.
//!
//! A UUID is a 128-bit value that travels as text in several encodings. This
//! crate normalises all of them to a single value type ([`UuidValue`]) and
//! renders that value back out in each supported form.
//!
//! ## Supported textual forms
//!
//! | Form      | Length | Alphabet                                  | Example |
//! |-----------|--------|-------------------------------------------|---------|
//! | Canonical | 36     | lowercase hex, hyphenated 8-4-4-4-12      | `a7613e0a-5986-11eb-a861-2bf05af69e52` |
//! | Simple    | 32     | lowercase hex, no hyphens                 | `a7613e0a598611eba8612bf05af69e52` |
//! | Base58    | 22     | Bitcoin alphabet (no `0`, `O`, `I`, `l`)  | `MfnmaUvvQ1h8B14vTwt6dX` |
//! | Base32    | 26     | Crockford alphabet (no `I`, `L`, `O`, `U`)| `57C4Z0MPC627NTGR9BY1DFD7JJ` |
//!
//! The four lengths are pairwise distinct, so [`UuidValue::parse`] detects
//! the form from the input length alone and no input is ever ambiguous
//! between two grammars. Hex and Base32 parse case-insensitively; Base58 is
//! case-sensitive by construction.
//!
//! ## Fixed-width encodings
//!
//! `to_base58` and `to_base32` always produce 22 and 26 characters
//! respectively, whatever the magnitude of the value. Base58 output is
//! left-padded with `1` (the zero digit) and Base32 with `0`, so values with
//! many leading zero bits round-trip losslessly instead of shrinking.
//!
//! ## Example
//!
//! ```
//! use uid_codec::UuidValue;
//!
//! let value = UuidValue::parse("MfnmaUvvQ1h8B14vTwt6dX")?;
//! assert_eq!(value.to_canonical(), "a7613e0a-5986-11eb-a861-2bf05af69e52");
//! assert_eq!(value.to_base32(), "57C4Z0MPC627NTGR9BY1DFD7JJ");
//! # Ok::<(), uid_codec::MalformedUuid>(())
//! ```

mod value;

pub use value::{UuidValue, Uuid, Variant};

/// Errors raised when input text matches no supported UUID encoding.
///
/// Always recoverable by the caller; parsing is all-or-nothing and a failed
/// parse constructs no partial value.
#[derive(Debug, thiserror::Error)]
pub enum MalformedUuid {
    /// The input length matches none of the supported grammars.
    #[error("no supported UUID encoding is {0} characters long")]
    UnrecognisedLength(usize),
    /// The input has a hex-form length but is not valid RFC 4122 hex.
    #[error("invalid hexadecimal UUID: {0}")]
    Hex(#[from] uuid::Error),
    /// The input has the Base58 length but is not valid Base58.
    #[error("invalid Base58 UUID: {0}")]
    Base58(#[from] bs58::decode::Error),
    /// The input decoded as Base58 but the value exceeds 128 bits.
    #[error("Base58 value does not fit in 128 bits")]
    Base58Overflow,
    /// The input has the Base32 length but is not valid Crockford Base32.
    #[error("invalid Base32 UUID: {0}")]
    Base32(#[from] ulid::DecodeError),
    /// The input decoded as Base32 but the value exceeds 128 bits.
    #[error("Base32 value does not fit in 128 bits")]
    Base32Overflow,
}
