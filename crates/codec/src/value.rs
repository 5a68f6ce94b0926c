//! The canonical 128-bit UUID value and its textual conversions.

use std::{fmt, str::FromStr};

use ulid::Ulid;

use crate::MalformedUuid;

/// Re-exported for callers that need the underlying types.
pub use ::uuid::{Uuid, Variant};

const CANONICAL_LEN: usize = 36;
const SIMPLE_LEN: usize = 32;
const BASE58_LEN: usize = 22;
const BASE32_LEN: usize = 26;

/// A parsed 128-bit UUID, detached from whichever textual form it arrived in.
///
/// This is the single representation every supported encoding normalises to.
/// Construction goes through [`UuidValue::parse`] (or [`UuidValue::from_u128`]
/// for values built in code); once constructed the value is immutable and
/// freely copyable.
///
/// # Display format
///
/// `Display` renders the canonical RFC 4122 form: 36 characters of lowercase
/// hyphenated hex. The other encodings are available through
/// [`to_base58`](UuidValue::to_base58) and [`to_base32`](UuidValue::to_base32).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UuidValue(Uuid);

impl UuidValue {
    /// Parses any supported textual form into a value.
    ///
    /// The encoding is detected from the input length: 36 characters is
    /// canonical hyphenated hex, 32 is un-hyphenated hex, 22 is Base58 and
    /// 26 is Base32. Both hex forms and Base32 accept either letter case.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedUuid`] when the length matches no grammar, when a
    /// length-matched input contains characters outside its alphabet, or
    /// when a Base58/Base32 input decodes to a number wider than 128 bits.
    pub fn parse(input: &str) -> Result<Self, MalformedUuid> {
        match input.len() {
            CANONICAL_LEN | SIMPLE_LEN => Ok(Self(Uuid::parse_str(input)?)),
            BASE58_LEN => Self::from_base58(input),
            BASE32_LEN => Self::from_base32(input),
            other => Err(MalformedUuid::UnrecognisedLength(other)),
        }
    }

    /// Wraps a raw 128-bit value.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Returns the value as a raw 128-bit integer.
    pub const fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }

    /// Returns the inner [`Uuid`].
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// True when all 128 bits are zero.
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the RFC 4122 variant field of the value.
    pub fn variant(&self) -> Variant {
        self.0.get_variant()
    }

    /// Renders the canonical form: 36 characters, lowercase, hyphenated
    /// 8-4-4-4-12.
    pub fn to_canonical(&self) -> String {
        self.0.hyphenated().to_string()
    }

    /// Renders the simple form: 32 characters of lowercase hex, no hyphens.
    pub fn to_simple(&self) -> String {
        self.0.simple().to_string()
    }

    /// Renders the fixed-width Base58 form: always 22 characters over the
    /// Bitcoin alphabet, left-padded with `1` so leading zero bits survive
    /// a round-trip.
    pub fn to_base58(&self) -> String {
        let digits = bs58::encode(self.0.as_bytes()).into_string();
        format!("{digits:1>BASE58_LEN$}")
    }

    /// Renders the fixed-width Base32 form: always 26 characters of
    /// uppercase Crockford Base32 (the ULID text format, 130 bits with the
    /// top two pinned to zero).
    pub fn to_base32(&self) -> String {
        Ulid(self.0.as_u128()).to_string()
    }

    fn from_base58(input: &str) -> Result<Self, MalformedUuid> {
        let digits = bs58::decode(input).into_vec()?;
        // Each leading `1` decodes to a zero byte, so a padded 22-digit
        // input can yield more than 16 bytes; the surplus must all be zero
        // for the number to fit in 128 bits.
        let mut bytes = [0u8; 16];
        if digits.len() > 16 {
            let surplus = digits.len() - 16;
            if digits[..surplus].iter().any(|&b| b != 0) {
                return Err(MalformedUuid::Base58Overflow);
            }
            bytes.copy_from_slice(&digits[surplus..]);
        } else {
            bytes[16 - digits.len()..].copy_from_slice(&digits);
        }
        Ok(Self(Uuid::from_bytes(bytes)))
    }

    fn from_base32(input: &str) -> Result<Self, MalformedUuid> {
        let ulid = Ulid::from_string(&input.to_ascii_uppercase())?;
        // 26 Crockford digits carry 130 bits; a first digit above 7 sets
        // one of the top two and overflows 128.
        if !matches!(input.as_bytes()[0], b'0'..=b'7') {
            return Err(MalformedUuid::Base32Overflow);
        }
        Ok(Self(Uuid::from_u128(ulid.0)))
    }
}

impl fmt::Display for UuidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UuidValue {
    type Err = MalformedUuid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidValue::parse(s)
    }
}

impl From<Uuid> for UuidValue {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UuidValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_canonical())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UuidValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UuidValue::parse(&s).map_err(serde::de::Error::custom)
    }
}
