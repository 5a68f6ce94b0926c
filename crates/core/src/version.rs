//! Version classification of UUID values.

use std::fmt;

use uid_codec::UuidValue;

/// The version classification of a UUID value.
///
/// Derived from the 4-bit version field (bits 48-51 of the RFC 4122
/// layout), never stored: recompute it with [`Version::of`] whenever it is
/// needed. The two synthetic classifications replace the sentinel integers
/// the version field cannot express on its own:
///
/// - [`Version::Nil`] — all 128 bits are zero. Nil takes precedence over
///   the version field, which also reads 0 for the nil value.
/// - [`Version::Unknown`] — the field holds 0, 2, or 9-15, none of which
///   names a defined generation scheme.
/// - [`Version::Number`] — a defined numeric version: 1, 3, 4, 5, 6, 7
///   or 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Version {
    /// All 128 bits are zero.
    Nil,
    /// The version field carries no defined meaning.
    Unknown,
    /// A defined numeric version (1-8, excluding 2).
    Number(u8),
}

impl Version {
    /// Classifies a UUID value.
    pub fn of(value: &UuidValue) -> Self {
        if value.is_nil() {
            return Self::Nil;
        }
        match value.uuid().get_version_num() {
            v @ (1 | 3..=8) => Self::Number(v as u8),
            _ => Self::Unknown,
        }
    }

    /// True for the time-ordered versions that embed a Gregorian tick
    /// count (1 and 6).
    pub fn has_timestamp(&self) -> bool {
        matches!(self, Self::Number(1) | Self::Number(6))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Unknown => f.write_str("unknown"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Nil => serializer.serialize_str("nil"),
            Self::Unknown => serializer.serialize_str("unknown"),
            Self::Number(n) => serializer.serialize_u8(*n),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Clone, Copy)]
        struct LabelVisitor;

        impl serde::de::Visitor<'_> for LabelVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"nil\", \"unknown\", or a version number 1-8")
            }

            fn visit_str<E>(self, label: &str) -> Result<Version, E>
            where
                E: serde::de::Error,
            {
                match label {
                    "nil" => Ok(Version::Nil),
                    "unknown" => Ok(Version::Unknown),
                    other => Err(E::invalid_value(
                        serde::de::Unexpected::Str(other),
                        &self,
                    )),
                }
            }

            fn visit_u64<E>(self, number: u64) -> Result<Version, E>
            where
                E: serde::de::Error,
            {
                match number {
                    1 | 3..=8 => Ok(Version::Number(number as u8)),
                    other => Err(E::invalid_value(
                        serde::de::Unexpected::Unsigned(other),
                        &self,
                    )),
                }
            }

            fn visit_i64<E>(self, number: i64) -> Result<Version, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(number)
                    .map_err(|_| {
                        E::invalid_value(serde::de::Unexpected::Signed(number), &self)
                    })
                    .and_then(|n| self.visit_u64(n))
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}
