//! Embedded timestamp extraction for time-ordered UUIDs.
//!
//! Versions 1 and 6 both carry the same 60-bit quantity: a count of 100 ns
//! ticks since the Gregorian calendar reform (1582-10-15 00:00:00 UTC).
//! Version 1 scatters it across three fields with the least significant
//! bits first; version 6 stores it as one contiguous big-endian block so
//! the text form sorts by time. Either layout of the same instant must
//! reassemble to the identical tick count.

use std::fmt;

use chrono::{DateTime, Utc};
use uid_codec::UuidValue;

use crate::Version;

/// Ticks between the Gregorian reform epoch (1582-10-15) and the Unix
/// epoch (1970-01-01).
const GREGORIAN_TO_UNIX_TICKS: i64 = 122_192_928_000_000_000;

/// 100 ns ticks per second.
const TICKS_PER_SECOND: i64 = 10_000_000;

/// A timestamp was requested from a UUID version that does not carry one.
///
/// This is a contract violation by the caller, not a data-quality problem,
/// and is deliberately a separate type from [`MalformedUuid`] so the two
/// cannot be confused.
///
/// [`MalformedUuid`]: uid_codec::MalformedUuid
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("version {version} UUIDs do not embed a timestamp")]
pub struct NoEmbeddedTimestamp {
    /// Classification of the value the timestamp was requested from.
    pub version: Version,
}

/// The decoded 60-bit timestamp of a version 1 or version 6 UUID.
///
/// Holds both the raw tick count and its calendar conversion. `Display`
/// renders `YYYY-MM-DD HH:MM:SS.ffffff` in UTC with microsecond precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmbeddedTimestamp {
    ticks: u64,
    datetime: DateTime<Utc>,
}

impl EmbeddedTimestamp {
    /// Decodes the embedded timestamp of a version 1 or version 6 value.
    ///
    /// # Errors
    ///
    /// Returns [`NoEmbeddedTimestamp`] for every other classification.
    pub fn of(value: &UuidValue) -> Result<Self, NoEmbeddedTimestamp> {
        let bits = value.as_u128();
        let ticks = match Version::of(value) {
            Version::Number(1) => {
                let time_low = (bits >> 96) as u64 & 0xffff_ffff;
                let time_mid = (bits >> 80) as u64 & 0xffff;
                let time_high = (bits >> 64) as u64 & 0x0fff;
                time_high << 48 | time_mid << 32 | time_low
            }
            Version::Number(6) => {
                let time_high = (bits >> 96) as u64 & 0xffff_ffff;
                let time_mid = (bits >> 80) as u64 & 0xffff;
                let time_low = (bits >> 64) as u64 & 0x0fff;
                time_high << 28 | time_mid << 12 | time_low
            }
            version => return Err(NoEmbeddedTimestamp { version }),
        };
        Ok(Self {
            ticks,
            datetime: gregorian_ticks_to_utc(ticks),
        })
    }

    /// The raw count of 100 ns ticks since 1582-10-15 00:00:00 UTC.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The tick count converted to a calendar date/time.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }
}

impl fmt::Display for EmbeddedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%d %H:%M:%S%.6f"))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmbeddedTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Converts a Gregorian tick count to UTC, keeping instants before 1970
/// exact by splitting the signed tick offset with euclidean division.
fn gregorian_ticks_to_utc(ticks: u64) -> DateTime<Utc> {
    let unix_ticks = ticks as i64 - GREGORIAN_TO_UNIX_TICKS;
    let secs = unix_ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = unix_ticks.rem_euclid(TICKS_PER_SECOND) as u32 * 100;
    // A 60-bit tick count tops out in the year 5236, far inside chrono's
    // representable range.
    DateTime::from_timestamp(secs, nanos)
        .expect("60-bit tick counts stay inside chrono's datetime range")
}
