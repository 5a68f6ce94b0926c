//! # UUID inspection core
//!
//! Classification and embedded-timestamp extraction for parsed UUID values,
//! plus the one-shot [`inspect`] entry point that presentation layers call
//! with raw text.
//!
//! The pipeline is two stages with no state in between:
//!
//! 1. [`UuidValue::parse`] normalises any supported textual form to the
//!    canonical 128-bit value (see the `uid-codec` crate).
//! 2. [`Version::of`] classifies the value, and for the time-ordered
//!    versions (1 and 6) [`EmbeddedTimestamp::of`] decodes the 60-bit
//!    Gregorian tick count into a calendar date/time.
//!
//! Every operation is a pure function over immutable values: nothing here
//! logs, retries, blocks, or shares state, so concurrent callers cannot
//! interfere with each other.
//!
//! ## Example
//!
//! ```
//! use uid_core::{inspect, Version};
//!
//! let report = inspect("a7613e0a-5986-11eb-a861-2bf05af69e52")?;
//! assert_eq!(report.version, Version::Number(1));
//! assert_eq!(report.base58, "MfnmaUvvQ1h8B14vTwt6dX");
//! assert_eq!(
//!     report.timestamp.map(|t| t.to_string()),
//!     Some("2021-01-18 12:14:03.358977".to_owned()),
//! );
//! # Ok::<(), uid_core::MalformedUuid>(())
//! ```

mod inspect;
mod timestamp;
mod version;

pub use inspect::{inspect, Inspection};
pub use timestamp::{EmbeddedTimestamp, NoEmbeddedTimestamp};
pub use version::Version;

// Re-export the codec surface so callers need a single dependency.
pub use uid_codec::{MalformedUuid, Uuid, UuidValue, Variant};
