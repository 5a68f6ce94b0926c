//! One-shot inspection of a textual UUID.

use uid_codec::{MalformedUuid, UuidValue};

use crate::{EmbeddedTimestamp, Version};

/// Everything a presentation layer needs to describe one UUID.
///
/// `timestamp` is present exactly when the version is time-ordered (1 or
/// 6); with the `serde` feature the field is omitted from serialized output
/// when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inspection {
    /// Version classification, rendered as `nil`, `unknown`, or a number.
    pub version: Version,
    /// Canonical RFC 4122 form, 36 lowercase characters.
    pub canonical: String,
    /// Fixed-width Base58 form, 22 characters.
    pub base58: String,
    /// Fixed-width Base32 form, 26 characters.
    pub base32: String,
    /// Embedded timestamp, for version 1 and 6 values only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub timestamp: Option<EmbeddedTimestamp>,
}

/// Parses raw text in any supported encoding and reports everything known
/// about the value: classification, all textual forms, and the embedded
/// timestamp when the version carries one.
///
/// # Errors
///
/// Returns [`MalformedUuid`] when the text matches no supported encoding.
/// A failed parse produces no partial record.
pub fn inspect(input: &str) -> Result<Inspection, MalformedUuid> {
    let value = UuidValue::parse(input)?;
    let version = Version::of(&value);
    let timestamp = if version.has_timestamp() {
        // Cannot fail for version 1/6, which is exactly what
        // has_timestamp selects.
        EmbeddedTimestamp::of(&value).ok()
    } else {
        None
    };
    Ok(Inspection {
        version,
        canonical: value.to_canonical(),
        base58: value.to_base58(),
        base32: value.to_base32(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "a7613e0a-5986-11eb-a861-2bf05af69e52";
    const BASE58: &str = "MfnmaUvvQ1h8B14vTwt6dX";
    const BASE32: &str = "57C4Z0MPC627NTGR9BY1DFD7JJ";
    const NIL: &str = "00000000-0000-0000-0000-000000000000";

    #[test]
    fn test_inspect_time_based_uuid() {
        let report = inspect(CANONICAL).unwrap();
        assert_eq!(report.version, Version::Number(1));
        assert_eq!(report.canonical, CANONICAL);
        assert_eq!(report.base58, BASE58);
        assert_eq!(report.base32, BASE32);
        assert_eq!(
            report.timestamp.map(|t| t.to_string()),
            Some("2021-01-18 12:14:03.358977".to_owned())
        );
    }

    #[test]
    fn test_inspect_canonicalises_case() {
        let report = inspect(&CANONICAL.to_uppercase()).unwrap();
        assert_eq!(report.canonical, CANONICAL);
    }

    #[test]
    fn test_inspect_base58_input() {
        let report = inspect(BASE58).unwrap();
        assert_eq!(report.canonical.len(), 36);
        assert_eq!(report.canonical, CANONICAL);
    }

    #[test]
    fn test_inspect_agrees_across_forms() {
        let reference = inspect(CANONICAL).unwrap();
        assert_eq!(inspect(BASE58).unwrap(), reference);
        assert_eq!(inspect(BASE32).unwrap(), reference);
    }

    #[test]
    fn test_inspect_nil_uuid() {
        let report = inspect(NIL).unwrap();
        assert_eq!(report.version, Version::Nil);
        assert_eq!(report.canonical, NIL);
        assert!(report.timestamp.is_none());

        // Asking for the timestamp anyway is a contract violation, not a
        // parse failure.
        let value = UuidValue::parse(NIL).unwrap();
        assert!(EmbeddedTimestamp::of(&value).is_err());
    }

    #[test]
    fn test_inspect_random_uuid_has_no_timestamp() {
        let report = inspect("16fd2706-8baf-433b-82eb-8c7fada847da").unwrap();
        assert_eq!(report.version, Version::Number(4));
        assert!(report.timestamp.is_none());
    }

    #[test]
    fn test_inspect_rejects_garbage() {
        assert!(matches!(
            inspect("not-a-uuid"),
            Err(MalformedUuid::UnrecognisedLength(10))
        ));
    }

    #[test]
    fn test_concurrent_inspections_do_not_cross_talk() {
        let cases: &[(&str, &str)] = &[
            (CANONICAL, CANONICAL),
            (BASE58, CANONICAL),
            (BASE32, CANONICAL),
            (NIL, NIL),
            (
                "1eb5986a-7613-6e0a-a861-2bf05af69e52",
                "1eb5986a-7613-6e0a-a861-2bf05af69e52",
            ),
        ];
        std::thread::scope(|scope| {
            for &(input, expected) in cases {
                scope.spawn(move || {
                    for _ in 0..64 {
                        let report = inspect(input).unwrap();
                        assert_eq!(report.canonical, expected);
                    }
                });
            }
        });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_record_shape() {
        let report = inspect(CANONICAL).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": 1,
                "canonical": CANONICAL,
                "base58": BASE58,
                "base32": BASE32,
                "timestamp": "2021-01-18 12:14:03.358977",
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_record_omits_absent_timestamp() {
        let report = inspect(NIL).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["version"], "nil");
        assert!(json.get("timestamp").is_none());
    }
}
