//! Ecwid timestamp format.
//!
//! Ecwid renders dates as `2014-09-05 19:25:49 +0000`, which is not RFC 3339,
//! so chrono's default serde support cannot be used directly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `strftime` pattern Ecwid uses for dates.
pub const ECWID_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A timestamp in Ecwid's `YYYY-MM-DD hh:mm:ss +zzzz` format.
///
/// # Example
///
/// ```rust
/// use ecwid_api::rest::resources::v3::common::EcwidDateTime;
///
/// let created: EcwidDateTime = "2014-09-05 19:25:49 +0400".parse().unwrap();
/// assert_eq!(created.to_string(), "2014-09-05 19:25:49 +0400");
/// assert_eq!(created.as_datetime().timestamp(), 1_409_930_749);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EcwidDateTime(DateTime<FixedOffset>);

impl EcwidDateTime {
    /// Wraps a chrono timestamp.
    #[must_use]
    pub const fn new(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }

    /// Returns the underlying chrono timestamp.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Consumes the wrapper, returning the chrono timestamp.
    #[must_use]
    pub const fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for EcwidDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl FromStr for EcwidDateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_str(s, ECWID_DATETIME_FORMAT).map(Self)
    }
}

impl fmt::Display for EcwidDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ECWID_DATETIME_FORMAT))
    }
}

impl Serialize for EcwidDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EcwidDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_ecwid_format() {
        let value: EcwidDateTime = "2014-09-05 19:25:49 +0000".parse().unwrap();
        assert_eq!(value.as_datetime().timestamp(), 1_409_945_149);
        assert_eq!(value.as_datetime().offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_rejects_rfc3339() {
        assert!("2014-09-05T19:25:49Z".parse::<EcwidDateTime>().is_err());
    }

    #[test]
    fn test_serde_uses_ecwid_format() {
        let value: EcwidDateTime =
            serde_json::from_str("\"2021-03-01 08:00:00 -0500\"").unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            "\"2021-03-01 08:00:00 -0500\""
        );
    }
}
