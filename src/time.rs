//! Defines the [`Timestamp`] type, a date-time with a fixed UTC offset that is
//! written as RFC-822 with a numeric zone (e.g., `28 May 12 02:00 -0300`).

use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `chrono` pattern for RFC-822 with a numeric zone.
pub const FORMAT: &str = "%d %b %y %H:%M %z";

/// A date-time with a fixed offset. The offset is kept exactly as it was
/// written; it is never normalized to UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Wraps a [`DateTime`] as a [`Timestamp`].
    pub fn new(dt: DateTime<FixedOffset>) -> Timestamp {
        Timestamp(dt)
    }

    /// Formats the timestamp as `DD Mon YY HH:MM ±ZZZZ`.
    pub fn encode(&self) -> String {
        self.0.format(FORMAT).to_string()
    }

    /// Parses text of the form `DD Mon YY HH:MM ±ZZZZ`. Every field must have
    /// its full width and fields are separated by exactly one space; only the
    /// case of the month name is free.
    pub fn decode(text: &str) -> Result<Timestamp, ParseError> {
        let ts = DateTime::parse_from_str(text, FORMAT)
            .map(Timestamp)
            .map_err(|err| ParseError {
                text: text.to_owned(),
                err: Some(err),
            })?;

        // chrono is lenient about whitespace and field widths, so anything
        // that doesn't print back the same way isn't in the pattern.
        if !ts.encode().eq_ignore_ascii_case(text) {
            return Err(ParseError {
                text: text.to_owned(),
                err: None,
            });
        }
        Ok(ts)
    }

    /// Returns true if `self` is strictly earlier than `other`. Offsets are
    /// ignored; only the instants are compared.
    pub fn before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Timestamp {
        Timestamp(dt)
    }
}

impl PartialEq for Timestamp {
    /// Two timestamps are equal when they name the same instant at the same
    /// offset.
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.offset() == other.0.offset()
    }
}
impl Eq for Timestamp {}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::decode(s)
    }
}

impl Serialize for Timestamp {
    /// Serializes the timestamp as a string in the [`FORMAT`] pattern.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    /// Deserializes a string in the [`FORMAT`] pattern.
    fn deserialize<D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse::<Timestamp>()
            .map_err(D::Error::custom)
    }
}

/// Returned when text does not match the `DD Mon YY HH:MM ±ZZZZ` pattern.
#[derive(Debug)]
pub struct ParseError {
    text: String,

    /// The underlying `chrono` error. `None` when `chrono` accepted the text
    /// but it isn't laid out exactly as the pattern requires.
    err: Option<chrono::ParseError>,
}

impl fmt::Display for ParseError {
    /// Displays a [`ParseError`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.err {
            Some(err) => write!(f, "parsing time {:?}: {}", self.text, err),
            None => write!(
                f,
                "parsing time {:?}: not in the form `DD Mon YY HH:MM ±ZZZZ`",
                self.text
            ),
        }
    }
}

impl std::error::Error for ParseError {
    /// Implements the [`std::error::Error`] trait for [`ParseError`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.err {
            Some(err) => Some(err),
            None => None,
        }
    }
}
