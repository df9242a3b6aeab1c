use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Minutes since midnight.
pub type Minutes = u32;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Weekday {
    #[strum(
        serialize = "mon",
        serialize = "monday",
        serialize = "mon.",
        to_string = "MON"
    )]
    Mon,
    #[strum(
        serialize = "tue",
        serialize = "tuesday",
        serialize = "tue.",
        to_string = "TUE"
    )]
    Tue,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "wed.",
        to_string = "WED"
    )]
    Wed,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "thu.",
        to_string = "THU"
    )]
    Thu,
    #[strum(
        serialize = "fri",
        serialize = "friday",
        serialize = "fri.",
        to_string = "FRI"
    )]
    Fri,
}

/// How a weekday takes part in recurring attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRole {
    Standard,
    Block,
}

impl Weekday {
    /// Every recurring item needs one slot on each of these, in this order.
    pub const STANDARD: [Weekday; 3] = [Weekday::Mon, Weekday::Tue, Weekday::Fri];
    /// Exactly one of these, first free one wins.
    pub const BLOCK: [Weekday; 2] = [Weekday::Wed, Weekday::Thu];

    pub fn role(self) -> DayRole {
        match self {
            Weekday::Wed | Weekday::Thu => DayRole::Block,
            _ => DayRole::Standard,
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<Weekday>()
            ))
        })
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Weekday, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        Weekday::try_from(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Time parsing
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum TimeFormat {
    #[strum(serialize = "%H:%M")]
    Clock24,
    #[strum(serialize = "%-I:%M %p")]
    HmSpacedMeridian,
    #[strum(serialize = "%-I:%M%p")]
    HmMeridian,
}

impl TimeFormat {
    fn has_meridian(token: &str) -> bool {
        token.ends_with("AM") || token.ends_with("PM")
    }

    /// chrono needs a minute field, so `2PM` becomes `2:00PM`.
    fn ensure_minutes(token: &str) -> String {
        let mut token = token.to_string();
        if !token.contains(':') {
            if Self::has_meridian(&token) {
                let idx = token.len() - 2;
                let head = token[..idx].trim_end().to_string();
                let meridian = token[idx..].to_string();
                token = format!("{head}:00{meridian}");
            } else {
                token.push_str(":00");
            }
        }
        token
    }
}

/// Parse a wall-clock time into minutes since midnight.
///
/// Accepts `13:05`, `9:30`, `7:40 AM`, `1:01PM` and `2PM`; the meridian is
/// case-insensitive.
pub fn parse_minutes(text: &str) -> Result<Minutes> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_format(trimmed));
    }
    let token = TimeFormat::ensure_minutes(&trimmed.to_ascii_uppercase());
    for f in TimeFormat::iter() {
        if let Ok(t) = NaiveTime::parse_from_str(&token, f.as_ref()) {
            return Ok(t.hour() * 60 + t.minute());
        }
    }
    Err(Error::invalid_format(trimmed))
}

fn format_minutes(m: Minutes) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// A time range on one day, `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct Interval {
    pub start: Minutes,
    pub end: Minutes,
}

impl Interval {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_minutes(start)?,
            end: parse_minutes(end)?,
        })
    }

    /// Strict overlap: intervals that only touch at a boundary do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration(&self) -> Minutes {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}

/// Wire shape of an interval in config and JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawInterval {
    start: String,
    end: String,
}

impl TryFrom<RawInterval> for Interval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::parse(&raw.start, &raw.end)
    }
}

impl From<Interval> for RawInterval {
    fn from(iv: Interval) -> Self {
        RawInterval {
            start: format_minutes(iv.start),
            end: format_minutes(iv.end),
        }
    }
}

// ---------------------------------------------------------------------------
// Attendance kinds
// ---------------------------------------------------------------------------

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceKind {
    /// Fixed weekly periods looked up in the grid template.
    #[strum(serialize = "recurring", to_string = "recurring")]
    Recurring,
    /// Self-timed alternative sections; one is adopted whole.
    #[strum(serialize = "sectioned", to_string = "sectioned")]
    Sectioned,
}

// ---------------------------------------------------------------------------
// Bool (config text form)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
