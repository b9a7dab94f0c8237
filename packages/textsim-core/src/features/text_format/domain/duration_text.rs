//! Elapsed-time rendering ("1 jour, 2 heures, 30 secondes")
//!
//! Only non-zero components among days/hours/minutes/seconds are rendered,
//! largest first, joined by ", ". A magnitude above 1 takes the plural form
//! (singular + "s"). Sub-second remainders are dropped.
//!
//! Negative spans (`end < start`) are rejected with [`TextError::NegativeSpan`].

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TextError};

const MILLIS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Language of the unit words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// jour / heure / minute / seconde
    French,
    /// day / hour / minute / second
    English,
}

impl Locale {
    pub fn labels(&self) -> UnitLabels {
        match self {
            Self::French => UnitLabels::FRENCH,
            Self::English => UnitLabels::ENGLISH,
        }
    }

    /// Parse locale from string
    pub fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "french" | "fr" => Ok(Self::French),
            "english" | "en" => Ok(Self::English),
            _ => Err(format!("Unknown locale '{}'. Valid locales: french, english", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::French => "french",
            Self::English => "english",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::French
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Singular unit words; the plural appends "s"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub day: &'static str,
    pub hour: &'static str,
    pub minute: &'static str,
    pub second: &'static str,
}

impl UnitLabels {
    pub const FRENCH: Self = Self {
        day: "jour",
        hour: "heure",
        minute: "minute",
        second: "seconde",
    };

    pub const ENGLISH: Self = Self {
        day: "day",
        hour: "hour",
        minute: "minute",
        second: "second",
    };
}

/// Non-negative span split into calendar-free units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Split a span; fails if it is negative
    ///
    /// The error reports whole seconds rounded toward negative infinity, so a
    /// sub-second negative span reads as -1s.
    pub fn from_span(span: Duration) -> Result<Self> {
        if span < Duration::zero() {
            let seconds = span.num_milliseconds().div_euclid(MILLIS_PER_SECOND);
            return Err(TextError::NegativeSpan { seconds });
        }

        let total = span.num_seconds();

        Ok(Self {
            days: (total / SECONDS_PER_DAY) as u64,
            hours: (total % SECONDS_PER_DAY / SECONDS_PER_HOUR) as u64,
            minutes: (total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u64,
            seconds: (total % SECONDS_PER_MINUTE) as u64,
        })
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn render(&self, labels: &UnitLabels) -> String {
        let components = [
            (self.days, labels.day),
            (self.hours, labels.hour),
            (self.minutes, labels.minute),
            (self.seconds, labels.second),
        ];

        components
            .iter()
            .filter(|(magnitude, _)| *magnitude > 0)
            .map(|(magnitude, unit)| {
                let plural = if *magnitude > 1 { "s" } else { "" };
                format!("{} {}{}", magnitude, unit, plural)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render `end - start` with French unit words
pub fn duration_text<Tz>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
{
    duration_text_with(start, end, Locale::default())
}

/// Render `end - start` with the unit words of `locale`
pub fn duration_text_with<Tz>(start: &DateTime<Tz>, end: &DateTime<Tz>, locale: Locale) -> Result<String>
where
    Tz: TimeZone,
{
    let span = end.clone().signed_duration_since(start.clone());
    let parts = DurationParts::from_span(span)?;
    Ok(parts.render(&locale.labels()))
}
