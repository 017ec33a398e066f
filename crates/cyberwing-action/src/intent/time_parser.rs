//! Natural language time expression parsing.
//!
//! Extracts "remind me in <number> <unit>" requests from a reply and turns
//! them into absolute `Timestamp` deadlines.

use std::fmt;
use std::sync::LazyLock;

use cyberwing_core::Timestamp;
use regex::Regex;

use crate::error::TimeParseError;

static REMIND_IN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bremind\s+me\s+in\s+(\d+)\s*(minutes?|hours?|days?|weeks?)\b")
        .expect("Invalid reminder regex")
});

/// Unit of a relative reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderUnit {
    Minute,
    Hour,
    Day,
    Week,
}

impl ReminderUnit {
    /// Length of one unit in seconds. A week is seven days.
    pub fn seconds(self) -> i64 {
        match self {
            ReminderUnit::Minute => 60,
            ReminderUnit::Hour => 3_600,
            ReminderUnit::Day => 86_400,
            ReminderUnit::Week => 7 * 86_400,
        }
    }

    fn parse(word: &str) -> Result<Self, TimeParseError> {
        match word.to_lowercase().trim_end_matches('s') {
            "minute" => Ok(ReminderUnit::Minute),
            "hour" => Ok(ReminderUnit::Hour),
            "day" => Ok(ReminderUnit::Day),
            "week" => Ok(ReminderUnit::Week),
            _ => Err(TimeParseError::UnknownUnit(word.to_string())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ReminderUnit::Minute => "minute",
            ReminderUnit::Hour => "hour",
            ReminderUnit::Day => "day",
            ReminderUnit::Week => "week",
        }
    }
}

/// A parsed relative reminder such as "3 days".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderRequest {
    pub amount: u32,
    pub unit: ReminderUnit,
}

impl ReminderRequest {
    /// Total length of the request in seconds.
    pub fn total_seconds(&self) -> Option<i64> {
        i64::from(self.amount).checked_mul(self.unit.seconds())
    }

    /// Absolute deadline `now + amount * unit`, or `None` on overflow or
    /// when the deadline is past the last representable date.
    pub fn deadline_from(&self, now: Timestamp) -> Option<Timestamp> {
        now.checked_add_secs(self.total_seconds()?)
    }
}

impl fmt::Display for ReminderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.amount == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.amount, self.unit.name(), plural)
    }
}

/// Parse a "remind me in <number> <unit>" phrase anywhere in `input`.
///
/// The amount must be written in digits; "remind me in five days" is
/// rejected with [`TimeParseError::NoMatch`].
pub fn parse_reminder_request(input: &str) -> Result<ReminderRequest, TimeParseError> {
    let caps = REMIND_IN_RE
        .captures(input)
        .ok_or(TimeParseError::NoMatch)?;

    let amount_str = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let amount = amount_str
        .parse::<u32>()
        .map_err(|_| TimeParseError::InvalidAmount(amount_str.to_string()))?;

    let unit_str = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let unit = ReminderUnit::parse(unit_str)?;

    Ok(ReminderRequest { amount, unit })
}
