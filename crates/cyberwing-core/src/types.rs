use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Newtype Wrappers - Temporal
// =============================================================================

/// Unix timestamp in seconds since epoch.
///
/// Compared by value. Two Timestamps with the same inner value are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// `None` when the value lies outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Add a number of seconds, returning `None` on overflow or when the
    /// result is not a representable date.
    pub fn checked_add_secs(&self, secs: i64) -> Option<Self> {
        let secs = self.0.checked_add(secs)?;
        DateTime::from_timestamp(secs, 0).map(|_| Self(secs))
    }

    /// Render in the local timezone as `YYYY-MM-DD HH:MM`.
    ///
    /// Out-of-range values render as raw epoch seconds (`@<secs>`).
    pub fn format_local(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            None => format!("@{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_now_is_recent() {
        let ts = Timestamp::now();
        let now = Utc::now().timestamp();
        assert!((ts.0 - now).abs() < 2);
    }

    #[test]
    fn test_timestamp_datetime_round_trip() {
        let now = Utc::now();
        let ts = Timestamp::from_datetime(now);
        assert_eq!(ts.to_datetime().unwrap().timestamp(), now.timestamp());
    }

    #[test]
    fn test_to_datetime_out_of_range() {
        assert!(Timestamp(i64::MAX).to_datetime().is_none());
        assert_eq!(Timestamp(i64::MAX).format_local(), format!("@{}", i64::MAX));
    }

    #[test]
    fn test_checked_add_secs() {
        let ts = Timestamp(1_000);
        assert_eq!(ts.checked_add_secs(86_400), Some(Timestamp(87_400)));
        assert_eq!(Timestamp(i64::MAX).checked_add_secs(1), None);
    }

    #[test]
    fn test_checked_add_secs_past_representable_date() {
        // No i64 overflow, but far beyond chrono's maximum year.
        let ts = Timestamp(1_700_000_000);
        assert_eq!(ts.checked_add_secs(100_000_000 * 86_400), None);
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp(1) < Timestamp(2));
    }

    #[test]
    fn test_format_local_shape() {
        let formatted = Timestamp(1_700_000_000).format_local();
        // YYYY-MM-DD HH:MM
        assert_eq!(formatted.len(), 16);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_serde_transparent_shape() {
        let ts = Timestamp(42);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "42");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
