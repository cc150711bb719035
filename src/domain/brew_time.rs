//! Brew duration stored as a minutes/seconds clock value.
//!
//! The picker works on a time-of-day value whose hour is pinned to zero; only
//! the minute and second fields carry meaning. The persisted form is always the
//! fixed `MM:SS` text. Because the value is a [`NaiveTime`], a minute of 60 or
//! more cannot be represented and `MM:SS` text with such a minute is rejected
//! rather than rolled over into an hour.

use crate::domain::error::{BrewlogError, Result};
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Largest minute or second value the picker offers.
pub const MAX_FIELD: u32 = 59;

/// A brew duration between `00:00` and `59:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrewTime(NaiveTime);

impl BrewTime {
    /// Builds a brew time from minute and second fields.
    ///
    /// Returns `None` when either field is above 59.
    #[must_use]
    pub fn from_min_sec(minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(0, minute, second).map(Self)
    }

    /// Minute component (0-59).
    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Second component (0-59).
    #[must_use]
    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Returns a copy with the minute replaced, clamped to 59.
    #[must_use]
    pub fn with_minute(self, minute: u32) -> Self {
        self.0
            .with_minute(minute.min(MAX_FIELD))
            .map_or(self, Self)
    }

    /// Returns a copy with the second replaced, clamped to 59.
    #[must_use]
    pub fn with_second(self, second: u32) -> Self {
        self.0
            .with_second(second.min(MAX_FIELD))
            .map_or(self, Self)
    }

    /// Renders the fixed `MM:SS` form.
    #[must_use]
    pub fn to_mm_ss(self) -> String {
        format!("{:02}:{:02}", self.minute(), self.second())
    }
}

impl Default for BrewTime {
    fn default() -> Self {
        Self(NaiveTime::MIN)
    }
}

impl fmt::Display for BrewTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minute(), self.second())
    }
}

impl FromStr for BrewTime {
    type Err = BrewlogError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BrewlogError::InvalidBrewTime(s.to_string());

        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes.len() != 2 || seconds.len() != 2 {
            return Err(invalid());
        }
        let minute: u32 = minutes.parse().map_err(|_| invalid())?;
        let second: u32 = seconds.parse().map_err(|_| invalid())?;

        Self::from_min_sec(minute, second).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn default_is_zero() {
        assert_eq!(BrewTime::default().to_mm_ss(), "00:00");
    }

    #[rstest]
    #[case(2, 30, "02:30")]
    #[case(0, 0, "00:00")]
    #[case(59, 59, "59:59")]
    #[case(10, 5, "10:05")]
    fn formats_zero_padded(#[case] minute: u32, #[case] second: u32, #[case] expected: &str) {
        let time = BrewTime::from_min_sec(minute, second).unwrap();
        assert_eq!(time.to_mm_ss(), expected);
        assert_eq!(time.to_string(), expected);
    }

    #[rstest]
    #[case("60:00")]
    #[case("75:10")]
    #[case("00:60")]
    #[case("2:30")]
    #[case("02-30")]
    #[case("ab:cd")]
    #[case("")]
    fn rejects_out_of_range_or_malformed(#[case] input: &str) {
        assert!(matches!(
            input.parse::<BrewTime>(),
            Err(BrewlogError::InvalidBrewTime(_))
        ));
    }

    #[test]
    fn setters_clamp_to_field_range() {
        let time = BrewTime::default().with_minute(75).with_second(99);
        assert_eq!(time.to_mm_ss(), "59:59");
    }

    proptest! {
        #[test]
        fn format_is_pad2_minute_colon_pad2_second(m in 0u32..=59, s in 0u32..=59) {
            let time = BrewTime::from_min_sec(m, s).unwrap();
            prop_assert_eq!(time.to_mm_ss(), format!("{m:02}:{s:02}"));
            prop_assert_eq!(time.to_mm_ss().parse::<BrewTime>().unwrap(), time);
        }
    }
}
