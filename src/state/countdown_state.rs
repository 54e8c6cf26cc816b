//! Countdown state structure and remaining-time decomposition

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Text shown once the target has passed
pub const EXPIRED_TEXT: &str = "Results are out!";

/// Remaining time until the target, or the terminal expired state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownState {
    Pending {
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
    },
    Expired,
}

impl CountdownState {
    /// Decompose a millisecond difference into days/hours/minutes/seconds
    pub fn from_millis(difference: i64) -> Self {
        if difference <= 0 {
            return CountdownState::Expired;
        }

        let total = difference / 1000;
        CountdownState::Pending {
            days: (total / SECS_PER_DAY) as u64,
            hours: (total % SECS_PER_DAY / SECS_PER_HOUR) as u64,
            minutes: (total % SECS_PER_HOUR / SECS_PER_MINUTE) as u64,
            seconds: (total % SECS_PER_MINUTE) as u64,
        }
    }

    /// Remaining time between `now` and `target`
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }

    /// Whole seconds left, zero once expired
    pub fn total_seconds(&self) -> u64 {
        match *self {
            CountdownState::Pending { days, hours, minutes, seconds } => {
                days * SECS_PER_DAY as u64
                    + hours * SECS_PER_HOUR as u64
                    + minutes * SECS_PER_MINUTE as u64
                    + seconds
            }
            CountdownState::Expired => 0,
        }
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownState::Pending { days, hours, minutes, seconds } => {
                write!(f, "{}d {}h {}m {}s", days, hours, minutes, seconds)
            }
            CountdownState::Expired => f.write_str(EXPIRED_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn non_positive_difference_is_expired() {
        assert_eq!(CountdownState::from_millis(0), CountdownState::Expired);
        assert_eq!(CountdownState::from_millis(-1), CountdownState::Expired);
        assert_eq!(CountdownState::from_millis(i64::MIN), CountdownState::Expired);
    }

    #[test]
    fn sub_second_difference_is_still_pending() {
        let state = CountdownState::from_millis(999);
        assert_eq!(
            state,
            CountdownState::Pending { days: 0, hours: 0, minutes: 0, seconds: 0 }
        );
        assert_eq!(state.to_string(), "0d 0h 0m 0s");
    }

    #[test]
    fn display_matches_countdown_text() {
        let ms = ((2 * 86_400 + 3 * 3_600 + 4 * 60 + 5) * 1000) + 750;
        let state = CountdownState::from_millis(ms);
        assert_eq!(state.to_string(), "2d 3h 4m 5s");
        assert_eq!(CountdownState::Expired.to_string(), "Results are out!");
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(CountdownState::from_millis(61_000)).expect("json");
        assert_eq!(json["state"], "pending");
        assert_eq!(json["minutes"], 1);
        assert_eq!(json["seconds"], 1);
        let json = serde_json::to_value(CountdownState::Expired).expect("json");
        assert_eq!(json["state"], "expired");
    }

    proptest! {
        #[test]
        fn decomposition_sums_to_whole_seconds(difference in 1i64..=10_000_000_000_000) {
            let state = CountdownState::from_millis(difference);
            match state {
                CountdownState::Pending { hours, minutes, seconds, .. } => {
                    prop_assert!(hours <= 23);
                    prop_assert!(minutes <= 59);
                    prop_assert!(seconds <= 59);
                    prop_assert_eq!(state.total_seconds(), (difference / 1000) as u64);
                }
                CountdownState::Expired => prop_assert!(false, "positive difference expired"),
            }
        }

        #[test]
        fn non_positive_always_expires(difference in i64::MIN..=0) {
            prop_assert_eq!(CountdownState::from_millis(difference), CountdownState::Expired);
        }
    }
}
