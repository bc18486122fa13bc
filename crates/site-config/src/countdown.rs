//! Countdown to the launch instant

use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time remaining until launch, split the way the gating page displays it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    /// Launch instant has been reached
    pub launched: bool,
    pub remaining_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Countdown from `now_ms` to `launch_ms` (both epoch milliseconds)
    ///
    /// Once the launch instant has passed every component is zero.
    pub fn between(now_ms: i64, launch_ms: i64) -> Self {
        let remaining = launch_ms.saturating_sub(now_ms);
        if remaining <= 0 {
            return Self::launched();
        }

        Self {
            launched: false,
            remaining_ms: remaining,
            days: remaining / MS_PER_DAY,
            hours: (remaining % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (remaining % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (remaining % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Countdown after launch
    pub fn launched() -> Self {
        Self {
            launched: true,
            remaining_ms: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_launch_is_zeroed() {
        let countdown = Countdown::between(10_000, 5_000);
        assert_eq!(countdown, Countdown::launched());

        let exact = Countdown::between(5_000, 5_000);
        assert!(exact.launched);
    }

    #[test]
    fn test_components() {
        // 2 days, 3 hours, 4 minutes, 5 seconds and 999ms
        let remaining = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999;
        let countdown = Countdown::between(0, remaining);
        assert!(!countdown.launched);
        assert_eq!(countdown.remaining_ms, remaining);
        assert_eq!(
            (countdown.days, countdown.hours, countdown.minutes, countdown.seconds),
            (2, 3, 4, 5)
        );
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let countdown = Countdown::between(i64::MIN, i64::MAX);
        assert!(!countdown.launched);
        assert_eq!(countdown.remaining_ms, i64::MAX);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_value(Countdown::between(0, MS_PER_MINUTE)).unwrap();
        assert_eq!(json["remainingMs"], 60_000);
        assert_eq!(json["minutes"], 1);
    }
}
