use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK};

/// Normalized snapshot of a conversation's disappearing-messages timer.
///
/// Invariant: `enabled` is true exactly when `duration_seconds > 0`.
/// Fields are private and every construction path runs through
/// [`TimerToken::new`], so no live value can violate the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerToken {
    enabled: bool,
    duration_seconds: u32,
}

impl TimerToken {
    /// Build a token from a raw enable flag and duration, correcting
    /// contradictory pairs.
    ///
    /// A zero duration forces the token off; a disabled token carries a
    /// zero duration. Corrections are logged but never fail: the caller
    /// always receives a valid token.
    pub fn new(is_enabled: bool, duration_seconds: u32) -> Self {
        let enabled = is_enabled && duration_seconds > 0;
        let effective_duration = if enabled { duration_seconds } else { 0 };

        if is_enabled != enabled {
            tracing::warn!(
                supplied_enabled = is_enabled,
                effective_enabled = enabled,
                duration_seconds,
                "enable flag contradicts duration, corrected during normalization"
            );
        }
        if duration_seconds != effective_duration {
            tracing::warn!(
                supplied_duration_seconds = duration_seconds,
                effective_duration_seconds = effective_duration,
                "duration contradicts enable flag, corrected during normalization"
            );
        }

        Self {
            enabled,
            duration_seconds: effective_duration,
        }
    }

    /// Canonical disabled form: `{enabled: false, duration_seconds: 0}`.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            duration_seconds: 0,
        }
    }

    /// Convert the wire-level expiration-timer field (0 = no expiration).
    ///
    /// This is the single bridge between the protocol integer and the
    /// token representation.
    pub fn from_protocol_timer(expire_timer_seconds: u32) -> Self {
        if expire_timer_seconds > 0 {
            Self::new(true, expire_timer_seconds)
        } else {
            Self::disabled()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Expiration delay as a [`Duration`], `None` when the timer is off.
    pub fn duration(&self) -> Option<Duration> {
        self.enabled
            .then(|| Duration::from_secs(u64::from(self.duration_seconds)))
    }
}

impl Default for TimerToken {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Display for TimerToken {
    /// `"off"` when disabled, otherwise compact units largest-first
    /// ("1d", "1m 30s").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enabled {
            return f.write_str("off");
        }
        let mut rest = self.duration_seconds;
        let mut first = true;
        for (unit, label) in [
            (SECONDS_PER_WEEK, "w"),
            (SECONDS_PER_DAY, "d"),
            (SECONDS_PER_HOUR, "h"),
            (SECONDS_PER_MINUTE, "m"),
            (1, "s"),
        ] {
            let count = rest / unit;
            if count > 0 {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}{}", count, label)?;
                rest %= unit;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimerToken {
    enabled: bool,
    duration_seconds: u32,
}

impl<'de> Deserialize<'de> for TimerToken {
    /// Decoded pairs go through [`TimerToken::new`] so persisted or
    /// wire data cannot bypass normalization.
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawTimerToken::deserialize(d)?;
        Ok(Self::new(raw.enabled, raw.duration_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_closure() {
        for (is_enabled, duration) in [
            (false, 0),
            (false, 1),
            (false, u32::MAX),
            (true, 0),
            (true, 1),
            (true, u32::MAX),
        ] {
            let token = TimerToken::new(is_enabled, duration);
            assert_eq!(token.enabled(), token.duration_seconds() > 0);
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for (is_enabled, duration) in [(true, 0), (false, 45), (true, 86400)] {
            let token = TimerToken::new(is_enabled, duration);
            let renormalized = TimerToken::new(token.enabled(), token.duration_seconds());
            assert_eq!(token, renormalized);
        }
    }

    #[test]
    fn test_disabled_canonical_form() {
        let token = TimerToken::disabled();
        assert!(!token.enabled());
        assert_eq!(token.duration_seconds(), 0);
        assert_eq!(token, TimerToken::default());
        assert_eq!(token, TimerToken::new(false, 0));
    }

    #[test]
    fn test_enabled_with_zero_duration_is_corrected() {
        let token = TimerToken::new(true, 0);
        assert!(!token.enabled());
        assert_eq!(token.duration_seconds(), 0);
    }

    #[test]
    fn test_disabled_with_nonzero_duration_is_corrected() {
        let token = TimerToken::new(false, 45);
        assert!(!token.enabled());
        assert_eq!(token.duration_seconds(), 0);
    }

    #[test]
    fn test_consistent_pair_is_untouched() {
        let token = TimerToken::new(true, 86400);
        assert!(token.enabled());
        assert_eq!(token.duration_seconds(), 86400);
    }

    #[test]
    fn test_from_protocol_timer() {
        assert_eq!(TimerToken::from_protocol_timer(0), TimerToken::disabled());
        assert_eq!(TimerToken::from_protocol_timer(1), TimerToken::new(true, 1));
        assert_eq!(
            TimerToken::from_protocol_timer(30),
            TimerToken::new(true, 30)
        );

        let token = TimerToken::from_protocol_timer(30);
        assert!(token.enabled());
        assert_eq!(token.duration_seconds(), 30);
    }

    #[test]
    fn test_duration_accessor() {
        assert_eq!(TimerToken::disabled().duration(), None);
        assert_eq!(
            TimerToken::new(true, 30).duration(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TimerToken::disabled().to_string(), "off");
        assert_eq!(TimerToken::new(true, 30).to_string(), "30s");
        assert_eq!(TimerToken::new(true, 90).to_string(), "1m 30s");
        assert_eq!(TimerToken::new(true, 3600).to_string(), "1h");
        assert_eq!(TimerToken::new(true, 86400).to_string(), "1d");
        assert_eq!(TimerToken::new(true, 604800).to_string(), "1w");
    }
}
