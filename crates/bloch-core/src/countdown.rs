//! Countdown to a fixed target instant.
//!
//! All inputs are Unix epoch milliseconds so the same code runs against
//! `Date.now()` in the browser and `SystemTime` on the desktop.

use crate::constants::{
    FEST_START_UNIX_MS, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
use crate::error::ConfigError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub target_unix_ms: i64,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(FEST_START_UNIX_MS)
    }
}

impl Countdown {
    pub const fn new(target_unix_ms: i64) -> Self {
        Self { target_unix_ms }
    }

    /// Build from a float millisecond timestamp as produced by `Date.parse`.
    ///
    /// `raw` is only used for the error message.
    pub fn from_parsed_millis(raw: &str, millis: f64) -> Result<Self, ConfigError> {
        if !millis.is_finite() {
            return Err(ConfigError::InvalidTarget(raw.to_string()));
        }
        Ok(Self::new(millis.floor() as i64))
    }

    /// Milliseconds left until the target, clamped at zero once it has passed.
    #[inline]
    pub fn remaining_ms(&self, now_unix_ms: i64) -> u64 {
        self.target_unix_ms.saturating_sub(now_unix_ms).max(0) as u64
    }

    #[inline]
    pub fn has_started(&self, now_unix_ms: i64) -> bool {
        now_unix_ms >= self.target_unix_ms
    }

    #[inline]
    pub fn parts_at(&self, now_unix_ms: i64) -> CountdownParts {
        CountdownParts::from_millis(self.remaining_ms(now_unix_ms))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownParts {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: ((ms / MS_PER_HOUR) % 24) as u8,
            minutes: ((ms / MS_PER_MINUTE) % 60) as u8,
            seconds: ((ms / MS_PER_SECOND) % 60) as u8,
        }
    }

    /// Whole milliseconds represented by the four fields.
    pub fn total_ms(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours as u64 * MS_PER_HOUR
            + self.minutes as u64 * MS_PER_MINUTE
            + self.seconds as u64 * MS_PER_SECOND
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Display text for days, hours, minutes and seconds, in that order.
    pub fn fields(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours as u64),
            pad2(self.minutes as u64),
            pad2(self.seconds as u64),
        ]
    }

    pub fn summary(&self) -> String {
        let [d, h, m, s] = self.fields();
        format!("{d}d {h}:{m}:{s}")
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Somewhere the four countdown fields can be written, such as the page DOM.
pub trait CountdownDisplay {
    /// False when the countdown container is not present.
    fn is_mounted(&self) -> bool;
    /// `index` follows [`CountdownParts::fields`] order.
    fn set_field(&mut self, index: usize, text: &str);
}

/// Write the remaining time into `display`.
///
/// Returns false, writing nothing, when the display is not mounted.
pub fn show_countdown<D>(display: &mut D, countdown: &Countdown, now_unix_ms: i64) -> bool
where
    D: CountdownDisplay + ?Sized,
{
    if !display.is_mounted() {
        return false;
    }
    for (i, text) in countdown.parts_at(now_unix_ms).fields().iter().enumerate() {
        display.set_field(i, text);
    }
    true
}

/// Zero-pad to at least two digits.
#[inline]
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad2_keeps_wide_values() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(365), "365");
    }

    #[test]
    fn remaining_handles_extreme_inputs() {
        let c = Countdown::new(i64::MAX);
        assert_eq!(c.remaining_ms(i64::MIN), i64::MAX as u64);
        let c = Countdown::new(i64::MIN);
        assert_eq!(c.remaining_ms(i64::MAX), 0);
    }

    #[test]
    fn parsed_nan_is_rejected() {
        assert_eq!(
            Countdown::from_parsed_millis("soon", f64::NAN),
            Err(ConfigError::InvalidTarget("soon".into()))
        );
    }
}
