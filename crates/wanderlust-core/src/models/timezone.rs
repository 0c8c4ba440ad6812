//! UTC offset labels such as `UTC+5:30`.

use jiff::{
    civil::DateTime,
    tz::{Offset, TimeZone},
    Timestamp,
};

use super::country::DEFAULT_TIMEZONE;

/// A timezone label as published by the reference data, together with the
/// fixed offset it denotes.
///
/// Labels have the form `UTC`, `UTC+H:MM` or `UTC-H:MM`. Labels that cannot be
/// parsed keep their text but resolve to a zero offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneOffset {
    label: String,
    offset: Offset,
}

impl TimezoneOffset {
    pub fn utc() -> Self {
        Self {
            label: DEFAULT_TIMEZONE.to_string(),
            offset: Offset::UTC,
        }
    }

    /// Build from a label, falling back to a zero offset when malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wanderlust_core::models::TimezoneOffset;
    ///
    /// let india = TimezoneOffset::new("UTC+05:30");
    /// assert_eq!(india.offset().seconds(), 5 * 3600 + 30 * 60);
    ///
    /// let broken = TimezoneOffset::new("Mars/Olympus");
    /// assert_eq!(broken.as_str(), "Mars/Olympus");
    /// assert_eq!(broken.offset().seconds(), 0);
    /// ```
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Self::utc();
        }
        let offset = parse_utc_offset(trimmed).unwrap_or_else(|| {
            log::debug!("Unrecognized timezone label '{trimmed}', using UTC offset");
            Offset::UTC
        });
        Self {
            label: trimmed.to_string(),
            offset,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Wall-clock time at this offset for the given instant.
    pub fn local_time(&self, now: Timestamp) -> DateTime {
        now.to_zoned(TimeZone::fixed(self.offset)).datetime()
    }
}

impl Default for TimezoneOffset {
    fn default() -> Self {
        Self::utc()
    }
}

/// Parse `UTC`, `UTC±H`, `UTC±H:MM` or `UTC±HH:MM` into a fixed offset.
pub fn parse_utc_offset(label: &str) -> Option<Offset> {
    let rest = label.trim().strip_prefix(DEFAULT_TIMEZONE)?;
    if rest.is_empty() {
        return Some(Offset::UTC);
    }

    let (sign, rest) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=18).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    Offset::from_seconds(sign * (hours * 3600 + minutes * 60)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset_forms() {
        assert_eq!(parse_utc_offset("UTC"), Some(Offset::UTC));
        assert_eq!(
            parse_utc_offset("UTC+01:00").map(|o| o.seconds()),
            Some(3600)
        );
        assert_eq!(
            parse_utc_offset("UTC-3:30").map(|o| o.seconds()),
            Some(-(3 * 3600 + 30 * 60))
        );
        assert_eq!(parse_utc_offset("UTC+9").map(|o| o.seconds()), Some(9 * 3600));
    }

    #[test]
    fn test_parse_utc_offset_rejects_garbage() {
        assert_eq!(parse_utc_offset("GMT+1"), None);
        assert_eq!(parse_utc_offset("UTC*2"), None);
        assert_eq!(parse_utc_offset("UTC+ab:00"), None);
        assert_eq!(parse_utc_offset("UTC+05:75"), None);
        assert_eq!(parse_utc_offset("UTC+"), None);
    }

    #[test]
    fn test_local_time_applies_offset() {
        let tz = TimezoneOffset::new("UTC+05:30");
        // 2026-01-01 00:00:00 UTC
        let now = Timestamp::from_second(1_767_225_600).unwrap();
        let local = tz.local_time(now);
        assert_eq!(local.hour(), 5);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn test_blank_label_is_utc() {
        assert_eq!(TimezoneOffset::new("  "), TimezoneOffset::utc());
    }
}
