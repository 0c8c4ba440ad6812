//! Date and time display utilities.

use std::fmt;

use jiff::civil::{Date, DateTime};

/// ISO plan date shown as `Mar 5, 2026`.
///
/// Strings that are not ISO dates are shown unchanged, and an empty date is
/// shown as nothing.
///
/// ```rust
/// use wanderlust_core::display::PlanDate;
///
/// assert_eq!(PlanDate("2026-03-05").to_string(), "Mar 5, 2026");
/// assert_eq!(PlanDate("sometime").to_string(), "sometime");
/// ```
pub struct PlanDate<'a>(pub &'a str);

impl fmt::Display for PlanDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.parse::<Date>() {
            Ok(date) => write!(f, "{}", date.strftime("%b %-d, %Y")),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Wall-clock time shown as `09:05:00 PM`.
pub struct LocalTime<'a>(pub &'a DateTime);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%I:%M:%S %p"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_date_formats() {
        assert_eq!(PlanDate("2026-12-25").to_string(), "Dec 25, 2026");
        assert_eq!(PlanDate("").to_string(), "");
    }

    #[test]
    fn test_local_time_is_twelve_hour() {
        let time = DateTime::constant(2026, 1, 1, 21, 5, 0, 0);
        assert_eq!(LocalTime(&time).to_string(), "09:05:00 PM");
    }
}
