//! Timestamp formatting in the local time zone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM` in the system time zone.
///
/// Used for a task's creation time. Due dates are civil dates and are
/// printed as they are.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M %Z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts = Timestamp::from_second(1704585600).unwrap();
        let output = LocalDateTime(&ts).to_string();

        // Date part, space, HH:MM, space, zone abbreviation
        let mut parts = output.split(' ');
        assert_eq!(parts.next().map(str::len), Some(10));
        assert_eq!(parts.next().map(str::len), Some(5));
        assert!(parts.next().is_some());
    }
}
