//! Resolving calendar-system names into engine [`Calendar`]s.
use std::str::FromStr;

use temporal_rs::Calendar;

use crate::Error;

/// The calendar system used when none is specified.
pub const DEFAULT_CALENDAR: &str = "islamic-umalqura";

/// Looks up a calendar system by name (i.e 'islamic-umalqura', 'hebrew', 'iso8601').
///
/// Names are matched case-insensitively by the engine. Unknown ones are reported as
/// [`Error::InvalidCalendarSystem`].
pub fn parse_calendar(name: &str) -> Result<Calendar, Error> {
    Calendar::from_str(name).map_err(|cause| {
        tracing::warn!(message = "unknown calendar system", name);
        Error::InvalidCalendarSystem {
            name: name.to_owned(),
            cause,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_calendars() {
        assert_eq!(parse_calendar(DEFAULT_CALENDAR).unwrap(), Calendar::HIJRI_UMM_AL_QURA);
        assert_eq!(parse_calendar("hebrew").unwrap(), Calendar::HEBREW);
        assert_eq!(parse_calendar("iso8601").unwrap(), Calendar::ISO);
    }

    #[test]
    fn test_unknown_calendar() {
        let err = parse_calendar("moon-phase").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCalendarSystem { ref name, .. } if name == "moon-phase"
        ));
    }
}
