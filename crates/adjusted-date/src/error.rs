//! Error types surfaced by [`AdjustedDate`] operations.
//!
//! Calendar failures all originate in the date engine. They are carried through untouched,
//! either as [`Error::Engine`] or, when a calendar name was the problem, as
//! [`Error::InvalidCalendarSystem`].
//!
//! [`AdjustedDate`]: crate::AdjustedDate
use std::fmt;

use temporal_rs::TemporalError;
use temporal_rs::error::ErrorKind;

/// Shorthand for results returned throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error types that can be encountered.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named calendar system isn't one the engine recognizes.
    #[error("invalid calendar system '{name}': {cause}")]
    InvalidCalendarSystem {
        /// The name as it was given to us.
        name: String,
        /// The error the engine raised while parsing the name.
        cause: TemporalError,
    },
    /// Any other error raised by the date engine, forwarded as-is.
    #[error("{0}")]
    Engine(TemporalError),
    /// A malformed locale identifier, or a calendar name that isn't a valid locale keyword.
    #[error(transparent)]
    Locale(#[from] icu_locale_core::ParseError),
    /// The resolved date couldn't be handed off to the locale formatter.
    #[error(transparent)]
    IsoRange(#[from] icu_calendar::RangeError),
    /// The locale formatter has no data for the requested locale + calendar.
    #[error("could not load a date formatter: {0}")]
    FormatterLoad(icu_datetime::DateTimeFormatterLoadError),
    /// Locale formatting asked for a calendar that differs from the date's own (non-ISO)
    /// calendar.
    #[error("calendar mismatch: date uses '{date}' but '{requested}' was requested")]
    CalendarMismatch {
        /// Identifier of the calendar the date is bound to.
        date: &'static str,
        /// The calendar requested through [`LocaleOptions`].
        ///
        /// [`LocaleOptions`]: crate::LocaleOptions
        requested: String,
    },
    /// A malformed [`AdjustmentConfig`] document.
    ///
    /// [`AdjustmentConfig`]: crate::AdjustmentConfig
    #[error(transparent)]
    Config(#[from] serde_json::Error),
    /// Custom serialization errors
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Returns the engine error behind this one, if it came from the engine.
    pub fn engine(&self) -> Option<&TemporalError> {
        match self {
            Self::Engine(err) | Self::InvalidCalendarSystem { cause: err, .. } => Some(err),
            _ => None,
        }
    }

    /// The engine's own classification of the error (range, type, ...), if it came from the
    /// engine.
    pub fn engine_kind(&self) -> Option<ErrorKind> {
        self.engine().map(TemporalError::kind)
    }
}

impl From<TemporalError> for Error {
    fn from(err: TemporalError) -> Self {
        Self::Engine(err)
    }
}

impl From<icu_datetime::DateTimeFormatterLoadError> for Error {
    fn from(err: icu_datetime::DateTimeFormatterLoadError) -> Self {
        Self::FormatterLoad(err)
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::Custom(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_pass_through() {
        let raw = TemporalError::range().with_message("out of range");
        let err = Error::from(raw);

        assert_eq!(err.engine(), Some(&raw));
        assert_eq!(err.engine_kind(), Some(ErrorKind::Range));
        assert_eq!(err.to_string(), raw.to_string());
    }

    #[test]
    fn test_calendar_errors_keep_cause() {
        let cause = TemporalError::range().with_message("unknown calendar");
        let err = Error::InvalidCalendarSystem {
            name: "lunar-ish".to_owned(),
            cause,
        };

        assert_eq!(err.engine(), Some(&cause));
        assert!(err.to_string().contains("'lunar-ish'"));
    }
}
