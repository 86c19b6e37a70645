//! [`IntoPlainDate`], for building base dates out of the date types from common crates.
//!
//! Supported types are:
//!
//! - [`temporal_rs::PlainDate`] (kept as-is, in whatever calendar it's already in)
//! - [`chrono::NaiveDate`] (with the `chrono` feature)
//! - [`time::Date`] (with the `time` feature)
//!
//! Foreign dates are always proleptic Gregorian, so they come out as ISO [`PlainDate`]s.
use temporal_rs::{PlainDate, TemporalError};

/// Something that can be turned into an engine [`PlainDate`].
pub trait IntoPlainDate {
    /// Performs the conversion. Fails if the date is outside the range the engine supports.
    fn into_plain_date(self) -> Result<PlainDate, TemporalError>;
}

impl IntoPlainDate for PlainDate {
    fn into_plain_date(self) -> Result<PlainDate, TemporalError> {
        Ok(self)
    }
}

impl IntoPlainDate for &PlainDate {
    fn into_plain_date(self) -> Result<PlainDate, TemporalError> {
        Ok(self.clone())
    }
}

#[cfg(feature = "chrono")]
impl IntoPlainDate for chrono::NaiveDate {
    fn into_plain_date(self) -> Result<PlainDate, TemporalError> {
        use chrono::Datelike;

        PlainDate::try_new_iso(self.year(), self.month() as u8, self.day() as u8)
    }
}

#[cfg(feature = "time")]
impl IntoPlainDate for time::Date {
    fn into_plain_date(self) -> Result<PlainDate, TemporalError> {
        PlainDate::try_new_iso(self.year(), self.month() as u8, self.day())
    }
}
