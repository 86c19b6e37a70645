#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
#![deny(missing_docs)]
//! An [`AdjustedDate`] wraps a calendar date with a fixed day offset, so that every field,
//! string and derived value reads as if the offset had already been applied.
//!
//! The point is to line up a computed calendar date with a locally observed one (i.e an
//! astronomically computed Hijri month start vs. the officially announced one), without touching
//! the calendar's own rules. All calendar math is done by [`temporal_rs`]; locale formatting by
//! [`icu_datetime`].
//!
//! Base dates can be built from:
//!
//! - [`temporal_rs::PlainDate`]
//! - [`chrono::NaiveDate`]
//! - [`time::Date`]
//!
//! [`chrono::NaiveDate`]: https://docs.rs/chrono/latest/chrono/struct.NaiveDate.html
//! [`time::Date`]: https://docs.rs/time/latest/time/struct.Date.html
pub mod adjusted;
pub mod calendar;
pub mod config;
pub mod convert;
pub mod error;
mod locale;
mod ser;

pub use crate::adjusted::{AdjustedDate, AdjustedDateBuilder, DateLike};
pub use crate::calendar::{DEFAULT_CALENDAR, parse_calendar};
pub use crate::config::AdjustmentConfig;
pub use crate::convert::IntoPlainDate;
pub use crate::error::{Error, Result};
pub use crate::locale::{DateStyle, LocaleOptions};

/// Re-export of the date engine, so callers build [`PlainDate`]s, [`Duration`]s and options
/// against the same version this crate uses.
///
/// [`PlainDate`]: temporal_rs::PlainDate
/// [`Duration`]: temporal_rs::Duration
pub use temporal_rs;

#[cfg(test)]
mod tests {
    use rand::Rng;
    use temporal_rs::PlainDate;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_thread_safety() {
        assert_send_sync::<AdjustedDate>();
    }

    #[test]
    fn test_zero_offset_identity() {
        let mut rng = rand::rng();

        for _ in 0..64 {
            let date = PlainDate::try_new_iso(
                rng.random_range(1900..2100),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
            )
            .unwrap();

            let adjusted = AdjustedDate::new(&date, "iso8601", 0).unwrap();

            assert!(adjusted.equals(&date).unwrap());
            assert_eq!(adjusted.to_json().unwrap(), date.to_string());
        }
    }
}
