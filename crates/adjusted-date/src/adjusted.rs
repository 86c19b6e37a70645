//! [`AdjustedDate`] and associated impls.
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use temporal_rs::fields::CalendarFields;
use temporal_rs::options::{DifferenceSettings, DisplayCalendar, Overflow};
use temporal_rs::{
    Calendar, Duration, MonthCode, PlainDate, PlainDateTime, PlainMonthDay, PlainTime,
    PlainYearMonth, TinyAsciiStr,
};

use crate::calendar::{DEFAULT_CALENDAR, parse_calendar};
use crate::convert::IntoPlainDate;
use crate::locale::{self, LocaleOptions};
use crate::Result;

/// A calendar date that reads as if a fixed number of days had already been added to it.
///
/// Holds an immutable base [`PlainDate`] (already bound to a calendar system) plus a signed day
/// offset. Nothing is ever mutated or cached: every accessor first resolves the shifted date
/// from `(base, offset)` through the engine, then asks the shifted date for the answer. Month
/// and year rollover are entirely up to the engine's calendar rules.
///
/// Operations that produce new dates ([`add`], [`with`], [`with_calendar`], ...) return plain
/// [`PlainDate`]s computed from the shifted date. The offset is not carried over, so it is
/// never applied twice.
///
/// ```
/// # use adjusted_date::AdjustedDate;
/// # use temporal_rs::PlainDate;
/// let observed = PlainDate::try_new_iso(2024, 7, 6).unwrap();
///
/// let computed = AdjustedDate::new(&observed, "islamic-umalqura", 0).unwrap();
/// assert_eq!(computed.day().unwrap(), 30);
/// assert_eq!(computed.month().unwrap(), 12);
/// assert_eq!(computed.year().unwrap(), 1445);
///
/// let announced = AdjustedDate::new(&observed, "islamic-umalqura", 1).unwrap();
/// assert_eq!(announced.day().unwrap(), 1);
/// assert_eq!(announced.month().unwrap(), 1);
/// assert_eq!(announced.year().unwrap(), 1446);
/// ```
///
/// [`add`]: AdjustedDate::add
/// [`with`]: AdjustedDate::with
/// [`with_calendar`]: AdjustedDate::with_calendar
#[derive(Debug, Clone)]
pub struct AdjustedDate {
    base: PlainDate,
    offset: i64,
}

/// Builder for an [`AdjustedDate`]. Anything left unset falls back to [`DEFAULT_CALENDAR`] and
/// a zero offset.
#[derive(Debug, Clone)]
#[must_use = "call `build` to construct the AdjustedDate"]
pub struct AdjustedDateBuilder<D> {
    date: D,
    calendar: Option<String>,
    offset: i64,
}

impl<D: IntoPlainDate> AdjustedDateBuilder<D> {
    /// Uses the named calendar system instead of [`DEFAULT_CALENDAR`].
    pub fn calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    /// Sets the day offset.
    pub fn offset_days(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Constructs the [`AdjustedDate`], failing if the calendar name isn't recognized.
    pub fn build(self) -> Result<AdjustedDate> {
        let calendar = self.calendar.as_deref().unwrap_or(DEFAULT_CALENDAR);
        AdjustedDate::new(self.date, calendar, self.offset)
    }
}

impl AdjustedDate {
    /// Rebinds 'date' to the named calendar system and wraps it with a fixed day offset.
    ///
    /// The offset isn't validated. If it's too large for the engine to represent, the error
    /// comes out of the first accessor that resolves the date.
    pub fn new<D>(date: D, calendar: &str, offset_days: i64) -> Result<Self>
    where
        D: IntoPlainDate,
    {
        let calendar = parse_calendar(calendar)?;
        Self::with_calendar_system(date, calendar, offset_days)
    }

    /// Identical to [`AdjustedDate::new`], but with an already resolved [`Calendar`].
    pub fn with_calendar_system<D>(date: D, calendar: Calendar, offset_days: i64) -> Result<Self>
    where
        D: IntoPlainDate,
    {
        let base = date.into_plain_date()?.with_calendar(calendar);

        tracing::debug!(
            message = "adjusted date created",
            calendar = base.calendar().identifier(),
            offset_days,
        );

        Ok(Self {
            base,
            offset: offset_days,
        })
    }

    /// Returns an empty builder instance to assemble an [`AdjustedDate`].
    pub fn builder<D: IntoPlainDate>(date: D) -> AdjustedDateBuilder<D> {
        AdjustedDateBuilder {
            date,
            calendar: None,
            offset: 0,
        }
    }

    /// The unshifted date, in the calendar chosen at construction.
    #[inline]
    pub fn base(&self) -> &PlainDate {
        &self.base
    }

    /// The number of days every read is shifted by.
    #[inline]
    pub const fn offset_days(&self) -> i64 {
        self.offset
    }

    /// The calendar both the base and the shifted date are bound to.
    #[inline]
    pub fn calendar(&self) -> &Calendar {
        self.base.calendar()
    }

    /// Computes the shifted date. Called by every public accessor, never cached.
    pub(crate) fn resolve(&self) -> Result<PlainDate> {
        tracing::trace!(message = "resolving adjusted date", base = %self.base, offset = self.offset);

        let shift = Duration::new(0, 0, 0, self.offset, 0, 0, 0, 0, 0, 0)?;
        Ok(self.base.add(&shift, None)?)
    }
}

/// Generates the field accessors, which all resolve and then read the same-named field.
macro_rules! forward_fields {
    ($($(#[$attr:meta])* $name:ident -> $ret:ty),* $(,)?) => {
        impl AdjustedDate {
            $(
                $(#[$attr])*
                #[inline]
                pub fn $name(&self) -> Result<$ret> {
                    self.resolve().map(|date| date.$name())
                }
            )*
        }
    };
}

forward_fields! {
    /// Day of the month.
    day -> u8,
    /// Day of the year, starting at 1.
    day_of_year -> u16,
    /// Number of days in the month.
    days_in_month -> u16,
    /// Number of days in the year.
    days_in_year -> u16,
    /// Ordinal month, starting at 1. For calendars with leap months, prefer
    /// [`AdjustedDate::month_code`].
    month -> u8,
    /// Calendar specific month identifier (i.e 'M01', or 'M05L' for a leap month).
    month_code -> MonthCode,
    /// Number of months in the year.
    months_in_year -> u16,
    /// The calendar year.
    year -> i32,
    /// Whether the year is a leap year in its calendar.
    in_leap_year -> bool,
    /// Day of the week, 1 (Monday) through 7 (Sunday).
    day_of_week -> u16,
    /// Week of the year, when the calendar defines one.
    week_of_year -> Option<u8>,
    /// The year the week belongs to, when the calendar defines weeks.
    year_of_week -> Option<i32>,
    /// Number of days in a week.
    days_in_week -> u16,
    /// The era, for calendars that have them.
    era -> Option<TinyAsciiStr<16>>,
    /// Year within the era, for calendars that have them.
    era_year -> Option<i32>,
}

// ==== Formatting ====

impl AdjustedDate {
    /// Formats the shifted date as an RFC 9557 string, i.e
    /// '2024-07-07[u-ca=islamic-umalqura]'.
    pub fn to_ixdtf_string(&self, display_calendar: DisplayCalendar) -> Result<String> {
        self.resolve()
            .map(|date| date.to_ixdtf_string(display_calendar))
    }

    /// The JSON string form, identical to
    /// 'adjusted.to_ixdtf_string(DisplayCalendar::Auto)'.
    pub fn to_json(&self) -> Result<String> {
        self.to_ixdtf_string(DisplayCalendar::Auto)
    }

    /// Formats the shifted date for a locale (i.e 'en-US', 'ar-SA').
    ///
    /// Since the label is produced from the shifted date, crossing into a new month or year
    /// moves the rendered month/year (and era) with it.
    pub fn to_locale_string(&self, locale: &str, options: &LocaleOptions) -> Result<String> {
        locale::format(&self.resolve()?, locale, options)
    }
}

impl fmt::Display for AdjustedDate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = self.resolve().map_err(|_| fmt::Error)?;
        fmt::Display::fmt(&resolved, formatter)
    }
}

// ==== Projections ====

impl AdjustedDate {
    /// The year + month of the shifted date, as the engine's own type.
    pub fn to_plain_year_month(&self) -> Result<PlainYearMonth> {
        Ok(self.resolve()?.to_plain_year_month()?)
    }

    /// The month + day of the shifted date, as the engine's own type.
    pub fn to_plain_month_day(&self) -> Result<PlainMonthDay> {
        Ok(self.resolve()?.to_plain_month_day()?)
    }

    /// Combines the shifted date with a time of day, defaulting to midnight.
    pub fn to_plain_date_time(&self, time: Option<PlainTime>) -> Result<PlainDateTime> {
        Ok(self.resolve()?.to_plain_date_time(time)?)
    }
}

// ==== Arithmetic ====

impl AdjustedDate {
    /// Adds a [`Duration`] to the shifted date.
    ///
    /// The result is a plain date: adding 'n' days here equals adding 'n' days to
    /// 'base + offset'.
    pub fn add(&self, duration: &Duration, overflow: Option<Overflow>) -> Result<PlainDate> {
        Ok(self.resolve()?.add(duration, overflow)?)
    }

    /// Subtracts a [`Duration`] from the shifted date. See [`AdjustedDate::add`].
    pub fn subtract(&self, duration: &Duration, overflow: Option<Overflow>) -> Result<PlainDate> {
        Ok(self.resolve()?.subtract(duration, overflow)?)
    }

    /// Returns the [`Duration`] from the shifted date until 'other'.
    pub fn until<'a>(
        &self,
        other: impl Into<DateLike<'a>>,
        settings: DifferenceSettings,
    ) -> Result<Duration> {
        let other = other.into().resolve()?;
        Ok(self.resolve()?.until(&other, settings)?)
    }

    /// Returns the [`Duration`] that has passed since 'other', measured from the shifted date.
    pub fn since<'a>(
        &self,
        other: impl Into<DateLike<'a>>,
        settings: DifferenceSettings,
    ) -> Result<Duration> {
        let other = other.into().resolve()?;
        Ok(self.resolve()?.since(&other, settings)?)
    }

    /// Replaces fields of the shifted date.
    pub fn with(&self, fields: CalendarFields, overflow: Option<Overflow>) -> Result<PlainDate> {
        Ok(self.resolve()?.with(fields, overflow)?)
    }

    /// Rebinds the shifted date to another calendar system. 'self' is left as it was.
    pub fn with_calendar(&self, calendar: &str) -> Result<PlainDate> {
        let calendar = parse_calendar(calendar)?;
        Ok(self.resolve()?.with_calendar(calendar))
    }
}

// ==== Comparison ====

/// Either kind of date accepted by [`AdjustedDate::equals`] and the difference operations.
#[derive(Debug, Clone, Copy)]
pub enum DateLike<'a> {
    /// Another adjusted date, compared by its shifted value.
    Adjusted(&'a AdjustedDate),
    /// A plain engine date, compared as-is.
    Plain(&'a PlainDate),
}

impl<'a> DateLike<'a> {
    fn resolve(self) -> Result<Cow<'a, PlainDate>> {
        match self {
            Self::Adjusted(adjusted) => adjusted.resolve().map(Cow::Owned),
            Self::Plain(plain) => Ok(Cow::Borrowed(plain)),
        }
    }
}

impl<'a> From<&'a AdjustedDate> for DateLike<'a> {
    fn from(date: &'a AdjustedDate) -> Self {
        Self::Adjusted(date)
    }
}

impl<'a> From<&'a PlainDate> for DateLike<'a> {
    fn from(date: &'a PlainDate) -> Self {
        Self::Plain(date)
    }
}

impl AdjustedDate {
    /// Checks if the shifted date is the same day, in the same calendar, as 'other'.
    ///
    /// Another [`AdjustedDate`] is compared by its own shifted date, so two wrappers with
    /// different bases and offsets that land on the same day are equal.
    pub fn equals<'a>(&self, other: impl Into<DateLike<'a>>) -> Result<bool> {
        let other = other.into().resolve()?;
        Ok(self.resolve()? == *other)
    }

    /// Orders the shifted date against 'other' by the ISO day each falls on, ignoring
    /// calendars.
    pub fn compare_iso<'a>(&self, other: impl Into<DateLike<'a>>) -> Result<Ordering> {
        let other = other.into().resolve()?;
        Ok(self.resolve()?.compare_iso(&other))
    }
}
