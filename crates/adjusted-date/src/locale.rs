//! Locale-aware formatting, handed off to [`icu_datetime`].
use icu_calendar::Date;
use icu_datetime::{DateTimeFormatter, DateTimeFormatterPreferences, fieldsets};
use icu_locale_core::Locale;
use icu_locale_core::extensions::unicode::{Value, key};
use serde::{Deserialize, Serialize};
use temporal_rs::{Calendar, PlainDate};

use crate::Error;
use crate::calendar::parse_calendar;

/// How much detail to render, mirroring the `dateStyle` option of `Intl.DateTimeFormat`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateStyle {
    /// Weekday, day, month name and year.
    Full,
    /// Day, month name and year.
    Long,
    /// Day, abbreviated month and year.
    #[default]
    Medium,
    /// Numeric day, month and year.
    Short,
}

/// Options for [`AdjustedDate::to_locale_string`].
///
/// [`AdjustedDate::to_locale_string`]: crate::AdjustedDate::to_locale_string
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleOptions {
    /// The level of detail. Defaults to [`DateStyle::Medium`].
    #[serde(default)]
    pub date_style: Option<DateStyle>,
    /// Calendar to render in. When unset, an ISO date renders in the locale's default calendar
    /// and any other date renders in its own calendar.
    #[serde(default)]
    pub calendar: Option<String>,
}

impl LocaleOptions {
    /// Sets the date style.
    pub fn date_style(mut self, style: DateStyle) -> Self {
        self.date_style = Some(style);
        self
    }

    /// Sets the calendar to render in.
    pub fn calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }
}

/// Picks the calendar keyword to attach to the locale, if any.
///
/// The requested name is resolved like any other calendar name, so it is matched
/// case-insensitively and sent to the formatter in its canonical form. A date in a non-ISO
/// calendar can only be rendered in that calendar.
fn calendar_keyword(
    date: &PlainDate,
    options: &LocaleOptions,
) -> Result<Option<&'static str>, Error> {
    let Some(name) = options.calendar.as_deref() else {
        return Ok(None);
    };

    let requested = parse_calendar(name)?;

    if &requested == date.calendar() {
        Ok(None)
    } else if date.calendar().is_iso() {
        Ok(Some(requested.identifier()))
    } else {
        Err(Error::CalendarMismatch {
            date: date.calendar().identifier(),
            requested: name.to_owned(),
        })
    }
}

/// Formats 'date' for the given locale identifier (i.e 'en-US', 'ar-SA').
pub(crate) fn format(
    date: &PlainDate,
    locale: &str,
    options: &LocaleOptions,
) -> Result<String, Error> {
    let mut locale = Locale::try_from_str(locale)?;

    let calendar = match calendar_keyword(date, options)? {
        Some(requested) => Some(requested),
        None if !date.calendar().is_iso() => Some(date.calendar().identifier()),
        None => None,
    };

    if let Some(calendar) = calendar {
        locale
            .extensions
            .unicode
            .keywords
            .set(key!("ca"), Value::try_from_str(calendar)?);
    }

    let iso = date.with_calendar(Calendar::ISO);
    let iso = Date::try_new_iso(iso.year(), iso.month(), iso.day())?;

    let prefs = DateTimeFormatterPreferences::from(&locale);

    macro_rules! render {
        ($fieldset:expr) => {{
            let formatter = DateTimeFormatter::try_new(prefs, $fieldset)?;
            formatter.format(&iso).to_string()
        }};
    }

    let formatted = match options.date_style.unwrap_or_default() {
        DateStyle::Full => render!(fieldsets::YMDE::long()),
        DateStyle::Long => render!(fieldsets::YMD::long()),
        DateStyle::Medium => render!(fieldsets::YMD::medium()),
        DateStyle::Short => render!(fieldsets::YMD::short()),
    };

    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hijri_date() -> PlainDate {
        PlainDate::try_new_iso(2024, 7, 6)
            .unwrap()
            .with_calendar(Calendar::HIJRI_UMM_AL_QURA)
    }

    #[test]
    fn test_calendar_keyword() {
        let iso = PlainDate::try_new_iso(2024, 7, 6).unwrap();
        let hijri = hijri_date();

        let umalqura = LocaleOptions::default().calendar("islamic-umalqura");
        let hebrew = LocaleOptions::default().calendar("hebrew");

        assert_eq!(
            calendar_keyword(&iso, &umalqura).unwrap(),
            Some("islamic-umalqura")
        );
        assert_eq!(calendar_keyword(&hijri, &umalqura).unwrap(), None);
        assert_eq!(calendar_keyword(&hijri, &LocaleOptions::default()).unwrap(), None);
        assert!(matches!(
            calendar_keyword(&hijri, &hebrew),
            Err(Error::CalendarMismatch { .. })
        ));
    }

    #[test]
    fn test_calendar_keyword_is_canonical() {
        let iso = PlainDate::try_new_iso(2024, 7, 6).unwrap();
        let hebrew = iso.with_calendar(Calendar::HEBREW);

        let mixed_case = LocaleOptions::default().calendar("Islamic-UmAlQura");
        assert_eq!(
            calendar_keyword(&iso, &mixed_case).unwrap(),
            Some("islamic-umalqura")
        );
        assert_eq!(calendar_keyword(&hijri_date(), &mixed_case).unwrap(), None);

        let capitalized = LocaleOptions::default().calendar("Hebrew");
        assert_eq!(calendar_keyword(&hebrew, &capitalized).unwrap(), None);

        let formatted = format(&hebrew, "en-US", &capitalized).unwrap();
        assert!(formatted.contains("5784"), "{formatted}");

        let err = calendar_keyword(&iso, &LocaleOptions::default().calendar("moon-phase"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCalendarSystem { .. }));
    }

    #[test]
    fn test_format_in_date_calendar() {
        let formatted = format(&hijri_date(), "en-US", &LocaleOptions::default()).unwrap();
        assert!(formatted.contains("1445"), "{formatted}");
    }

    #[test]
    fn test_bad_locale() {
        let err = format(&hijri_date(), "not a locale!", &LocaleOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Locale(_)));
    }

    #[test]
    fn test_options_deserialize() {
        let options: LocaleOptions =
            serde_json::from_str(r#"{ "dateStyle": "full", "calendar": "islamic-umalqura" }"#)
                .unwrap();

        assert_eq!(
            options,
            LocaleOptions::default()
                .date_style(DateStyle::Full)
                .calendar("islamic-umalqura")
        );
    }
}
