//! [`AdjustmentConfig`]: the calendar + offset pair, as it would be loaded from settings.
use serde::{Deserialize, Serialize};

use crate::calendar::DEFAULT_CALENDAR;
use crate::convert::IntoPlainDate;
use crate::{AdjustedDate, Result};

/// Which calendar to read dates in, and how many days to shift them by.
///
/// Deserializes from camelCase keys, with both fields optional:
///
/// ```
/// # use adjusted_date::AdjustmentConfig;
/// let config = AdjustmentConfig::from_json_str(r#"{ "offsetDays": -1 }"#).unwrap();
///
/// assert_eq!(config.calendar, "islamic-umalqura");
/// assert_eq!(config.offset_days, -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentConfig {
    /// Name of the calendar system. Defaults to [`DEFAULT_CALENDAR`].
    #[serde(default = "default_calendar")]
    pub calendar: String,
    /// Signed number of days to shift by. Defaults to 0.
    #[serde(default)]
    pub offset_days: i64,
}

fn default_calendar() -> String {
    DEFAULT_CALENDAR.to_owned()
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            calendar: default_calendar(),
            offset_days: 0,
        }
    }
}

impl AdjustmentConfig {
    /// Parses a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wraps 'date' with this calendar + offset.
    pub fn apply<D: IntoPlainDate>(&self, date: D) -> Result<AdjustedDate> {
        AdjustedDate::new(date, &self.calendar, self.offset_days)
    }
}

#[cfg(test)]
mod tests {
    use temporal_rs::PlainDate;

    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = AdjustmentConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AdjustmentConfig::default());
    }

    #[test]
    fn test_apply() {
        let config =
            AdjustmentConfig::from_json_str(r#"{ "calendar": "iso8601", "offsetDays": 30 }"#)
                .unwrap();

        let adjusted = config
            .apply(PlainDate::try_new_iso(2024, 1, 31).unwrap())
            .unwrap();

        assert_eq!(adjusted.offset_days(), 30);
        assert_eq!(adjusted.month().unwrap(), 3);
        assert_eq!(adjusted.day().unwrap(), 1);
    }

    #[test]
    fn test_bad_documents() {
        let err = AdjustmentConfig::from_json_str(r#"{ "offsetDays": 1.5 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = AdjustmentConfig::from_json_str(r#"{ "calendar": "lunar" }"#).unwrap();
        let err = config
            .apply(PlainDate::try_new_iso(2024, 1, 31).unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCalendarSystem { .. }));
    }
}
