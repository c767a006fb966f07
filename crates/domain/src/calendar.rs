// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic for monthly schedules.
//!
//! Month lengths are derived from the distance between the first day of a
//! month and the first day of the following month, so leap years and variable
//! month lengths come straight from the calendar rather than a lookup table.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

/// ISO 8601 calendar date format (`YYYY-MM-DD`).
const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Converts a 1-based month number into a calendar month.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarMonth` if `month` is not in `1..=12`.
pub fn month_from_number(year: i32, month: u8) -> Result<Month, DomainError> {
    Month::try_from(month).map_err(|_| DomainError::InvalidCalendarMonth { year, month })
}

/// Returns the first day of the given month.
///
/// # Errors
///
/// Returns an error if the year is outside the representable range.
pub fn first_day_of_month(year: i32, month: Month) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, 1).map_err(|_| DomainError::InvalidCalendarMonth {
        year,
        month: u8::from(month),
    })
}

/// Returns the number of days in the given month.
///
/// # Errors
///
/// Returns an error if the month, or the month following it, is outside the
/// representable range.
pub fn days_in_month(year: i32, month: Month) -> Result<u8, DomainError> {
    let first: Date = first_day_of_month(year, month)?;
    let next_year: i32 = if month == Month::December {
        year.checked_add(1)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("advancing past December {year}"),
            })?
    } else {
        year
    };
    let next_first: Date = first_day_of_month(next_year, month.next())?;

    u8::try_from((next_first - first).whole_days()).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("measuring the length of {month} {year}"),
        }
    })
}

/// Returns every date of the given month in ascending order.
///
/// # Errors
///
/// Returns an error if the month is outside the representable range.
pub fn month_dates(year: i32, month: Month) -> Result<Vec<Date>, DomainError> {
    let length: u8 = days_in_month(year, month)?;
    (1..=length)
        .map(|day| {
            Date::from_calendar_date(year, month, day).map_err(|e| {
                DomainError::DateArithmeticOverflow {
                    operation: format!("building day {day} of {month} {year}: {e}"),
                }
            })
        })
        .collect()
}

/// Whole days from `reference` to `date`.
///
/// Positive when `date` is after `reference`, zero on the same day.
#[must_use]
pub fn days_between(reference: Date, date: Date) -> i64 {
    (date - reference).whole_days()
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as ISO `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Serde adapter that reads and writes dates as ISO `YYYY-MM-DD` strings.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    /// Deserializes a date from `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the string is not a valid date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let value: String = String::deserialize(deserializer)?;
        super::parse_iso_date(&value).map_err(serde::de::Error::custom)
    }

    /// The same adapter for optional dates.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        /// Serializes an optional date as `YYYY-MM-DD` or `null`.
        ///
        /// # Errors
        ///
        /// Propagates serializer errors.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_some(&super::super::format_iso_date(*date)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional date from `YYYY-MM-DD` or `null`.
        ///
        /// # Errors
        ///
        /// Returns a deserialization error if a present string is not a valid date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|value| super::super::parse_iso_date(&value).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
