// Date rendering, serialisation and multi-year detection.
use super::Localizer;
use crate::error::FormatError;
use crate::intl::DateStyle;
use chrono::{SecondsFormat, Utc};
use shared::{DateComponents, DateFormat, DateValue, Locale, MonthStyle};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub const INVALID_DATE: &str = "Invalid Date";

impl Localizer<'_> {
    pub fn format_date(&self, date: impl Into<DateValue>, format: DateFormat, locale: Locale) -> String {
        let Some(instant) = date.into().instant() else {
            return INVALID_DATE.to_string();
        };
        let day = instant.date_naive();

        match format {
            DateFormat::Us => day.format("%m/%d/%Y").to_string(),
            DateFormat::European => day.format("%d/%m/%Y").to_string(),
            DateFormat::Asian => day.format("%Y/%m/%d").to_string(),
            other => {
                let style = other
                    .components()
                    .map(DateStyle::Components)
                    .unwrap_or(DateStyle::Medium);
                self.intl().format_date(day, style, locale)
            }
        }
    }
}

/// Renders `date` with `format` in `locale`. Accepts instants, calendar dates
/// and ISO strings; unparseable strings render as `Invalid Date`.
pub fn format_date(date: impl Into<DateValue>, format: DateFormat, locale: Locale) -> String {
    Localizer::default().format_date(date, format, locale)
}

// Same as `format_date` for a raw format key; unknown keys render like `default`.
pub fn format_date_by_key(date: impl Into<DateValue>, key: &str, locale: Locale) -> String {
    let format = key.parse().unwrap_or_else(|_| {
        tracing::warn!(key, "Unknown date format, using default");
        DateFormat::Default
    });
    format_date(date, format, locale)
}

/// Whether the dates span more than one UTC calendar year.
/// Invalid dates all count as the same "no year" member.
pub fn has_multiple_years<I>(dates: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<DateValue>,
{
    let years: HashSet<Option<i32>> = dates.into_iter().map(|d| d.into().utc_year()).collect();
    years.len() > 1
}

#[deprecated(note = "use `format_date` with `DateFormat::ShortMonthDay`")]
pub fn shorthand_dates(date: &str) -> String {
    let components = DateComponents {
        month: MonthStyle::Short,
        day: true,
        year: false,
    };
    match DateValue::parse(date).local_date() {
        Some(day) => Localizer::default()
            .intl()
            .format_date(day, DateStyle::Components(components), Locale::EnUs),
        None => INVALID_DATE.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateSerialization {
    // 2023-10-10T00:00:00.000Z
    Iso,
    // Milliseconds since the Unix epoch.
    UnixTimestamp,
    // Tue, 10 Oct 2023 00:00:00 GMT
    UtcString,
    // 2023-10-10 (UTC calendar date)
    DateOnly,
}

impl DateSerialization {
    pub fn key(self) -> &'static str {
        match self {
            DateSerialization::Iso => "iso",
            DateSerialization::UnixTimestamp => "unixTimestamp",
            DateSerialization::UtcString => "utcString",
            DateSerialization::DateOnly => "dateOnly",
        }
    }
}

impl FromStr for DateSerialization {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iso" => Ok(DateSerialization::Iso),
            "unixTimestamp" => Ok(DateSerialization::UnixTimestamp),
            "utcString" => Ok(DateSerialization::UtcString),
            "dateOnly" => Ok(DateSerialization::DateOnly),
            _ => Err(FormatError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DateSerialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn serialize_date(date: impl Into<DateValue>, format: &str) -> Result<String, FormatError> {
    let format: DateSerialization = format.parse()?;
    let instant = date
        .into()
        .instant()
        .ok_or_else(|| FormatError::InvalidDate(format!("cannot serialize as {}", format)))?
        .with_timezone(&Utc);

    let text = match format {
        DateSerialization::Iso => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        DateSerialization::UnixTimestamp => instant.timestamp_millis().to_string(),
        DateSerialization::UtcString => instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        DateSerialization::DateOnly => instant.format("%Y-%m-%d").to_string(),
    };
    Ok(text)
}
