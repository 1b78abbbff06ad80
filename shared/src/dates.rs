// Date input accepted by the formatting functions: either a concrete instant
// or the result of a string that failed to parse.
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateValue {
    Valid(DateTime<FixedOffset>),
    // Unparseable input; renders as "Invalid Date" downstream instead of failing.
    Invalid,
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl DateValue {
    /// Parses ISO-8601 style input.
    ///
    /// Strings with an explicit offset keep it; date-only and offset-less
    /// date-time strings are read as UTC.
    pub fn parse(input: &str) -> Self {
        let s = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return DateValue::Valid(dt);
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return DateValue::Valid(naive.and_utc().fixed_offset());
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => DateValue::from(date),
            Err(_) => DateValue::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateValue::Valid(_))
    }

    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            DateValue::Valid(dt) => Some(*dt),
            DateValue::Invalid => None,
        }
    }

    pub fn utc_year(&self) -> Option<i32> {
        self.instant().map(|dt| dt.with_timezone(&Utc).year())
    }

    pub fn timestamp_millis(&self) -> Option<i64> {
        self.instant().map(|dt| dt.timestamp_millis())
    }

    // Calendar date as seen in the value's own offset.
    pub fn local_date(&self) -> Option<NaiveDate> {
        self.instant().map(|dt| dt.date_naive())
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateValue::Valid(dt)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateValue::Valid(dt.fixed_offset())
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Valid(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::parse(s)
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        DateValue::parse(&s)
    }
}

impl From<&String> for DateValue {
    fn from(s: &String) -> Self {
        DateValue::parse(s)
    }
}
