// Format selectors: how dates and raw values are turned into display text,
// plus the named relative date ranges.
use crate::error::ParseKindError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DateFormat {
    #[default]
    Default,
    ShortMonthDay,
    ShortMonthDayYear,
    LongMonthDay,
    LongMonthDayYear,
    Us,
    European,
    Asian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthStyle {
    Short,
    Long,
}

/// Independent date components for the composed formats
/// (`shortMonthDay`, `longMonthDayYear`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateComponents {
    pub month: MonthStyle,
    pub day: bool,
    pub year: bool,
}

impl DateFormat {
    pub const ALL: [DateFormat; 8] = [
        DateFormat::Default,
        DateFormat::ShortMonthDay,
        DateFormat::ShortMonthDayYear,
        DateFormat::LongMonthDay,
        DateFormat::LongMonthDayYear,
        DateFormat::Us,
        DateFormat::European,
        DateFormat::Asian,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DateFormat::Default => "default",
            DateFormat::ShortMonthDay => "shortMonthDay",
            DateFormat::ShortMonthDayYear => "shortMonthDayYear",
            DateFormat::LongMonthDay => "longMonthDay",
            DateFormat::LongMonthDayYear => "longMonthDayYear",
            DateFormat::Us => "us",
            DateFormat::European => "european",
            DateFormat::Asian => "asian",
        }
    }

    pub fn components(self) -> Option<DateComponents> {
        let (month, year) = match self {
            DateFormat::ShortMonthDay => (MonthStyle::Short, false),
            DateFormat::ShortMonthDayYear => (MonthStyle::Short, true),
            DateFormat::LongMonthDay => (MonthStyle::Long, false),
            DateFormat::LongMonthDayYear => (MonthStyle::Long, true),
            _ => return None,
        };
        Some(DateComponents {
            month,
            day: true,
            year,
        })
    }

    // Unknown keys render like `default`.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for DateFormat {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ParseKindError::new("date format", s))
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormatKind {
    #[default]
    None,
    Localized,
    Abbreviated,
    Currency,
}

impl ValueFormatKind {
    pub fn key(self) -> &'static str {
        match self {
            ValueFormatKind::None => "none",
            ValueFormatKind::Localized => "localized",
            ValueFormatKind::Abbreviated => "abbreviated",
            ValueFormatKind::Currency => "currency",
        }
    }

    // Unknown keys behave like `none` (plain string coercion).
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for ValueFormatKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ValueFormatKind::None),
            "localized" => Ok(ValueFormatKind::Localized),
            "abbreviated" => Ok(ValueFormatKind::Abbreviated),
            "currency" => Ok(ValueFormatKind::Currency),
            _ => Err(ParseKindError::new("value format", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangeOption {
    #[serde(rename = "last7Days")]
    Last7Days,
    #[serde(rename = "last30Days")]
    Last30Days,
    #[serde(rename = "lastWeek")]
    LastWeek,
    #[serde(rename = "lastMonth")]
    LastMonth,
    #[serde(rename = "lastQuarter")]
    LastQuarter,
    #[serde(rename = "lastYear")]
    LastYear,
    #[serde(rename = "mtd")]
    Mtd,
    #[serde(rename = "ytd")]
    Ytd,
}

impl DateRangeOption {
    pub const ALL: [DateRangeOption; 8] = [
        DateRangeOption::Last7Days,
        DateRangeOption::Last30Days,
        DateRangeOption::LastWeek,
        DateRangeOption::LastMonth,
        DateRangeOption::LastQuarter,
        DateRangeOption::LastYear,
        DateRangeOption::Mtd,
        DateRangeOption::Ytd,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DateRangeOption::Last7Days => "last7Days",
            DateRangeOption::Last30Days => "last30Days",
            DateRangeOption::LastWeek => "lastWeek",
            DateRangeOption::LastMonth => "lastMonth",
            DateRangeOption::LastQuarter => "lastQuarter",
            DateRangeOption::LastYear => "lastYear",
            DateRangeOption::Mtd => "mtd",
            DateRangeOption::Ytd => "ytd",
        }
    }

    // Position in `ALL`; used to index per-locale label tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for DateRangeOption {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRangeOption::ALL
            .into_iter()
            .find(|o| o.key() == s)
            .ok_or_else(|| ParseKindError::new("date range option", s))
    }
}

impl fmt::Display for DateRangeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// Inclusive span of calendar instants, always `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}
