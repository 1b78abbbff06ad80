// Named relative date ranges (last 7 days, last quarter, year to date, ...)
// resolved against "today".
use super::calendar;
use crate::error::FormatError;
use crate::intl;
use chrono::{DateTime, FixedOffset, Local, SubsecRound, Utc, Weekday};
use shared::{DateRange, DateRangeOption, Locale};

/// Reference "today" for a given instant.
///
/// Without a local offset this is `now` truncated to whole seconds, with the
/// time of day kept. With one it is midnight of the local calendar date.
pub fn today_at(now: DateTime<Utc>, local_offset: Option<FixedOffset>) -> DateTime<FixedOffset> {
    match local_offset {
        None => now.trunc_subsecs(0).fixed_offset(),
        Some(offset) => {
            let local = now.with_timezone(&offset);
            calendar::start_of_day(local).unwrap_or(local)
        }
    }
}

pub fn get_today(local_timezone: bool) -> DateTime<FixedOffset> {
    let now = Utc::now();
    let offset = local_timezone.then(|| *Local::now().offset());
    today_at(now, offset)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeResolver {
    today: DateTime<FixedOffset>,
    week_start: Weekday,
}

impl DateRangeResolver {
    // Weeks start on Sunday unless configured otherwise.
    pub fn new(today: DateTime<FixedOffset>) -> Self {
        Self {
            today,
            week_start: Weekday::Sun,
        }
    }

    pub fn for_locale(today: DateTime<FixedOffset>, locale: Locale) -> Self {
        Self::new(today).with_week_start(intl::week_start(locale))
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn today(&self) -> DateTime<FixedOffset> {
        self.today
    }

    pub fn resolve(&self, option: DateRangeOption, enable_today: bool) -> Result<DateRange, FormatError> {
        let (from, to) = self.bounds(option, enable_today).ok_or_else(|| {
            FormatError::DateOutOfRange(format!("cannot resolve {} relative to {}", option, self.today))
        })?;
        tracing::trace!(%option, enable_today, %from, %to, "Resolved date range");
        Ok(DateRange { from, to })
    }

    /// Like [`resolve`](Self::resolve) for a raw option key; unknown keys
    /// resolve as the last 7 days.
    pub fn resolve_key(&self, key: &str, enable_today: bool) -> Result<DateRange, FormatError> {
        let option = key.parse().unwrap_or_else(|_| {
            tracing::warn!(key, "Unknown date range option, using last7Days");
            DateRangeOption::Last7Days
        });
        self.resolve(option, enable_today)
    }

    fn bounds(
        &self,
        option: DateRangeOption,
        enable_today: bool,
    ) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let today = self.today;
        let to = if enable_today {
            today
        } else {
            calendar::add_days(today, -1)?
        };

        let (from, to) = match option {
            DateRangeOption::Last7Days => (calendar::add_days(to, -6)?, to),
            DateRangeOption::Last30Days => (calendar::add_days(to, -29)?, to),
            DateRangeOption::LastWeek => {
                let from = calendar::start_of_week(calendar::add_days(today, -7)?, self.week_start)?;
                let to = calendar::add_days(calendar::start_of_week(today, self.week_start)?, -1)?;
                (from, to)
            }
            DateRangeOption::LastMonth => {
                let previous = calendar::sub_months(today, 1)?;
                (calendar::start_of_month(previous)?, calendar::end_of_month(previous)?)
            }
            DateRangeOption::LastQuarter => {
                let previous = calendar::sub_months(today, 3)?;
                (calendar::start_of_quarter(previous)?, calendar::end_of_quarter(previous)?)
            }
            DateRangeOption::LastYear => {
                let previous = calendar::sub_months(today, 12)?;
                (calendar::start_of_year(previous)?, calendar::end_of_year(previous)?)
            }
            DateRangeOption::Mtd => (calendar::start_of_month(today)?, to),
            DateRangeOption::Ytd => (calendar::start_of_year(today)?, to),
        };

        // mtd/ytd on the first day of the period without today would start after
        // they end; pull `from` back to the start of `to`'s day.
        if from > to {
            return Some((calendar::start_of_day(to)?, to));
        }
        Some((from, to))
    }
}

/// Resolves `option` against the current day, in UTC or in the local time zone.
pub fn get_date_range(
    option: DateRangeOption,
    enable_today: bool,
    local_timezone: bool,
) -> Result<DateRange, FormatError> {
    DateRangeResolver::new(get_today(local_timezone)).resolve(option, enable_today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn fixed(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn ymd(dt: DateTime<FixedOffset>) -> NaiveDate {
        dt.date_naive()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_utc_keeps_time_of_day() {
        // The UTC branch only drops sub-second precision; it does not truncate to midnight.
        let today = today_at(utc("2023-11-07T11:30:15.250Z"), None);
        assert_eq!(today, fixed("2023-11-07T11:30:15Z"));
        assert_eq!(today.day(), 7);
    }

    #[test]
    fn test_today_utc_truncates_rather_than_rounds() {
        let today = today_at(utc("2023-12-31T23:59:59.999999999Z"), None);
        assert_eq!(today, fixed("2023-12-31T23:59:59Z"));
        assert_eq!(today.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_today_local_is_midnight() {
        let offset = FixedOffset::west_opt(6 * 3600).unwrap();
        let today = today_at(utc("2023-11-07T11:30:00Z"), Some(offset));
        assert_eq!(today, fixed("2023-11-07T00:00:00-06:00"));
    }

    #[test]
    fn test_today_utc_tomorrow_but_local_today() {
        // 23:30 at UTC-6 is already the 8th in UTC.
        let now = utc("2023-11-07T23:30:00-06:00");
        assert_eq!(today_at(now, None).day(), 8);
        let offset = FixedOffset::west_opt(6 * 3600).unwrap();
        assert_eq!(today_at(now, Some(offset)).day(), 7);
    }

    #[test]
    fn test_today_around_midnight_utc() {
        assert_eq!(today_at(utc("2023-11-07T23:59:59Z"), None).day(), 7);
        assert_eq!(today_at(utc("2023-11-08T00:00:01Z"), None).day(), 8);
    }

    #[test]
    fn test_last_7_days_including_today() {
        let resolver = DateRangeResolver::new(fixed("2023-10-10T00:00:00Z"));
        let range = resolver.resolve(DateRangeOption::Last7Days, true).unwrap();
        assert_eq!(ymd(range.from), date(2023, 10, 4));
        assert_eq!(ymd(range.to), date(2023, 10, 10));
    }

    #[test]
    fn test_last_30_days_excluding_today() {
        let resolver = DateRangeResolver::new(fixed("2023-10-10T00:00:00Z"));
        let range = resolver.resolve(DateRangeOption::Last30Days, false).unwrap();
        assert_eq!(ymd(range.to), date(2023, 10, 9));
        assert_eq!(ymd(range.from), date(2023, 9, 10));
    }

    #[test]
    fn test_last_week_sunday_start() {
        // Tuesday 2023-10-10: previous week is Sun 10-01 .. Sat 10-07.
        let resolver = DateRangeResolver::new(fixed("2023-10-10T00:00:00Z"));
        let range = resolver.resolve(DateRangeOption::LastWeek, true).unwrap();
        assert_eq!(range.from, fixed("2023-10-01T00:00:00Z"));
        assert_eq!(range.to, fixed("2023-10-07T00:00:00Z"));
    }

    #[test]
    fn test_last_week_for_monday_locale() {
        let resolver = DateRangeResolver::for_locale(fixed("2023-10-10T00:00:00Z"), Locale::De);
        let range = resolver.resolve(DateRangeOption::LastWeek, true).unwrap();
        assert_eq!(range.from, fixed("2023-10-02T00:00:00Z"));
        assert_eq!(range.to, fixed("2023-10-08T00:00:00Z"));
    }

    #[test]
    fn test_last_month_quarter_year() {
        let resolver = DateRangeResolver::new(fixed("2023-05-31T00:00:00Z"));

        let month = resolver.resolve(DateRangeOption::LastMonth, true).unwrap();
        assert_eq!(month.from, fixed("2023-04-01T00:00:00Z"));
        assert_eq!(month.to, fixed("2023-04-30T23:59:59.999Z"));

        let quarter = resolver.resolve(DateRangeOption::LastQuarter, true).unwrap();
        assert_eq!(quarter.from, fixed("2023-01-01T00:00:00Z"));
        assert_eq!(quarter.to, fixed("2023-03-31T23:59:59.999Z"));

        let year = resolver.resolve(DateRangeOption::LastYear, false).unwrap();
        assert_eq!(year.from, fixed("2022-01-01T00:00:00Z"));
        assert_eq!(year.to, fixed("2022-12-31T23:59:59.999Z"));
    }

    #[test]
    fn test_last_quarter_in_january_reaches_previous_year() {
        let resolver = DateRangeResolver::new(fixed("2024-01-15T00:00:00Z"));
        let quarter = resolver.resolve(DateRangeOption::LastQuarter, true).unwrap();
        assert_eq!(quarter.from, fixed("2023-10-01T00:00:00Z"));
        assert_eq!(quarter.to, fixed("2023-12-31T23:59:59.999Z"));
    }

    #[test]
    fn test_month_and_year_to_date() {
        let resolver = DateRangeResolver::new(fixed("2023-10-10T09:15:00Z"));
        let mtd = resolver.resolve(DateRangeOption::Mtd, true).unwrap();
        assert_eq!(mtd.from, fixed("2023-10-01T00:00:00Z"));
        assert_eq!(mtd.to, fixed("2023-10-10T09:15:00Z"));

        let ytd = resolver.resolve(DateRangeOption::Ytd, false).unwrap();
        assert_eq!(ytd.from, fixed("2023-01-01T00:00:00Z"));
        assert_eq!(ytd.to, fixed("2023-10-09T09:15:00Z"));
    }

    #[test]
    fn test_mtd_on_first_of_month_without_today_is_clamped() {
        let resolver = DateRangeResolver::new(fixed("2023-10-01T00:00:00Z"));
        let mtd = resolver.resolve(DateRangeOption::Mtd, false).unwrap();
        assert!(mtd.from <= mtd.to);
        assert_eq!(mtd.from, fixed("2023-09-30T00:00:00Z"));
        assert_eq!(mtd.to, fixed("2023-09-30T00:00:00Z"));
    }

    #[test]
    fn test_every_option_is_ordered() {
        for today in ["2023-01-01T00:00:00Z", "2024-02-29T18:00:00+09:00", "2023-12-31T23:59:59-08:00"] {
            let resolver = DateRangeResolver::new(fixed(today));
            for option in DateRangeOption::ALL {
                for enable_today in [true, false] {
                    let range = resolver.resolve(option, enable_today).unwrap();
                    assert!(range.from <= range.to, "{} {} {}", today, option, enable_today);
                }
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_last_7_days() {
        let resolver = DateRangeResolver::new(fixed("2023-10-10T00:00:00Z"));
        assert_eq!(
            resolver.resolve_key("lastCentury", true).unwrap(),
            resolver.resolve(DateRangeOption::Last7Days, true).unwrap()
        );
        assert_eq!(
            resolver.resolve_key("ytd", true).unwrap(),
            resolver.resolve(DateRangeOption::Ytd, true).unwrap()
        );
    }

    #[test]
    fn test_range_keeps_local_offset() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let today = today_at(utc("2023-10-09T20:00:00Z"), Some(offset));
        let range = DateRangeResolver::new(today)
            .resolve(DateRangeOption::Last7Days, true)
            .unwrap();
        assert_eq!(range.to, fixed("2023-10-10T00:00:00+09:00"));
        assert_eq!(range.from, fixed("2023-10-04T00:00:00+09:00"));
    }

    #[test]
    fn test_get_date_range_uses_the_clock() {
        let range = get_date_range(DateRangeOption::Last30Days, true, false).unwrap();
        assert!(range.from < range.to);
        assert_eq!((range.to - range.from).num_days(), 29);
    }
}
