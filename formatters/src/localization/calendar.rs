// Calendar boundaries on fixed-offset instants.
// Every helper keeps the input's offset; `None` only on chrono range overflow.
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveTime, TimeZone, Weekday,
};

fn at(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&date.and_time(time)).single()
}

fn midnight(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    at(date, NaiveTime::MIN, offset)
}

fn last_millisecond(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    at(date, NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?, offset)
}

pub fn add_days(dt: DateTime<FixedOffset>, days: i64) -> Option<DateTime<FixedOffset>> {
    dt.checked_add_signed(Duration::days(days))
}

// Clamps the day of month like month arithmetic on a wall calendar (Mar 31 - 1mo = Feb 28/29).
pub fn sub_months(dt: DateTime<FixedOffset>, months: u32) -> Option<DateTime<FixedOffset>> {
    dt.checked_sub_months(Months::new(months))
}

pub fn start_of_day(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    midnight(dt.date_naive(), *dt.offset())
}

pub fn start_of_week(dt: DateTime<FixedOffset>, week_start: Weekday) -> Option<DateTime<FixedOffset>> {
    let back = (7 + dt.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let date = dt.date_naive().checked_sub_signed(Duration::days(i64::from(back)))?;
    midnight(date, *dt.offset())
}

pub fn start_of_month(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    midnight(dt.date_naive().with_day(1)?, *dt.offset())
}

pub fn end_of_month(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let first = dt.date_naive().with_day(1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    last_millisecond(last, *dt.offset())
}

fn first_of_quarter(date: NaiveDate) -> Option<NaiveDate> {
    let month = date.month0() / 3 * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1)
}

pub fn start_of_quarter(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    midnight(first_of_quarter(dt.date_naive())?, *dt.offset())
}

pub fn end_of_quarter(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let first = first_of_quarter(dt.date_naive())?;
    let last = first.checked_add_months(Months::new(3))?.pred_opt()?;
    last_millisecond(last, *dt.offset())
}

pub fn start_of_year(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    midnight(NaiveDate::from_ymd_opt(dt.year(), 1, 1)?, *dt.offset())
}

pub fn end_of_year(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    last_millisecond(NaiveDate::from_ymd_opt(dt.year(), 12, 31)?, *dt.offset())
}
