use chrono::{DateTime, Days, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use contracts::shared::analytics::PeriodWindows;

/// Resolve every reporting boundary from one reference instant.
///
/// Days are local calendar days in the time zone of `now`. Week and month
/// boundaries use calendar subtraction from the start of today; a month back
/// from a day that does not exist in the earlier month is clamped to that
/// month's last day (Mar 31 -> Feb 28/29). Two months back is taken from
/// today directly, never chained through one month back.
pub fn resolve_windows<Tz: TimeZone>(now: &DateTime<Tz>) -> PeriodWindows {
    let tz = now.timezone();
    let today = now.date_naive();

    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN);
    let week_ago = today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
    let two_weeks_ago = today.checked_sub_days(Days::new(14)).unwrap_or(NaiveDate::MIN);
    let month_ago = today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN);
    let two_months_ago = today.checked_sub_months(Months::new(2)).unwrap_or(NaiveDate::MIN);

    PeriodWindows {
        now: now.with_timezone(&Utc),
        today_start: local_midnight(&tz, today),
        yesterday_start: local_midnight(&tz, yesterday),
        week_ago: local_midnight(&tz, week_ago),
        two_weeks_ago: local_midnight(&tz, two_weeks_ago),
        month_ago: local_midnight(&tz, month_ago),
        two_months_ago: local_midnight(&tz, two_months_ago),
    }
}

/// First instant of `date` in `tz`.
///
/// When a DST jump skips midnight the day starts at the first valid
/// local time after the gap.
pub(crate) fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
