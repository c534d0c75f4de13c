use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Half-open time interval `[start, end)`; `end = None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl Window {
    pub fn since(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && self.end.map_or(true, |end| *instant < end)
    }
}

/// Boundary instants of the reporting windows, resolved from one reference `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWindows {
    pub now: DateTime<Utc>,
    /// Local midnight of the reference day
    pub today_start: DateTime<Utc>,
    pub yesterday_start: DateTime<Utc>,
    /// Seven calendar days before `today_start`
    pub week_ago: DateTime<Utc>,
    pub two_weeks_ago: DateTime<Utc>,
    /// Same day-of-month one month before `today_start` (clamped to month end)
    pub month_ago: DateTime<Utc>,
    pub two_months_ago: DateTime<Utc>,
}

impl PeriodWindows {
    /// `[today_start, now)`
    pub fn today(&self) -> Window {
        Window::between(self.today_start, self.now)
    }

    pub fn yesterday(&self) -> Window {
        Window::between(self.yesterday_start, self.today_start)
    }

    pub fn week(&self) -> Window {
        Window::between(self.week_ago, self.now)
    }

    pub fn previous_week(&self) -> Window {
        Window::between(self.two_weeks_ago, self.week_ago)
    }

    pub fn month(&self) -> Window {
        Window::between(self.month_ago, self.now)
    }

    pub fn previous_month(&self) -> Window {
        Window::between(self.two_months_ago, self.month_ago)
    }
}
