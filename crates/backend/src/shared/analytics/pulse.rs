use chrono::{DateTime, TimeZone, Timelike};
use contracts::dashboards::d402_control_tower::LivePulse;

/// Whole minutes since local midnight, never below 1
pub fn minutes_since_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    (now.num_seconds_from_midnight() / 60).max(1)
}

/// Today's revenue spread evenly over the elapsed minutes, rounded
pub fn per_minute_rate(today_total: f64, minutes_elapsed: u32) -> f64 {
    (today_total / minutes_elapsed.max(1) as f64).round()
}

pub fn live_pulse<Tz: TimeZone>(now: &DateTime<Tz>, today_total: f64) -> LivePulse {
    let minutes_elapsed = minutes_since_midnight(now);
    LivePulse {
        minutes_elapsed,
        today_total,
        per_minute: per_minute_rate(today_total, minutes_elapsed),
    }
}
