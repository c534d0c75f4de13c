use contracts::shared::indicators::IndicatorStatus;

/// Change beyond which a card turns good/bad, percent
pub const STATUS_THRESHOLD_PCT: f64 = 5.0;

/// Signed percentage change from `previous` to `current`, one decimal.
///
/// Zero when `previous` is zero: callers never see infinity or NaN.
pub fn delta_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    round_to(((current - previous) / previous) * 100.0, 1)
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn status_by_change(change: f64, higher_is_good: bool) -> IndicatorStatus {
    if change > STATUS_THRESHOLD_PCT {
        if higher_is_good {
            IndicatorStatus::Good
        } else {
            IndicatorStatus::Bad
        }
    } else if change < -STATUS_THRESHOLD_PCT {
        if higher_is_good {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Good
        }
    } else {
        IndicatorStatus::Neutral
    }
}
