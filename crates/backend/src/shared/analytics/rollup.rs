use contracts::shared::analytics::{PeriodWindows, RevenueRollup, TransactionRecord, Window};
use serde::{Deserialize, Serialize};

use super::classify::{filter_records, is_completed};

/// Fixed multipliers applied to the month total.
///
/// Configuration constants, not derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueFactors {
    pub gross_markup: f64,
    pub refund_rate: f64,
}

impl Default for RevenueFactors {
    fn default() -> Self {
        Self {
            gross_markup: 1.15,
            refund_rate: 0.03,
        }
    }
}

/// Sum and count of completed-payment records inside `window`
pub fn window_total(records: &[TransactionRecord], window: &Window) -> (f64, u64) {
    let matched = filter_records(records, window, is_completed);
    let total = matched.iter().map(|r| r.total).sum();
    (total, matched.len() as u64)
}

/// Roll completed revenue up into every reporting window.
pub fn rollup(
    records: &[TransactionRecord],
    windows: &PeriodWindows,
    factors: &RevenueFactors,
) -> RevenueRollup {
    let (today, today_orders) = window_total(records, &windows.today());
    let (yesterday, yesterday_orders) = window_total(records, &windows.yesterday());
    let (week, week_orders) = window_total(records, &windows.week());
    let (previous_week, previous_week_orders) = window_total(records, &windows.previous_week());
    let (month, month_orders) = window_total(records, &windows.month());
    let (previous_month, previous_month_orders) =
        window_total(records, &windows.previous_month());

    let refunds_total = month * factors.refund_rate;

    RevenueRollup {
        today,
        yesterday,
        week,
        previous_week,
        month,
        previous_month,
        today_orders,
        yesterday_orders,
        week_orders,
        previous_week_orders,
        month_orders,
        previous_month_orders,
        gross_revenue: month * factors.gross_markup,
        refunds_total,
        net_revenue: month - refunds_total,
        average_order_value: average(month, month_orders),
    }
}

/// Average order value, 0 without orders
pub fn average(total: f64, orders: u64) -> f64 {
    if orders == 0 {
        0.0
    } else {
        total / orders as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::classify::tests::record;
    use crate::shared::analytics::periods::resolve_windows;
    use chrono::{DateTime, Utc};
    use contracts::enums::order_status::OrderStatus;
    use contracts::enums::payment_status::PaymentStatus;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-05-20T15:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn completed(id: &str, at: &str, total: f64) -> TransactionRecord {
        record(id, Some(at), total, OrderStatus::Delivered, PaymentStatus::Completed)
    }

    #[test]
    fn test_today_and_eight_days_ago() {
        let records = vec![
            completed("today", "2025-05-20T09:00:00Z", 100.0),
            completed("old", "2025-05-12T15:00:00Z", 50.0),
        ];
        let r = rollup(&records, &resolve_windows(&now()), &RevenueFactors::default());

        assert_eq!(r.today, 100.0);
        assert_eq!(r.week, 100.0);
        assert_eq!(r.previous_week, 50.0);
        assert_eq!(r.month, 150.0);
        assert_eq!(r.today_orders, 1);
        assert_eq!(r.week_orders, 1);
    }

    #[test]
    fn test_records_after_now_are_not_counted() {
        let records = vec![
            completed("today", "2025-05-20T09:00:00Z", 100.0),
            completed("later-today", "2025-05-20T18:00:00Z", 40.0),
            completed("next-month", "2025-06-10T09:00:00Z", 900.0),
        ];
        let r = rollup(&records, &resolve_windows(&now()), &RevenueFactors::default());

        assert_eq!(r.today, 100.0);
        assert_eq!(r.week, 100.0);
        assert_eq!(r.month, 100.0);
        assert_eq!(r.today_orders, 1);
        assert_eq!(r.month_orders, 1);
    }

    #[test]
    fn test_only_completed_payments_count() {
        let records = vec![
            completed("ok", "2025-05-20T09:00:00Z", 100.0),
            record("pending", Some("2025-05-20T10:00:00Z"), 70.0, OrderStatus::Processing, PaymentStatus::Pending),
            record("failed", Some("2025-05-20T11:00:00Z"), 30.0, OrderStatus::Cancelled, PaymentStatus::Failed),
            record("refunded", Some("2025-05-19T11:00:00Z"), 20.0, OrderStatus::Cancelled, PaymentStatus::Refunded),
            record("undated", None, 500.0, OrderStatus::Delivered, PaymentStatus::Completed),
        ];
        let r = rollup(&records, &resolve_windows(&now()), &RevenueFactors::default());

        assert_eq!(r.today, 100.0);
        assert_eq!(r.yesterday, 0.0);
        assert_eq!(r.month, 100.0);
        assert_eq!(r.month_orders, 1);
    }

    #[test]
    fn test_previous_windows() {
        let records = vec![
            completed("yesterday", "2025-05-19T23:59:59Z", 5.0),
            completed("week-edge", "2025-05-13T00:00:00Z", 7.0),
            completed("prev-week", "2025-05-12T23:59:59Z", 11.0),
            completed("prev-week-edge", "2025-05-06T00:00:00Z", 13.0),
            completed("month-edge", "2025-04-20T00:00:00Z", 17.0),
            completed("prev-month", "2025-04-19T12:00:00Z", 19.0),
            completed("prev-month-edge", "2025-03-20T00:00:00Z", 23.0),
            completed("too-old", "2025-03-19T23:59:59Z", 29.0),
        ];
        let r = rollup(&records, &resolve_windows(&now()), &RevenueFactors::default());

        assert_eq!(r.today, 0.0);
        assert_eq!(r.yesterday, 5.0);
        assert_eq!(r.week, 12.0);
        assert_eq!(r.previous_week, 24.0);
        assert_eq!(r.month, 5.0 + 7.0 + 11.0 + 13.0 + 17.0);
        assert_eq!(r.previous_month, 42.0);
        assert_eq!(r.previous_month_orders, 2);
    }

    #[test]
    fn test_derived_revenue_figures() {
        let records = vec![
            completed("a", "2025-05-18T09:00:00Z", 600.0),
            completed("b", "2025-05-01T09:00:00Z", 400.0),
        ];
        let factors = RevenueFactors::default();
        let r = rollup(&records, &resolve_windows(&now()), &factors);

        assert_eq!(r.month, 1000.0);
        assert!((r.gross_revenue - 1150.0).abs() < 1e-9);
        assert!((r.refunds_total - 30.0).abs() < 1e-9);
        assert!((r.net_revenue - 970.0).abs() < 1e-9);
        assert_eq!(r.average_order_value, 500.0);
    }

    #[test]
    fn test_factors_are_overridable() {
        let records = vec![completed("a", "2025-05-18T09:00:00Z", 200.0)];
        let factors = RevenueFactors {
            gross_markup: 1.5,
            refund_rate: 0.1,
        };
        let r = rollup(&records, &resolve_windows(&now()), &factors);
        assert!((r.gross_revenue - 300.0).abs() < 1e-9);
        assert!((r.refunds_total - 20.0).abs() < 1e-9);
        assert!((r.net_revenue - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let r = rollup(&[], &resolve_windows(&now()), &RevenueFactors::default());
        assert_eq!(r, RevenueRollup::default());
    }
}
