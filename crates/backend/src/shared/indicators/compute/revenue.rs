use contracts::enums::time_range::TimeRange;
use contracts::shared::analytics::RevenueRollup;
use contracts::shared::indicators::*;

use crate::shared::analytics::delta::{delta_percent, status_by_change};
use crate::shared::analytics::rollup::{average, RevenueFactors};
use crate::shared::indicators::metadata::{describe, ids};

/// Current and previous figures of the selected time range
struct RangePair {
    revenue: (f64, f64),
    orders: (u64, u64),
}

fn range_pair(rollup: &RevenueRollup, range: TimeRange) -> RangePair {
    match range {
        TimeRange::Today => RangePair {
            revenue: (rollup.today, rollup.yesterday),
            orders: (rollup.today_orders, rollup.yesterday_orders),
        },
        TimeRange::Week => RangePair {
            revenue: (rollup.week, rollup.previous_week),
            orders: (rollup.week_orders, rollup.previous_week_orders),
        },
        TimeRange::Month => RangePair {
            revenue: (rollup.month, rollup.previous_month),
            orders: (rollup.month_orders, rollup.previous_month_orders),
        },
    }
}

fn card(id: IndicatorId, value: f64, previous_value: f64, higher_is_good: bool) -> IndicatorValue {
    let (label, format) = describe(&id);
    let change_percent = delta_percent(value, previous_value);
    IndicatorValue {
        id,
        label: label.to_string(),
        format,
        value,
        previous_value,
        change_percent,
        status: status_by_change(change_percent, higher_is_good),
        subtitle: None,
    }
}

/// KPI cards for the control tower header, in display order.
///
/// Revenue, orders and average order value follow the selected time range;
/// net revenue and refunds always compare month against previous month.
pub fn build_indicators(
    rollup: &RevenueRollup,
    range: TimeRange,
    factors: &RevenueFactors,
) -> Vec<IndicatorValue> {
    let pair = range_pair(rollup, range);
    let (revenue, prev_revenue) = pair.revenue;
    let (orders, prev_orders) = pair.orders;

    let prev_refunds = rollup.previous_month * factors.refund_rate;
    let prev_net = rollup.previous_month - prev_refunds;

    let mut revenue_card = card(ids::revenue(), revenue, prev_revenue, true);
    revenue_card.subtitle = Some(range.display_name().to_string());

    vec![
        revenue_card,
        card(ids::order_count(), orders as f64, prev_orders as f64, true),
        card(
            ids::avg_order_value(),
            average(revenue, orders),
            average(prev_revenue, prev_orders),
            true,
        ),
        card(ids::net_revenue(), rollup.net_revenue, prev_net, true),
        card(ids::refunds(), rollup.refunds_total, prev_refunds, false),
    ]
}
