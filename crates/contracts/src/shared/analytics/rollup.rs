use serde::{Deserialize, Serialize};

use crate::enums::order_status::OrderStatus;

/// Completed-payment revenue summed per reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueRollup {
    pub today: f64,
    pub yesterday: f64,
    pub week: f64,
    pub previous_week: f64,
    pub month: f64,
    pub previous_month: f64,

    pub today_orders: u64,
    pub yesterday_orders: u64,
    pub week_orders: u64,
    pub previous_week_orders: u64,
    pub month_orders: u64,
    pub previous_month_orders: u64,

    /// `month * gross_markup`
    pub gross_revenue: f64,
    /// `month * refund_rate`
    pub refunds_total: f64,
    /// `month - refunds_total`
    pub net_revenue: f64,
    /// `month / month_orders`, 0 without orders
    pub average_order_value: f64,
}

/// Number of orders in one fulfilment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}
