use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::order_status::OrderStatus;
use crate::enums::payment_status::PaymentStatus;

/// One commerce transaction as read from the record store.
///
/// Records are immutable snapshots: analytics only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    /// `None` when the source row carries no usable timestamp.
    /// Such records never fall into any time window.
    pub created_at: Option<DateTime<Utc>>,
    /// Order total, non-negative
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}

/// One geographic performance bucket for the reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub name: String,
    pub country: String,
    pub continent: String,
    pub category: String,
    pub seller_type: String,
    pub shipping_mode: String,
    pub sales: f64,
    pub orders: u64,
    pub users: u64,
    pub buyers: u64,
    pub sellers: u64,
    /// Signed growth against the previous period, in percent
    pub growth_pct: f64,
    pub conversion_rate_pct: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Account counters shown on the control tower header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCounts {
    pub buyers: u64,
    pub sellers: u64,
    pub pending_kyc: u64,
    pub active_disputes: u64,
    pub pending_payouts: u64,
}
