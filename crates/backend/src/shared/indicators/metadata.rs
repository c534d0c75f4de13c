use contracts::shared::indicators::*;

pub const CURRENCY: &str = "$";

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn revenue() -> IndicatorId {
        IndicatorId::new("revenue")
    }
    pub fn order_count() -> IndicatorId {
        IndicatorId::new("order_count")
    }
    pub fn avg_order_value() -> IndicatorId {
        IndicatorId::new("avg_order_value")
    }
    pub fn net_revenue() -> IndicatorId {
        IndicatorId::new("net_revenue")
    }
    pub fn refunds() -> IndicatorId {
        IndicatorId::new("refunds")
    }
}

/// Display label and value format of a KPI card
pub fn describe(id: &IndicatorId) -> (&'static str, ValueFormat) {
    let money = || ValueFormat::Money {
        currency: CURRENCY.into(),
    };
    match id.0.as_str() {
        "revenue" => ("Revenue", money()),
        "order_count" => ("Orders", ValueFormat::Integer),
        "avg_order_value" => ("Avg. order value", money()),
        "net_revenue" => ("Net revenue", money()),
        "refunds" => ("Refunds", money()),
        _ => ("Unknown", ValueFormat::Number { decimals: 2 }),
    }
}
