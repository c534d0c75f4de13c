pub mod granularity;
pub mod order_status;
pub mod payment_status;
pub mod revenue_category;
pub mod time_range;
