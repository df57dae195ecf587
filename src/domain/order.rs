use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::pricing::LineItem;

/// One line of an incoming order: which dish, priced how. The pricing part
/// is a validated `LineItem`, so anything reaching the repository has
/// already passed the boundary checks.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub dish_id: Uuid,
    pub pricing: LineItem,
}

#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: Uuid,
    pub dish_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub discount_percent: Option<BigDecimal>,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_sum: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLineView>,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<OrderView>,
    pub total: i64,
}
