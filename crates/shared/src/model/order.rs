use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order row joined with the name of its status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub status_id: i32,
    pub value: Decimal,
    pub status_name: Option<String>,
}
