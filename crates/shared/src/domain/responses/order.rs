use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_UNAVAILABLE: &str = "Status unavailable";

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub status_id: i32,
    pub status: String,
    pub value: Decimal,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            status_id: value.status_id,
            status: value
                .status_name
                .unwrap_or_else(|| STATUS_UNAVAILABLE.to_string()),
            value: value.value,
        }
    }
}
