use crate::model::OrderLine;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(value: OrderLine) -> Self {
        OrderLineResponse {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
        }
    }
}
