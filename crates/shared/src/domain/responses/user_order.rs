use crate::model::UserOrder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserOrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub order_id: i32,
}

impl From<UserOrder> for UserOrderResponse {
    fn from(value: UserOrder) -> Self {
        UserOrderResponse {
            id: value.id,
            user_id: value.user_id,
            order_id: value.order_id,
        }
    }
}
