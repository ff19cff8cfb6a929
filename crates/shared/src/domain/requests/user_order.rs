use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOrderRequest {
    #[validate(range(min = 1, message = "The user id is required"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "The order id is required"))]
    pub order_id: i32,
}
