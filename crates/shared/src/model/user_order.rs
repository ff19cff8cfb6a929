use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserOrder {
    pub id: i32,
    pub user_id: i32,
    pub order_id: i32,
}
