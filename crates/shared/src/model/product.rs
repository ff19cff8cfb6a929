use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product row joined with the name of its category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub base_description: Option<String>,
    pub full_description: Option<String>,
    pub path_image: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}
