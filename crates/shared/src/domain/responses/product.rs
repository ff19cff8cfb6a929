use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub category_id: Option<i32>,
    pub category_name: String,
    pub path_image: Option<String>,
    pub base_description: Option<String>,
    pub full_description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            category_id: value.category_id,
            category_name: value
                .category_name
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            path_image: value.path_image,
            base_description: value.base_description,
            full_description: value.full_description,
        }
    }
}
