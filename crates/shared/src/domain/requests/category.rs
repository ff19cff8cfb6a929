use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[validate(length(min = 1, message = "Please provide the category name"))]
    #[schema(example = "Burgers")]
    pub name: String,

    #[validate(length(min = 6, max = 150, message = "Description must be between 6 and 150 characters"))]
    #[schema(example = "Beef burgers")]
    pub description: String,

    #[validate(length(min = 1, message = "The image path is required"))]
    #[schema(example = "/img/b.png")]
    pub path_image: String,
}
