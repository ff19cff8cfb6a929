use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(length(min = 5, max = 100, message = "Name must be between 5 and 100 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[validate(
        email(message = "Please provide a valid email address"),
        length(max = 50, message = "Email must be at most 50 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    pub password: String,
}
