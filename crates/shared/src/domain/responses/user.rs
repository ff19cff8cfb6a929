use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outward view of a user. The password never leaves the service layer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}
