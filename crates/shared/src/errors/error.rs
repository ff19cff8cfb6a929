use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Body sent with HTTP 404.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub errors: String,
}

/// Body sent with HTTP 400 when a request body is rejected before the services.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}
