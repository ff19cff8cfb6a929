use crate::errors::HttpError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform result of every service operation.
///
/// `data` is only populated on success. The transport layer never looks at the
/// payload type, only at `success` and `status_code`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub status_code: u16,
    pub message: String,
    pub success: bool,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            status_code: 200,
            message: String::new(),
            success: true,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status_code: 200,
            message: message.into(),
            success: true,
        }
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status_code: 201,
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            data: None,
            status_code,
            message: message.into(),
            success: false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        !self.success && self.status_code == 404
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            return HttpError::NotFound(self.message).into_response();
        }

        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_envelope_is_successful() {
        let response: ApiResponse<()> = ApiResponse::default();
        assert!(response.success);
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn serializes_with_camel_case_keys_and_null_data_on_failure() {
        let response: ApiResponse<i32> = ApiResponse::failure(400, "Invalid category");

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "data": null,
                "statusCode": 400,
                "message": "Invalid category",
                "success": false
            })
        );
    }

    #[test]
    fn not_found_maps_to_http_404() {
        let response: ApiResponse<i32> = ApiResponse::failure(404, "Product not found");
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn created_maps_to_http_201() {
        let response = ApiResponse::created(7, "Product created");
        assert_eq!(response.into_response().status(), StatusCode::CREATED);
    }

    #[test]
    fn unexpected_failures_keep_their_code() {
        let response: ApiResponse<i32> = ApiResponse::failure(500, "An unexpected error occurred");
        assert_eq!(
            response.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
