use crate::errors::error::{ErrorResponse, ValidationErrorResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(BTreeMap<String, Vec<String>>),
    NotFound(String),
}

impl HttpError {
    pub fn malformed_body(message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("body".to_string(), vec![message.into()]);
        HttpError::BadRequest(errors)
    }

    pub fn malformed_path(message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("path".to_string(), vec![message.into()]);
        HttpError::BadRequest(errors)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::BadRequest(errors) => {
                let body = Json(ValidationErrorResponse {
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    errors,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            HttpError::NotFound(message) => {
                let body = Json(ErrorResponse {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    errors: message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
