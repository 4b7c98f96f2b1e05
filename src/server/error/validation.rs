use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto};

/// One or more request fields failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldErrorDto>,
}

fn summary(errors: &[FieldErrorDto]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Builds an error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldErrorDto {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(self.errors),
            }),
        )
            .into_response()
    }
}
