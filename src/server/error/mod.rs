//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every controller. It wraps the
//! domain-specific errors and implements `IntoResponse`, so handlers can use `?` freely
//! and still produce the `{success: false, message}` envelope.

pub mod auth;
pub mod config;
pub mod mail;
pub mod validation;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` and
/// `ValidationError` map themselves to responses, the generic variants map to
/// standard status codes and everything else becomes a logged 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request body failed field validation (400 with per-field errors).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Malformed JSON body or a value outside an enumeration.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be deserialized.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Path segment could not be deserialized, e.g. a non-numeric id.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Request is not a multipart form.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// Malformed multipart upload or a body over the size limit.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Filesystem error while storing or removing uploads.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found (404) with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request (400) with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error. The message is logged, a generic one is returned.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::JsonRejection(rejection) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(rejection.body_text()))).into_response()
            }
            Self::QueryRejection(rejection) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(rejection.body_text()))).into_response()
            }
            Self::PathRejection(rejection) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(rejection.body_text()))).into_response()
            }
            Self::MultipartRejection(rejection) => {
                (rejection.status(), Json(ErrorDto::new(rejection.body_text()))).into_response()
            }
            Self::MultipartErr(err) => {
                (err.status(), Json(ErrorDto::new(err.body_text()))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response.
///
/// The client only ever sees "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
