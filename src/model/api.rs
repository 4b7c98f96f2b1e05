use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failing request.
///
/// `errors` is only present for validation failures.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Envelope for a single resource.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct DataDto<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Envelope for one page of a paginated collection.
///
/// `count` is the number of items in `data`, `total` the number of matching records.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub success: bool,
    pub count: u64,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub data: Vec<T>,
}

/// Envelope for a non-paginated collection.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ListDto<T> {
    pub success: bool,
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> ListDto<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len() as u64,
            data,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
