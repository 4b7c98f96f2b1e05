//! Field validation for request payloads.
//!
//! `Validator` collects every failing field before returning, so clients get
//! the complete list of problems in one response.

use chrono::{Datelike, Utc};
use url::Url;

use crate::{model::api::FieldErrorDto, server::error::validation::ValidationError};

#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldErrorDto>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldErrorDto {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Value must be non-blank and at most `max` characters.
    pub fn required(&mut self, field: &str, value: &str, max: Option<usize>) {
        if value.trim().is_empty() {
            self.error(field, format!("\"{}\" is required", field));
            return;
        }
        if let Some(max) = max {
            self.max_len(field, Some(value), max);
        }
    }

    pub fn max_len(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.error(
                    field,
                    format!("\"{}\" length must be less than or equal to {} characters long", field, max),
                );
            }
        }
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) {
        if value.chars().count() < min {
            self.error(
                field,
                format!("\"{}\" length must be at least {} characters long", field, min),
            );
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !is_email(value) {
            self.error(field, format!("\"{}\" must be a valid email", field));
        }
    }

    /// Value must be absent, empty or an absolute URI.
    pub fn uri_or_empty(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() && Url::parse(value).is_err() {
                self.error(field, format!("\"{}\" must be a valid uri", field));
            }
        }
    }

    pub fn positive(&mut self, field: &str, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.error(field, format!("\"{}\" must be a positive number", field));
        }
    }

    pub fn at_least(&mut self, field: &str, value: Option<i32>, min: i32) {
        if let Some(value) = value {
            if value < min {
                self.error(
                    field,
                    format!("\"{}\" must be greater than or equal to {}", field, min),
                );
            }
        }
    }

    /// Construction year between 1800 and five years from now.
    pub fn year_built(&mut self, field: &str, value: Option<i32>) {
        if let Some(year) = value {
            let max = Utc::now().year() + 5;
            if !(1800..=max).contains(&year) {
                self.error(
                    field,
                    format!("\"{}\" must be between 1800 and {}", field, max),
                );
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Minimal structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
