//! Typed error handling for the dashboard engines
//!
//! The table query engine never fails on well-typed input, so every error
//! here comes from one of three boundaries:
//!
//! - [`ChartError`]: precondition violations rejected by the donut layout
//! - [`ConfigError`]: configuration parsing and validation
//! - [`StoreError`]: loading records into a store
//!
//! All of them convert into [`DashboardError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use dashboard::prelude::*;
//!
//! match DonutLayoutEngine::layout(&spec) {
//!     Ok(arcs) => render(arcs),
//!     Err(ChartError::NegativeValue { index, .. }) => {
//!         eprintln!("segment {} has a negative value", index);
//!     }
//!     Err(e) => eprintln!("cannot draw chart: {}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for the dashboard crate
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Donut chart input was rejected
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Record store errors
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error response structure for callers that surface errors as JSON
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DashboardError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Chart(e) => e.error_code(),
            DashboardError::Config(e) => e.error_code(),
            DashboardError::Store(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DashboardError::Chart(ChartError::NegativeValue { index, value }) => {
                Some(serde_json::json!({ "index": index, "value": value }))
            }
            DashboardError::Config(ConfigError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            DashboardError::Store(StoreError::DuplicateId { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Chart Errors
// =============================================================================

/// Precondition violations rejected by the donut layout engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A segment carries a negative weight
    #[error("Segment {index} has negative value {value}")]
    NegativeValue { index: usize, value: f64 },

    /// A segment weight is NaN or infinite
    #[error("Segment {index} has a non-finite value")]
    NonFiniteValue { index: usize },

    /// Gap angle is negative or not a number
    #[error("Invalid segment gap: {degrees} degrees")]
    InvalidGap { degrees: f64 },

    /// The gaps alone consume the whole circle
    #[error("Gaps of {total_gap_degrees} degrees leave no room for {segment_count} segments")]
    GapExceedsCircle {
        total_gap_degrees: f64,
        segment_count: usize,
    },

    /// Canvas, margin and stroke leave no drawable ring
    #[error("Invalid chart dimensions: {message}")]
    InvalidDimensions { message: String },
}

impl ChartError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ChartError::NegativeValue { .. } => "CHART_NEGATIVE_VALUE",
            ChartError::NonFiniteValue { .. } => "CHART_NON_FINITE_VALUE",
            ChartError::InvalidGap { .. } => "CHART_INVALID_GAP",
            ChartError::GapExceedsCircle { .. } => "CHART_GAP_EXCEEDS_CIRCLE",
            ChartError::InvalidDimensions { .. } => "CHART_INVALID_DIMENSIONS",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// One or more fields failed validation
    #[error("Validation errors: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::FieldErrors(_) => "CONFIG_VALIDATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ConfigError::FieldErrors(fields)
    }
}

fn collect_field_errors(
    prefix: &str,
    errors: &validator::ValidationErrors,
    out: &mut Vec<FieldValidationError>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    out.push(FieldValidationError {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (i, inner) in items {
                    collect_field_errors(&format!("{}[{}]", path, i), inner, out);
                }
            }
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised while loading records into a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two records share the same id
    #[error("Duplicate record id '{id}'")]
    DuplicateId { id: String },

    /// Record payload could not be decoded
    #[error("Failed to decode records: {message}")]
    Decode { message: String },
}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::DuplicateId { .. } => "STORE_DUPLICATE_ID",
            StoreError::Decode { .. } => "STORE_DECODE_ERROR",
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
