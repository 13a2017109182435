//! Typed error handling for the installer directory
//!
//! Errors are grouped by concern and aggregated into [`DirectoryError`], so
//! callers can match the specific failure instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`QueryError`]: malformed query parameters (unknown sort key or skill level, bad query string)
//! - [`AssignmentError`]: image assignment against an empty pool
//! - [`CatalogError`]: record lookup and ingestion failures
//! - [`ValidationError`]: quote form validation and unreadable request bodies
//! - [`ConfigError`]: configuration parsing and validation
//! - [`GalleryError`]: portfolio navigation out of range
//!
//! # Example
//!
//! ```rust,ignore
//! match catalog.get("installer-99") {
//!     Ok(installer) => println!("Found: {}", installer.name),
//!     Err(DirectoryError::Catalog(CatalogError::NotFound { id })) => {
//!         println!("Installer {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// The main error type for the installer directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

/// Error response structure for HTTP responses
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

impl DirectoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::Query(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Assignment(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryError::Catalog(e) => e.status_code(),
            DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryError::Gallery(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DirectoryError::Query(e) => e.error_code(),
            DirectoryError::Assignment(_) => "EMPTY_IMAGE_POOL",
            DirectoryError::Catalog(e) => e.error_code(),
            DirectoryError::Validation(e) => e.error_code(),
            DirectoryError::Config(_) => "CONFIG_ERROR",
            DirectoryError::Gallery(_) => "GALLERY_OUT_OF_RANGE",
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
            DirectoryError::Catalog(CatalogError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            DirectoryError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Malformed query parameters
///
/// These are integration bugs on the caller side and are never silently
/// replaced by a default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key '{value}' (expected one of: {expected})")]
    UnknownSortKey { value: String, expected: String },

    #[error("Unknown skill level '{value}' (expected 'all' or one of: {expected})")]
    UnknownSkillLevel { value: String, expected: String },

    #[error("Malformed query string: {message}")]
    Malformed { message: String },
}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::UnknownSortKey { .. } => "UNKNOWN_SORT_KEY",
            QueryError::UnknownSkillLevel { .. } => "UNKNOWN_SKILL_LEVEL",
            QueryError::Malformed { .. } => "MALFORMED_QUERY",
        }
    }
}

// =============================================================================
// Assignment Errors
// =============================================================================

/// Image assignment failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("Cannot assign from an empty pool{}", pool_label(.pool))]
    EmptyPool { pool: Option<String> },
}

fn pool_label(pool: &Option<String>) -> String {
    pool.as_ref()
        .map(|name| format!(" '{}'", name))
        .unwrap_or_default()
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors related to the installer catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Installer with id '{id}' not found")]
    NotFound { id: String },

    #[error("Duplicate installer id '{id}'")]
    DuplicateId { id: String },

    #[error("Invalid installer record '{id}': {message}")]
    InvalidRecord { id: String, message: String },

    #[error("Failed to load installers from {source_name}: {message}")]
    LoadFailed {
        source_name: String,
        message: String,
    },
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::DuplicateId { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::InvalidRecord { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::LoadFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "INSTALLER_NOT_FOUND",
            CatalogError::DuplicateId { .. } => "DUPLICATE_INSTALLER_ID",
            CatalogError::InvalidRecord { .. } => "INVALID_INSTALLER_RECORD",
            CatalogError::LoadFailed { .. } => "CATALOG_LOAD_FAILED",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field errors, keyed by field name in form order
    #[error("Validation failed: {}", summarize(.0))]
    FieldErrors(IndexMap<String, String>),

    /// Body could not be read as the expected JSON document
    #[error("Invalid request body: {message}")]
    MalformedBody { message: String },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::MalformedBody { .. } => "INVALID_REQUEST_BODY",
        }
    }

    /// Look up the message recorded for a field
    pub fn message_for(&self, field: &str) -> Option<&str> {
        match self {
            ValidationError::FieldErrors(errors) => errors.get(field).map(String::as_str),
            ValidationError::MalformedBody { .. } => None,
        }
    }
}

fn summarize(errors: &IndexMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}", parse_message(.file, .message))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

fn parse_message(file: &Option<String>, message: &str) -> String {
    match file {
        Some(file) => format!("Failed to parse config file '{}': {}", file, message),
        None => format!("Failed to parse config: {}", message),
    }
}

// =============================================================================
// Gallery Errors
// =============================================================================

/// Portfolio gallery navigation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Image index {index} out of range for a gallery of {len} images")]
    OutOfRange { index: usize, len: usize },
}
