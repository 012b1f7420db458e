//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients, an integer for logs
//! and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Query string could not be parsed
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// HTTP method is not routed for this path
    MethodNotAllowed,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// JSON serialization failed while building a response
    SerdeJsonError,

    // Database errors (2000-2999)
    /// Database query returned no results
    DatabaseNotFound,

    /// Could not open or talk to the database file
    DatabaseConnection,

    /// A statement failed to execute
    DatabaseQuery,

    /// No pooled connection became available in time
    DatabasePoolTimeout,

    /// Catch-all for database errors without a dedicated code
    DatabaseUnhandled,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
            ErrorCode::DatabaseNotFound => "DATABASE_NOT_FOUND",
            ErrorCode::DatabaseConnection => "DATABASE_CONNECTION",
            ErrorCode::DatabaseQuery => "DATABASE_QUERY",
            ErrorCode::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
            ErrorCode::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Integer code for logs and dashboards
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidQuery => 1002,
            ErrorCode::NotFound => 1004,
            ErrorCode::MethodNotAllowed => 1005,
            ErrorCode::JsonExtraction => 1009,
            ErrorCode::InternalError => 1010,
            ErrorCode::ServiceUnavailable => 1011,
            ErrorCode::SerdeJsonError => 1012,
            ErrorCode::DatabaseNotFound => 2001,
            ErrorCode::DatabaseConnection => 2002,
            ErrorCode::DatabaseQuery => 2003,
            ErrorCode::DatabasePoolTimeout => 2013,
            ErrorCode::DatabaseUnhandled => 2099,
        }
    }

    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidQuery => "Invalid query parameters",
            ErrorCode::NotFound => "The requested resource was not found",
            ErrorCode::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            ErrorCode::JsonExtraction => "Failed to parse JSON request body",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
            ErrorCode::SerdeJsonError => "Failed to serialize response",
            ErrorCode::DatabaseNotFound => "Record not found",
            ErrorCode::DatabaseConnection => "Database connection error",
            ErrorCode::DatabaseQuery => "Database query failed",
            ErrorCode::DatabasePoolTimeout => "Database is busy, please retry",
            ErrorCode::DatabaseUnhandled => "An unexpected database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
