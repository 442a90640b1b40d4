use std::fmt;

/// Errors raised by the user store and the response layer.
///
/// Every variant is answered with HTTP 400 by the `ResponseError` impl in
/// `api::response`; a missing single user is `Ok(None)`, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Listing was requested while the collection holds no users
    EmptyResult,
    NotFound(String),
    DuplicateKey(String),
    MalformedInput(String),
    DatabaseError(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyResult => write!(f, "Database empty!!"),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::DuplicateKey(msg) => write!(f, "{}", msg),
            AppError::MalformedInput(msg) => write!(f, "{}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
