/// Core error types for Encore
use crate::validate::ValidationError;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Encore
#[derive(Error, Debug)]
pub enum CoreError {
    /// No (or more than one) property mapping registered for the requested
    /// type pair. A misconfiguration, not user-triggerable.
    #[error("no property mapping registered for the requested type pair")]
    MappingNotFound,

    /// Order-by clause references a field with no registered mapping
    #[error("sort field is not mapped: {0}")]
    InvalidSortField(String),

    /// Projection list references a field the type does not have
    #[error("{0} was not found")]
    UnknownField(String),

    /// One or more request fields failed validation
    #[error("validation failed")]
    Validation(Vec<ValidationError>),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database errors (for storage implementations)
    #[error("database error: {0}")]
    Database(String),
}

impl CoreError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
