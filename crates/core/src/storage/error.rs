use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// `NotFound` is the only error raised by the repository itself. Every other
/// variant carries an error reported by the underlying store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing `User` row.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            id: id.into(),
        }
    }

    /// Returns true if no matching row was found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
