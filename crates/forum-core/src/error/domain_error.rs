//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Thread not found: {0}")]
    ThreadNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Uuid),

    // =========================================================================
    // Cursor Errors
    // =========================================================================
    #[error("Malformed cursor")]
    MalformedCursor,

    #[error("Cursor does not match the requested ordering")]
    CursorModeMismatch,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not thread author")]
    NotThreadAuthor,

    #[error("Not comment author")]
    NotCommentAuthor,

    #[error("Not reply author")]
    NotReplyAuthor,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Transaction failure: {0}")]
    TransactionFailure(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",

            // Cursor
            Self::MalformedCursor => "MALFORMED_CURSOR",
            Self::CursorModeMismatch => "CURSOR_MODE_MISMATCH",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::NotThreadAuthor => "NOT_THREAD_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotReplyAuthor => "NOT_REPLY_AUTHOR",

            // Infrastructure
            Self::TransactionFailure(_) => "TRANSACTION_FAILURE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ThreadNotFound(_) | Self::CommentNotFound(_) | Self::ReplyNotFound(_)
        )
    }

    /// Check if this is a validation error (maps to a 400 response)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MalformedCursor | Self::CursorModeMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotThreadAuthor | Self::NotCommentAuthor | Self::NotReplyAuthor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ThreadNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_THREAD");

        let err = DomainError::MalformedCursor;
        assert_eq!(err.code(), "MALFORMED_CURSOR");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ThreadNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::ReplyNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::MalformedCursor.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::MalformedCursor.is_validation());
        assert!(DomainError::CursorModeMismatch.is_validation());
        assert!(!DomainError::NotThreadAuthor.is_validation());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotCommentAuthor.is_authorization());
        assert!(!DomainError::DatabaseError("x".to_string()).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let id = Uuid::nil();
        let err = DomainError::ThreadNotFound(id);
        assert_eq!(err.to_string(), format!("Thread not found: {id}"));
    }
}
