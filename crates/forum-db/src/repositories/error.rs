//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Convert a begin/commit/rollback failure to a transaction error
pub fn map_tx_error(e: SqlxError) -> DomainError {
    DomainError::TransactionFailure(e.to_string())
}

/// Create a "thread not found" error
pub fn thread_not_found(id: Uuid) -> DomainError {
    DomainError::ThreadNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Uuid) -> DomainError {
    DomainError::CommentNotFound(id)
}

/// Create a "reply not found" error
pub fn reply_not_found(id: Uuid) -> DomainError {
    DomainError::ReplyNotFound(id)
}
