//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 8000, message = "Content must be 1-8000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 500, message = "Summary must be 1-500 characters"))]
    pub content_summary: String,
}

/// Update thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateThreadRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 8000, message = "Content must be 1-8000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 500, message = "Summary must be 1-500 characters"))]
    pub content_summary: String,
}

/// Thread listing request (query parameters)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListThreadsRequest {
    /// Page size; defaults to 10, capped at 100
    pub limit: Option<i64>,
    /// Resumption cursor from the previous page
    pub cursor: Option<String>,
    /// Order by trending score instead of recency
    #[serde(default)]
    pub is_trending: bool,
    /// Free-text search over title/content/summary
    pub search: Option<String>,
    /// Restrict to one author's threads
    pub author_id: Option<Uuid>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Create reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Update reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_thread_validation() {
        let req = CreateThreadRequest {
            title: "a title".to_string(),
            content: "content".to_string(),
            content_summary: "summary".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = CreateThreadRequest {
            title: String::new(),
            content: "content".to_string(),
            content_summary: "summary".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_comment_content_bounds() {
        let req = CreateCommentRequest {
            content: "x".repeat(2001),
        };
        assert!(req.validate().is_err());
    }
}
