//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_core::ReactionAction;
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Thread Responses
// ============================================================================

/// Thread detail/listing row
#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub content_summary: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub comment_count: i64,
    /// Present only in trending-ordered listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f64>,
    /// The viewer's active reaction, if any
    pub viewer_action: Option<ReactionAction>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Thread listing page
#[derive(Debug, Clone, Serialize)]
pub struct ThreadListResponse {
    pub items: Vec<ThreadResponse>,
    /// Absent when the listing is exhausted
    pub next_cursor: Option<String>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with nested replies
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub reply_count: i64,
    pub viewer_action: Option<ReactionAction>,
    pub replies: Vec<ReplyResponse>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reply row
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub comment_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub viewer_action: Option<ReactionAction>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
