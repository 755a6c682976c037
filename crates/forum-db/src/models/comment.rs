//! Comment and reply database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the thread_comment table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub reply_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Database model for the thread_comment_reply table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub thread_comment_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Comment listing row with the viewer's ledger action
#[derive(Debug, Clone, FromRow)]
pub struct CommentListRowModel {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub reply_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub viewer_action: Option<String>,
}

/// Reply listing row with the viewer's ledger action
#[derive(Debug, Clone, FromRow)]
pub struct ReplyListRowModel {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub thread_comment_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub viewer_action: Option<String>,
}
