//! Activity ledger database models
//!
//! Thread reactions live in thread_activity; comment and reply reactions
//! share thread_comment_activity, discriminated by thread_comment_reply_id.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the thread_activity table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadActivityModel {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub actor_id: Uuid,
    pub actor_email: String,
    pub actor_username: String,
    pub action: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Database model for the thread_comment_activity table
#[derive(Debug, Clone, FromRow)]
pub struct CommentActivityModel {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub thread_comment_id: Uuid,
    /// NULL for comment rows, set for reply rows
    pub thread_comment_reply_id: Option<Uuid>,
    pub actor_id: Uuid,
    pub actor_email: String,
    pub actor_username: String,
    pub action: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
