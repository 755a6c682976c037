//! Thread database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the thread table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub content_summary: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub comment_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Listing row: thread columns plus the read-time extras the listing query
/// selects (trending score subquery, viewer's ledger action)
#[derive(Debug, Clone, FromRow)]
pub struct ThreadListRowModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub content_summary: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub comment_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub trending_score: Option<f64>,
    pub viewer_action: Option<String>,
}
