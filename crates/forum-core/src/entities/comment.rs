//! Comment and reply entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{Actor, ReactionAction};

/// Comment on a thread
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadComment {
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

impl ThreadComment {
    /// Create a new comment by `actor` on `thread_id`
    pub fn new(thread_id: Uuid, actor: &Actor, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            thread_id,
            author_id: actor.id,
            content: content.into(),
            like_count: 0,
            dislike_count: 0,
            reply_count: 0,
            created_by: actor.email.clone(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, actor_id: Uuid) -> bool {
        self.author_id == actor_id
    }
}

/// Reply to a comment
#[derive(Debug, Clone, PartialEq)]
pub struct CommentReply {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub comment_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CommentReply {
    /// Create a new reply by `actor` under `comment_id`
    pub fn new(
        thread_id: Uuid,
        comment_id: Uuid,
        actor: &Actor,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            thread_id,
            comment_id,
            author_id: actor.id,
            content: content.into(),
            like_count: 0,
            dislike_count: 0,
            created_by: actor.email.clone(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    #[inline]
    pub fn is_authored_by(&self, actor_id: Uuid) -> bool {
        self.author_id == actor_id
    }
}

/// Comment listing row with the viewer's reaction and nested replies
#[derive(Debug, Clone, PartialEq)]
pub struct CommentListItem {
    pub comment: ThreadComment,
    pub viewer_action: Option<ReactionAction>,
    pub replies: Vec<ReplyListItem>,
}

/// Reply listing row with the viewer's reaction
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyListItem {
    pub reply: CommentReply,
    pub viewer_action: Option<ReactionAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_has_zero_counters() {
        let actor = Actor::new(Uuid::new_v4(), "a@example.com", "a");
        let comment = ThreadComment::new(Uuid::new_v4(), &actor, "hello");
        assert_eq!(comment.like_count, 0);
        assert_eq!(comment.reply_count, 0);
        assert!(comment.is_authored_by(actor.id));
    }

    #[test]
    fn test_reply_links_comment_and_thread() {
        let actor = Actor::new(Uuid::new_v4(), "a@example.com", "a");
        let thread_id = Uuid::new_v4();
        let comment_id = Uuid::new_v4();
        let reply = CommentReply::new(thread_id, comment_id, &actor, "hi");
        assert_eq!(reply.thread_id, thread_id);
        assert_eq!(reply.comment_id, comment_id);
    }
}
