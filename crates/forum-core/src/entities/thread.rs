//! Thread entity - a top-level forum post

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{Actor, ReactionAction};

/// Thread entity
///
/// Counters are denormalized and mutated only through atomic
/// increment/decrement statements, never assigned directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
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

impl Thread {
    /// Create a new Thread authored by `actor`
    pub fn new(
        actor: &Actor,
        title: impl Into<String>,
        content: impl Into<String>,
        content_summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: actor.id,
            title: title.into(),
            content: content.into(),
            content_summary: content_summary.into(),
            like_count: 0,
            dislike_count: 0,
            comment_count: 0,
            created_by: actor.email.clone(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    /// Whether `actor_id` authored this thread
    #[inline]
    pub fn is_authored_by(&self, actor_id: Uuid) -> bool {
        self.author_id == actor_id
    }
}

/// One row of a thread listing: the thread plus the read-time extras the
/// listing query selects alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadListItem {
    pub thread: Thread,
    /// Present only in trending-ordered listings
    pub trending_score: Option<f64>,
    /// The viewer's active reaction, if any
    pub viewer_action: Option<ReactionAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_actor() -> Actor {
        Actor::new(Uuid::new_v4(), "author@example.com", "author")
    }

    #[test]
    fn test_new_thread_has_zero_counters() {
        let thread = Thread::new(&test_actor(), "title", "content", "summary");
        assert_eq!(thread.like_count, 0);
        assert_eq!(thread.dislike_count, 0);
        assert_eq!(thread.comment_count, 0);
        assert!(thread.updated_at.is_none());
    }

    #[test]
    fn test_created_by_is_actor_email() {
        let actor = test_actor();
        let thread = Thread::new(&actor, "title", "content", "summary");
        assert_eq!(thread.created_by, actor.email);
        assert!(thread.is_authored_by(actor.id));
        assert!(!thread.is_authored_by(Uuid::new_v4()));
    }
}
