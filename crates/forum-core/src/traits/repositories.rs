//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    ActivityRecord, CommentListItem, CommentReply, Thread, ThreadComment, ThreadListItem,
};
use crate::error::DomainError;
use crate::value_objects::{Actor, ReactionKind, ReactionTarget, RecencyCursor, TrendingCursor};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Thread Repository
// ============================================================================

/// Ordering mode for thread listings, with the decoded resumption point.
///
/// A cursor is bound to its mode at decode time, so a listing can never mix
/// a trending cursor into a recency query or vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThreadOrder {
    /// Newest first: `(created_at, id)` descending
    Recency(Option<RecencyCursor>),
    /// Highest trending score first: `(score, id)` descending, score
    /// recomputed per query
    Trending(Option<TrendingCursor>),
}

impl ThreadOrder {
    #[inline]
    pub const fn is_trending(&self) -> bool {
        matches!(self, Self::Trending(_))
    }
}

/// Options for thread listing queries
#[derive(Debug, Clone)]
pub struct ThreadListQuery {
    /// Page size; the repository fetches one extra row to detect a next page
    pub limit: i64,
    pub order: ThreadOrder,
    /// When set, each row carries this viewer's current reaction
    pub viewer_id: Option<Uuid>,
    /// Restrict to threads by one author
    pub author_id: Option<Uuid>,
    /// Case-insensitive substring match over title/content/summary
    pub search: Option<String>,
}

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thread>>;

    /// List threads with seek pagination in recency or trending order
    async fn list(&self, query: ThreadListQuery) -> RepoResult<Vec<ThreadListItem>>;

    /// Create a new thread
    async fn create(&self, thread: &Thread) -> RepoResult<()>;

    /// Update title/content/summary (edit)
    async fn update(&self, thread: &Thread) -> RepoResult<()>;

    /// Soft delete a thread
    async fn delete(&self, id: Uuid, deleted_by: &str) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ThreadComment>>;

    /// Find reply by ID
    async fn find_reply_by_id(&self, id: Uuid) -> RepoResult<Option<CommentReply>>;

    /// List a thread's comments newest first, replies nested, with the
    /// viewer's reaction on each row
    async fn list_by_thread(
        &self,
        thread_id: Uuid,
        viewer_id: Uuid,
    ) -> RepoResult<Vec<CommentListItem>>;

    /// Create a comment and increment the thread's comment counter atomically
    async fn create(&self, comment: &ThreadComment) -> RepoResult<()>;

    /// Create a reply and increment the comment's reply counter atomically
    async fn create_reply(&self, reply: &CommentReply) -> RepoResult<()>;

    /// Update comment content (edit)
    async fn update(&self, comment: &ThreadComment) -> RepoResult<()>;

    /// Update reply content (edit)
    async fn update_reply(&self, reply: &CommentReply) -> RepoResult<()>;

    /// Soft delete a comment and decrement the thread's comment counter
    /// atomically
    async fn delete(&self, comment: &ThreadComment, deleted_by: &str) -> RepoResult<()>;

    /// Soft delete a reply and decrement the comment's reply counter
    /// atomically
    async fn delete_reply(&self, reply: &CommentReply, deleted_by: &str) -> RepoResult<()>;
}

// ============================================================================
// Engagement Repository
// ============================================================================

/// Reaction ledger and toggle execution.
///
/// `toggle` owns the whole read-decide-write sequence: it reads the current
/// ledger row, plans the transition, and applies counter deltas plus the
/// ledger write in ONE transaction, so concurrent toggles from the same
/// actor on the same target serialize on the ledger row.
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// The current ledger record for this actor and target, if one exists.
    /// A missing record is a normal outcome, not an error.
    async fn find(&self, target: &ReactionTarget, actor_id: Uuid)
        -> RepoResult<Option<ActivityRecord>>;

    /// Apply one like/dislike toggle atomically
    async fn toggle(
        &self,
        target: &ReactionTarget,
        actor: &Actor,
        kind: ReactionKind,
    ) -> RepoResult<()>;
}
