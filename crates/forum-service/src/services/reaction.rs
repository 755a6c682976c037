//! Reaction service
//!
//! Entry point for every like/dislike toggle. Policy: the target is ALWAYS
//! verified to exist (and to belong to the parents named in the path) before
//! the toggle engine runs, for all three target kinds, so a reaction can
//! never create a ledger row for a missing or mismatched target. The engine
//! itself does not re-check.

use forum_core::value_objects::{Actor, ReactionKind, ReactionTarget};
use forum_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a like/dislike on a thread
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn toggle_thread(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        self.ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        let target = ReactionTarget::thread(thread_id);
        self.ctx.engagement_repo().toggle(&target, actor, kind).await?;

        info!(thread_id = %thread_id, kind = %kind, "Thread reaction toggled");

        Ok(())
    }

    /// Toggle a like/dislike on a comment
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn toggle_comment(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.thread_id != thread_id {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        let target = ReactionTarget::comment(thread_id, comment_id);
        self.ctx.engagement_repo().toggle(&target, actor, kind).await?;

        info!(comment_id = %comment_id, kind = %kind, "Comment reaction toggled");

        Ok(())
    }

    /// Toggle a like/dislike on a comment reply
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn toggle_reply(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        let reply = self
            .ctx
            .comment_repo()
            .find_reply_by_id(reply_id)
            .await?
            .ok_or(DomainError::ReplyNotFound(reply_id))?;

        if reply.thread_id != thread_id || reply.comment_id != comment_id {
            return Err(DomainError::ReplyNotFound(reply_id).into());
        }

        let target = ReactionTarget::reply(thread_id, comment_id, reply_id);
        self.ctx.engagement_repo().toggle(&target, actor, kind).await?;

        info!(reply_id = %reply_id, kind = %kind, "Reply reaction toggled");

        Ok(())
    }
}
