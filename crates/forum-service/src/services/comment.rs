//! Comment service
//!
//! Handles comments and replies; every create/delete moves the parent's
//! counter inside the repository's transaction.

use forum_core::entities::{CommentReply, ThreadComment};
use forum_core::value_objects::Actor;
use forum_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    CommentResponse, CreateCommentRequest, CreateReplyRequest, ReplyResponse,
    UpdateCommentRequest, UpdateReplyRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a thread
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn create_comment(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        // Verify the thread exists
        self.ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        let comment = ThreadComment::new(thread_id, actor, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, thread_id = %thread_id, "Comment created");

        Ok(CommentResponse::from_comment(comment))
    }

    /// Reply to a comment
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn create_reply(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
        request: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        request.validate()?;

        let comment = self.find_comment_in_thread(thread_id, comment_id).await?;

        let reply = CommentReply::new(thread_id, comment.id, actor, request.content);
        self.ctx.comment_repo().create_reply(&reply).await?;

        info!(reply_id = %reply.id, comment_id = %comment_id, "Reply created");

        Ok(ReplyResponse::from_reply(reply))
    }

    /// List a thread's comments with nested replies and the viewer's
    /// reactions
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.id))]
    pub async fn get_thread_comments(
        &self,
        viewer: &Actor,
        thread_id: Uuid,
    ) -> ServiceResult<Vec<CommentResponse>> {
        // Verify the thread exists
        self.ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        let items = self
            .ctx
            .comment_repo()
            .list_by_thread(thread_id, viewer.id)
            .await?;

        Ok(items.into_iter().map(CommentResponse::from).collect())
    }

    /// Edit a comment; author only
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_comment(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
        request: UpdateCommentRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        let mut comment = self.find_comment_in_thread(thread_id, comment_id).await?;

        if !comment.is_authored_by(actor.id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        comment.content = request.content;
        comment.updated_by = Some(actor.email.clone());

        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");

        Ok(())
    }

    /// Soft delete a comment; author only
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_comment(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
    ) -> ServiceResult<()> {
        let comment = self.find_comment_in_thread(thread_id, comment_id).await?;

        if !comment.is_authored_by(actor.id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(&comment, &actor.email).await?;

        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    /// Edit a reply; author only
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_reply(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
        request: UpdateReplyRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        let mut reply = self
            .find_reply_in_thread(thread_id, comment_id, reply_id)
            .await?;

        if !reply.is_authored_by(actor.id) {
            return Err(DomainError::NotReplyAuthor.into());
        }

        reply.content = request.content;
        reply.updated_by = Some(actor.email.clone());

        self.ctx.comment_repo().update_reply(&reply).await?;

        info!(reply_id = %reply_id, "Reply updated");

        Ok(())
    }

    /// Soft delete a reply; author only
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_reply(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
    ) -> ServiceResult<()> {
        let reply = self
            .find_reply_in_thread(thread_id, comment_id, reply_id)
            .await?;

        if !reply.is_authored_by(actor.id) {
            return Err(DomainError::NotReplyAuthor.into());
        }

        self.ctx.comment_repo().delete_reply(&reply, &actor.email).await?;

        info!(reply_id = %reply_id, "Reply deleted");

        Ok(())
    }

    /// Fetch a comment, requiring it to belong to the thread in the path
    async fn find_comment_in_thread(
        &self,
        thread_id: Uuid,
        comment_id: Uuid,
    ) -> ServiceResult<ThreadComment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.thread_id != thread_id {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        Ok(comment)
    }

    /// Fetch a reply, requiring it to belong to the comment and thread in
    /// the path
    async fn find_reply_in_thread(
        &self,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
    ) -> ServiceResult<CommentReply> {
        let reply = self
            .ctx
            .comment_repo()
            .find_reply_by_id(reply_id)
            .await?
            .ok_or(DomainError::ReplyNotFound(reply_id))?;

        if reply.thread_id != thread_id || reply.comment_id != comment_id {
            return Err(DomainError::ReplyNotFound(reply_id).into());
        }

        Ok(reply)
    }
}
