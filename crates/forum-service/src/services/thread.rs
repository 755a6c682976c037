//! Thread service
//!
//! Handles thread CRUD and the cursor-paginated listing in both orderings.

use forum_core::entities::Thread;
use forum_core::traits::{ThreadListQuery, ThreadOrder};
use forum_core::value_objects::{Actor, Page, RecencyCursor, TrendingCursor};
use forum_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    CreateThreadRequest, ListThreadsRequest, ThreadListResponse, ThreadResponse,
    UpdateThreadRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default page size when the caller does not send a limit
const DEFAULT_PAGE_SIZE: i64 = 10;
/// Hard cap on page size
const MAX_PAGE_SIZE: i64 = 100;

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new thread
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn create_thread(
        &self,
        actor: &Actor,
        request: CreateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        request.validate()?;

        let thread = Thread::new(
            actor,
            request.title,
            request.content,
            request.content_summary,
        );
        self.ctx.thread_repo().create(&thread).await?;

        info!(thread_id = %thread.id, "Thread created");

        Ok(ThreadResponse::from_thread(thread, None))
    }

    /// List threads with cursor pagination, newest-first or trending
    #[instrument(skip(self, viewer, request), fields(viewer_id = %viewer.id))]
    pub async fn get_thread_list(
        &self,
        viewer: &Actor,
        request: ListThreadsRequest,
    ) -> ServiceResult<ThreadListResponse> {
        let limit = request.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        // An absent or empty cursor starts from the top; a present one is
        // decoded under the requested ordering only.
        let cursor = request.cursor.as_deref().filter(|c| !c.is_empty());
        let order = if request.is_trending {
            ThreadOrder::Trending(cursor.map(TrendingCursor::decode).transpose()?)
        } else {
            ThreadOrder::Recency(cursor.map(RecencyCursor::decode).transpose()?)
        };

        let rows = self
            .ctx
            .thread_repo()
            .list(ThreadListQuery {
                limit,
                order,
                viewer_id: Some(viewer.id),
                author_id: request.author_id,
                search: request.search,
            })
            .await?;

        let is_trending = request.is_trending;
        let page = Page::from_rows(rows, limit as usize, |row| {
            if is_trending {
                TrendingCursor::new(row.trending_score.unwrap_or_default(), row.thread.id).encode()
            } else {
                RecencyCursor::new(row.thread.created_at, row.thread.id).encode()
            }
        });

        Ok(ThreadListResponse {
            items: page.items.into_iter().map(ThreadResponse::from).collect(),
            next_cursor: page.next_cursor,
        })
    }

    /// Get one thread with the viewer's current reaction
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.id))]
    pub async fn get_thread_detail(
        &self,
        viewer: &Actor,
        thread_id: Uuid,
    ) -> ServiceResult<ThreadResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        let viewer_action = self
            .ctx
            .engagement_repo()
            .find(&forum_core::ReactionTarget::thread(thread_id), viewer.id)
            .await?
            .and_then(|record| record.active_action());

        Ok(ThreadResponse::from_thread(thread, viewer_action))
    }

    /// Edit a thread; author only
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_thread(
        &self,
        actor: &Actor,
        thread_id: Uuid,
        request: UpdateThreadRequest,
    ) -> ServiceResult<()> {
        request.validate()?;

        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        if !thread.is_authored_by(actor.id) {
            return Err(DomainError::NotThreadAuthor.into());
        }

        thread.title = request.title;
        thread.content = request.content;
        thread.content_summary = request.content_summary;
        thread.updated_by = Some(actor.email.clone());

        self.ctx.thread_repo().update(&thread).await?;

        info!(thread_id = %thread.id, "Thread updated");

        Ok(())
    }

    /// Soft delete a thread; author only
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_thread(&self, actor: &Actor, thread_id: Uuid) -> ServiceResult<()> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        if !thread.is_authored_by(actor.id) {
            return Err(DomainError::NotThreadAuthor.into());
        }

        self.ctx.thread_repo().delete(thread_id, &actor.email).await?;

        info!(thread_id = %thread_id, "Thread deleted");

        Ok(())
    }
}
