//! PostgreSQL implementation of CommentRepository
//!
//! Comment and reply writes always move the parent's denormalized counter in
//! the same transaction as the row itself.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use forum_core::entities::{CommentListItem, CommentReply, ReplyListItem, ThreadComment};
use forum_core::traits::{CommentRepository, RepoResult};

use crate::models::{CommentListRowModel, CommentModel, ReplyListRowModel, ReplyModel};

use super::error::{comment_not_found, map_db_error, map_tx_error, reply_not_found};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ThreadComment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, thread_id, author_id, content,
                   like_count, dislike_count, reply_count,
                   created_by, created_at, updated_by, updated_at
            FROM thread_comment
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ThreadComment::from))
    }

    #[instrument(skip(self))]
    async fn find_reply_by_id(&self, id: Uuid) -> RepoResult<Option<CommentReply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, thread_id, thread_comment_id, author_id, content,
                   like_count, dislike_count,
                   created_by, created_at, updated_by, updated_at
            FROM thread_comment_reply
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommentReply::from))
    }

    #[instrument(skip(self))]
    async fn list_by_thread(
        &self,
        thread_id: Uuid,
        viewer_id: Uuid,
    ) -> RepoResult<Vec<CommentListItem>> {
        // The viewer-action joins pin the discriminator explicitly: comment
        // rows only where thread_comment_reply_id IS NULL, reply rows only by
        // thread_comment_reply_id. Mixing these up cross-contaminates the two
        // ledgers.
        let comment_rows = sqlx::query_as::<_, CommentListRowModel>(
            r#"
            SELECT thc.id, thc.thread_id, thc.author_id, thc.content,
                   thc.like_count, thc.dislike_count, thc.reply_count,
                   thc.created_by, thc.created_at, thc.updated_by, thc.updated_at,
                   tca.action AS viewer_action
            FROM thread_comment thc
            LEFT JOIN thread_comment_activity AS tca
                ON tca.thread_comment_id = thc.id
                AND tca.actor_id = $2
                AND tca.thread_comment_reply_id IS NULL
            WHERE thc.thread_id = $1 AND thc.deleted_at IS NULL
            ORDER BY thc.created_at DESC
            "#,
        )
        .bind(thread_id)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let reply_rows = sqlx::query_as::<_, ReplyListRowModel>(
            r#"
            SELECT thcr.id, thcr.thread_id, thcr.thread_comment_id, thcr.author_id, thcr.content,
                   thcr.like_count, thcr.dislike_count,
                   thcr.created_by, thcr.created_at, thcr.updated_by, thcr.updated_at,
                   tca.action AS viewer_action
            FROM thread_comment_reply thcr
            LEFT JOIN thread_comment_activity AS tca
                ON tca.thread_comment_reply_id = thcr.id
                AND tca.actor_id = $2
            WHERE thcr.thread_id = $1 AND thcr.deleted_at IS NULL
            ORDER BY thcr.created_at DESC
            "#,
        )
        .bind(thread_id)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut replies_by_comment: HashMap<Uuid, Vec<ReplyListItem>> = HashMap::new();
        for row in reply_rows {
            let item = ReplyListItem::from(row);
            replies_by_comment
                .entry(item.reply.comment_id)
                .or_default()
                .push(item);
        }

        Ok(comment_rows
            .into_iter()
            .map(|row| {
                let (comment, viewer_action) = row.into_parts();
                let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
                CommentListItem {
                    comment,
                    viewer_action,
                    replies,
                }
            })
            .collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, thread_id = %comment.thread_id))]
    async fn create(&self, comment: &ThreadComment) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_tx_error)?;

        sqlx::query(
            r#"
            INSERT INTO thread_comment (id, thread_id, author_id, content,
                                        like_count, dislike_count, reply_count,
                                        created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(comment.id)
        .bind(comment.thread_id)
        .bind(comment.author_id)
        .bind(&comment.content)
        .bind(comment.like_count)
        .bind(comment.dislike_count)
        .bind(comment.reply_count)
        .bind(&comment.created_by)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("UPDATE thread SET comment_count = comment_count + 1 WHERE id = $1")
            .bind(comment.thread_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_tx_error)?;

        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id, comment_id = %reply.comment_id))]
    async fn create_reply(&self, reply: &CommentReply) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_tx_error)?;

        sqlx::query(
            r#"
            INSERT INTO thread_comment_reply (id, thread_id, thread_comment_id, author_id,
                                              content, like_count, dislike_count,
                                              created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(reply.id)
        .bind(reply.thread_id)
        .bind(reply.comment_id)
        .bind(reply.author_id)
        .bind(&reply.content)
        .bind(reply.like_count)
        .bind(reply.dislike_count)
        .bind(&reply.created_by)
        .bind(reply.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("UPDATE thread_comment SET reply_count = reply_count + 1 WHERE id = $1")
            .bind(reply.comment_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_tx_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &ThreadComment) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE thread_comment
            SET content = $2, updated_by = $3, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(&comment.updated_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn update_reply(&self, reply: &CommentReply) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE thread_comment_reply
            SET content = $2, updated_by = $3, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(reply.id)
        .bind(&reply.content)
        .bind(&reply.updated_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply.id));
        }

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn delete(&self, comment: &ThreadComment, deleted_by: &str) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_tx_error)?;

        let result = sqlx::query(
            r#"
            UPDATE thread_comment
            SET deleted_by = $2, deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(comment.id)
        .bind(deleted_by)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        sqlx::query("UPDATE thread SET comment_count = comment_count - 1 WHERE id = $1")
            .bind(comment.thread_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_tx_error)?;

        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn delete_reply(&self, reply: &CommentReply, deleted_by: &str) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_tx_error)?;

        let result = sqlx::query(
            r#"
            UPDATE thread_comment_reply
            SET deleted_by = $2, deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(reply.id)
        .bind(deleted_by)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply.id));
        }

        sqlx::query("UPDATE thread_comment SET reply_count = reply_count - 1 WHERE id = $1")
            .bind(reply.comment_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_tx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
