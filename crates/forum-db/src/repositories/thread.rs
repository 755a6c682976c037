//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use forum_core::entities::{Thread, ThreadListItem};
use forum_core::traits::{RepoResult, ThreadListQuery, ThreadOrder, ThreadRepository};

use crate::models::{ThreadListRowModel, ThreadModel};

use super::error::{map_db_error, thread_not_found};

/// Trending score over the live counters, recomputed on every query.
///
/// Mirrors `forum_core::trending::score`: weighted counters with an
/// exponential 48h decay, rounded to two decimals. Kept as one SQL fragment
/// so the subquery and the core definition cannot drift apart silently.
const TRENDING_SCORE_SQL: &str = "ROUND(((like_count * 1.5) + (dislike_count * 1.2) + \
     (comment_count * 2)) * EXP(EXTRACT(EPOCH FROM (NOW() - created_at)) / -172800.0), 2)::float8";

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thread>> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r#"
            SELECT id, author_id, title, content, content_summary,
                   like_count, dislike_count, comment_count,
                   created_by, created_at, updated_by, updated_at
            FROM thread
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thread::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ThreadListQuery) -> RepoResult<Vec<ThreadListItem>> {
        let limit = query.limit.clamp(1, 100);

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT th.id, th.author_id, th.title, th.content, th.content_summary, \
             th.like_count, th.dislike_count, th.comment_count, \
             th.created_by, th.created_at, th.updated_by, th.updated_at",
        );

        if query.order.is_trending() {
            qb.push(", ts.trending_score");
        } else {
            qb.push(", NULL::float8 AS trending_score");
        }

        if query.viewer_id.is_some() {
            qb.push(", ta.action AS viewer_action");
        } else {
            qb.push(", NULL::text AS viewer_action");
        }

        qb.push(" FROM thread th");

        if query.order.is_trending() {
            qb.push(" JOIN (SELECT id, ");
            qb.push(TRENDING_SCORE_SQL);
            qb.push(" AS trending_score FROM thread WHERE deleted_at IS NULL) AS ts ON ts.id = th.id");
        }

        if let Some(viewer_id) = query.viewer_id {
            qb.push(" LEFT JOIN thread_activity AS ta ON ta.thread_id = th.id AND ta.actor_id = ");
            qb.push_bind(viewer_id);
        }

        qb.push(" WHERE th.deleted_at IS NULL");

        if let Some(author_id) = query.author_id {
            qb.push(" AND th.author_id = ");
            qb.push_bind(author_id);
        }

        if let Some(search) = &query.search {
            qb.push(" AND CONCAT(th.title, th.content, th.content_summary) ILIKE ");
            qb.push_bind(format!("%{search}%"));
        }

        // Composite seek predicate: inclusive on the cursor key, so the row
        // the cursor was taken from opens the next page. Both modes tie-break
        // on id descending.
        match query.order {
            ThreadOrder::Recency(cursor) => {
                if let Some(cursor) = cursor {
                    qb.push(" AND (th.created_at, th.id) <= (");
                    qb.push_bind(cursor.created_at);
                    qb.push(", ");
                    qb.push_bind(cursor.id);
                    qb.push(")");
                }
                qb.push(" ORDER BY th.created_at DESC, th.id DESC");
            }
            ThreadOrder::Trending(cursor) => {
                if let Some(cursor) = cursor {
                    qb.push(" AND (ts.trending_score, th.id) <= (");
                    qb.push_bind(cursor.score);
                    qb.push(", ");
                    qb.push_bind(cursor.id);
                    qb.push(")");
                }
                qb.push(" ORDER BY ts.trending_score DESC, th.id DESC");
            }
        }

        // One extra row tells the caller whether a next page exists
        qb.push(" LIMIT ");
        qb.push_bind(limit + 1);

        let rows = qb
            .build_query_as::<ThreadListRowModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ThreadListItem::from).collect())
    }

    #[instrument(skip(self, thread), fields(thread_id = %thread.id))]
    async fn create(&self, thread: &Thread) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO thread (id, author_id, title, content, content_summary,
                                like_count, dislike_count, comment_count,
                                created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(thread.id)
        .bind(thread.author_id)
        .bind(&thread.title)
        .bind(&thread.content)
        .bind(&thread.content_summary)
        .bind(thread.like_count)
        .bind(thread.dislike_count)
        .bind(thread.comment_count)
        .bind(&thread.created_by)
        .bind(thread.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, thread), fields(thread_id = %thread.id))]
    async fn update(&self, thread: &Thread) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE thread
            SET title = $2, content = $3, content_summary = $4,
                updated_by = $5, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(thread.id)
        .bind(&thread.title)
        .bind(&thread.content)
        .bind(&thread.content_summary)
        .bind(&thread.updated_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(thread.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid, deleted_by: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE thread
            SET deleted_by = $2, deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(deleted_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThreadRepository>();
    }
}
