//! PostgreSQL implementation of EngagementRepository
//!
//! One generic implementation serves threads, comments, and replies: the
//! target variant picks the ledger table/filters and the counter columns,
//! while `plan_transition` decides what to do. The whole read-decide-write
//! sequence runs inside a single transaction, with the ledger row locked
//! `FOR UPDATE`, so two concurrent toggles by the same actor on the same
//! target serialize instead of double-counting. If anything fails before
//! commit, the transaction rolls back and counters stay consistent with the
//! ledger.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use forum_core::entities::ActivityRecord;
use forum_core::traits::{EngagementRepository, RepoResult};
use forum_core::value_objects::{
    plan_transition, Actor, CounterChange, CounterField, LedgerWrite, ReactionAction,
    ReactionKind, ReactionTarget,
};
use forum_core::DomainError;

use crate::models::{CommentActivityModel, ThreadActivityModel};

use super::error::{map_db_error, map_tx_error};

type PgTx<'a> = Transaction<'a, Postgres>;

/// PostgreSQL implementation of EngagementRepository
#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    /// Create a new PgEngagementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the actor's current ledger action inside the toggle transaction,
    /// locking the row so concurrent toggles on the same (actor, target)
    /// queue behind this one.
    async fn current_action(
        tx: &mut PgTx<'_>,
        target: &ReactionTarget,
        actor_id: Uuid,
    ) -> RepoResult<Option<ReactionAction>> {
        let raw = match *target {
            ReactionTarget::Thread { thread_id } => {
                sqlx::query_scalar::<_, String>(
                    r#"
                    SELECT action FROM thread_activity
                    WHERE thread_id = $1 AND actor_id = $2
                    FOR UPDATE
                    "#,
                )
                .bind(thread_id)
                .bind(actor_id)
                .fetch_optional(&mut **tx)
                .await
            }
            ReactionTarget::Comment {
                thread_id,
                comment_id,
            } => {
                sqlx::query_scalar::<_, String>(
                    r#"
                    SELECT action FROM thread_comment_activity
                    WHERE thread_id = $1 AND thread_comment_id = $2 AND actor_id = $3
                      AND thread_comment_reply_id IS NULL
                    FOR UPDATE
                    "#,
                )
                .bind(thread_id)
                .bind(comment_id)
                .bind(actor_id)
                .fetch_optional(&mut **tx)
                .await
            }
            ReactionTarget::Reply {
                thread_id, reply_id, ..
            } => {
                sqlx::query_scalar::<_, String>(
                    r#"
                    SELECT action FROM thread_comment_activity
                    WHERE thread_id = $1 AND thread_comment_reply_id = $2 AND actor_id = $3
                    FOR UPDATE
                    "#,
                )
                .bind(thread_id)
                .bind(reply_id)
                .bind(actor_id)
                .fetch_optional(&mut **tx)
                .await
            }
        }
        .map_err(map_db_error)?;

        raw.map(|s| {
            s.parse::<ReactionAction>()
                .map_err(|_| DomainError::DatabaseError(format!("invalid ledger action: {s}")))
        })
        .transpose()
    }

    /// Apply one counter delta as a backend-atomic update.
    ///
    /// Table and column names are fixed by the enums; only the id is bound.
    async fn apply_counter(
        tx: &mut PgTx<'_>,
        target: &ReactionTarget,
        change: CounterChange,
    ) -> RepoResult<()> {
        let (field, op) = match change {
            CounterChange::Increment(field) => (field, "+"),
            CounterChange::Decrement(field) => (field, "-"),
        };
        let column = match field {
            CounterField::Like => "like_count",
            CounterField::Dislike => "dislike_count",
        };
        let (table, id) = match *target {
            ReactionTarget::Thread { thread_id } => ("thread", thread_id),
            ReactionTarget::Comment { comment_id, .. } => ("thread_comment", comment_id),
            ReactionTarget::Reply { reply_id, .. } => ("thread_comment_reply", reply_id),
        };

        let sql = format!("UPDATE {table} SET {column} = {column} {op} 1 WHERE id = $1");
        sqlx::query(&sql)
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    /// Insert the first ledger row for this (actor, target) pair
    async fn insert_record(
        tx: &mut PgTx<'_>,
        target: &ReactionTarget,
        actor: &Actor,
        action: ReactionAction,
    ) -> RepoResult<()> {
        match *target {
            ReactionTarget::Thread { thread_id } => {
                sqlx::query(
                    r#"
                    INSERT INTO thread_activity
                        (id, thread_id, actor_id, actor_email, actor_username, action, created_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(thread_id)
                .bind(actor.id)
                .bind(&actor.email)
                .bind(&actor.username)
                .bind(action.as_str())
                .bind(&actor.email)
                .execute(&mut **tx)
                .await
            }
            ReactionTarget::Comment {
                thread_id,
                comment_id,
            } => {
                sqlx::query(
                    r#"
                    INSERT INTO thread_comment_activity
                        (id, thread_id, thread_comment_id, thread_comment_reply_id,
                         actor_id, actor_email, actor_username, action, created_by)
                    VALUES ($1, $2, $3, NULL, $4, $5, $6, $7, $8)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(thread_id)
                .bind(comment_id)
                .bind(actor.id)
                .bind(&actor.email)
                .bind(&actor.username)
                .bind(action.as_str())
                .bind(&actor.email)
                .execute(&mut **tx)
                .await
            }
            ReactionTarget::Reply {
                thread_id,
                comment_id,
                reply_id,
            } => {
                sqlx::query(
                    r#"
                    INSERT INTO thread_comment_activity
                        (id, thread_id, thread_comment_id, thread_comment_reply_id,
                         actor_id, actor_email, actor_username, action, created_by)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(thread_id)
                .bind(comment_id)
                .bind(reply_id)
                .bind(actor.id)
                .bind(&actor.email)
                .bind(&actor.username)
                .bind(action.as_str())
                .bind(&actor.email)
                .execute(&mut **tx)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(())
    }

    /// Flip the existing ledger row in place; a toggle-off never writes a
    /// fresh row.
    async fn update_record(
        tx: &mut PgTx<'_>,
        target: &ReactionTarget,
        actor: &Actor,
        action: ReactionAction,
    ) -> RepoResult<()> {
        match *target {
            ReactionTarget::Thread { thread_id } => {
                sqlx::query(
                    r#"
                    UPDATE thread_activity
                    SET action = $3, updated_by = $4, updated_at = NOW()
                    WHERE thread_id = $1 AND actor_id = $2
                    "#,
                )
                .bind(thread_id)
                .bind(actor.id)
                .bind(action.as_str())
                .bind(&actor.email)
                .execute(&mut **tx)
                .await
            }
            ReactionTarget::Comment { comment_id, .. } => {
                sqlx::query(
                    r#"
                    UPDATE thread_comment_activity
                    SET action = $3, updated_by = $4, updated_at = NOW()
                    WHERE thread_comment_id = $1 AND actor_id = $2
                      AND thread_comment_reply_id IS NULL
                    "#,
                )
                .bind(comment_id)
                .bind(actor.id)
                .bind(action.as_str())
                .bind(&actor.email)
                .execute(&mut **tx)
                .await
            }
            ReactionTarget::Reply { reply_id, .. } => {
                sqlx::query(
                    r#"
                    UPDATE thread_comment_activity
                    SET action = $3, updated_by = $4, updated_at = NOW()
                    WHERE thread_comment_reply_id = $1 AND actor_id = $2
                    "#,
                )
                .bind(reply_id)
                .bind(actor.id)
                .bind(action.as_str())
                .bind(&actor.email)
                .execute(&mut **tx)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl EngagementRepository for PgEngagementRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        target: &ReactionTarget,
        actor_id: Uuid,
    ) -> RepoResult<Option<ActivityRecord>> {
        let record = match *target {
            ReactionTarget::Thread { thread_id } => sqlx::query_as::<_, ThreadActivityModel>(
                r#"
                SELECT id, thread_id, actor_id, actor_email, actor_username, action,
                       created_by, created_at, updated_by, updated_at
                FROM thread_activity
                WHERE thread_id = $1 AND actor_id = $2
                "#,
            )
            .bind(thread_id)
            .bind(actor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(ActivityRecord::from),
            ReactionTarget::Comment {
                thread_id,
                comment_id,
            } => sqlx::query_as::<_, CommentActivityModel>(
                r#"
                SELECT id, thread_id, thread_comment_id, thread_comment_reply_id,
                       actor_id, actor_email, actor_username, action,
                       created_by, created_at, updated_by, updated_at
                FROM thread_comment_activity
                WHERE thread_id = $1 AND thread_comment_id = $2 AND actor_id = $3
                  AND thread_comment_reply_id IS NULL
                "#,
            )
            .bind(thread_id)
            .bind(comment_id)
            .bind(actor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(ActivityRecord::from),
            ReactionTarget::Reply {
                thread_id, reply_id, ..
            } => sqlx::query_as::<_, CommentActivityModel>(
                r#"
                SELECT id, thread_id, thread_comment_id, thread_comment_reply_id,
                       actor_id, actor_email, actor_username, action,
                       created_by, created_at, updated_by, updated_at
                FROM thread_comment_activity
                WHERE thread_id = $1 AND thread_comment_reply_id = $2 AND actor_id = $3
                "#,
            )
            .bind(thread_id)
            .bind(reply_id)
            .bind(actor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(ActivityRecord::from),
        };

        Ok(record)
    }

    #[instrument(
        skip(self, target, actor),
        fields(target_kind = %target.kind(), thread_id = %target.thread_id(), actor_id = %actor.id)
    )]
    async fn toggle(
        &self,
        target: &ReactionTarget,
        actor: &Actor,
        kind: ReactionKind,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_tx_error)?;

        let prior = Self::current_action(&mut tx, target, actor.id).await?;
        let plan = plan_transition(prior, kind);

        for change in &plan.changes {
            Self::apply_counter(&mut tx, target, *change).await?;
        }

        match plan.write {
            LedgerWrite::Create(action) => {
                Self::insert_record(&mut tx, target, actor, action).await?;
            }
            LedgerWrite::Update(action) => {
                Self::update_record(&mut tx, target, actor, action).await?;
            }
        }

        // Counter deltas and the ledger write land together or not at all;
        // an error before this point rolls the transaction back on drop.
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
        assert_send_sync::<PgEngagementRepository>();
    }
}
