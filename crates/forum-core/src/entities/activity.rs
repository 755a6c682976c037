//! Activity record - the reaction ledger entry
//!
//! Exactly one record exists per (actor, target). The record stores the
//! literal last action (`LIKE`, `UNLIKE`, `DISLIKE`, `UNDISLIKE`) and is
//! updated in place on every transition; there is no append-only history.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{Actor, ReactionAction, ReactionTarget};

/// Current-action ledger row for one (actor, target) pair
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub target: ReactionTarget,
    pub actor_id: Uuid,
    pub actor_email: String,
    pub actor_username: String,
    pub action: ReactionAction,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ActivityRecord {
    /// Create the first record for an (actor, target) pair
    pub fn new(target: ReactionTarget, actor: &Actor, action: ReactionAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            actor_id: actor.id,
            actor_email: actor.email.clone(),
            actor_username: actor.username.clone(),
            action,
            created_by: actor.email.clone(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    /// The currently active reaction, if the last action is one.
    ///
    /// `UNLIKE`/`UNDISLIKE` rows exist but carry no active reaction.
    #[inline]
    pub fn active_action(&self) -> Option<ReactionAction> {
        self.action.is_active().then_some(self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_actor() -> Actor {
        Actor::new(Uuid::new_v4(), "actor@example.com", "actor")
    }

    #[test]
    fn test_active_action_for_like() {
        let record = ActivityRecord::new(
            ReactionTarget::thread(Uuid::new_v4()),
            &test_actor(),
            ReactionAction::Like,
        );
        assert_eq!(record.active_action(), Some(ReactionAction::Like));
    }

    #[test]
    fn test_no_active_action_after_toggle_off() {
        let mut record = ActivityRecord::new(
            ReactionTarget::thread(Uuid::new_v4()),
            &test_actor(),
            ReactionAction::Like,
        );
        record.action = ReactionAction::Unlike;
        assert_eq!(record.active_action(), None);

        record.action = ReactionAction::Undislike;
        assert_eq!(record.active_action(), None);
    }
}
