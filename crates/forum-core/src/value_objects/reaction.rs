//! Reaction actions and the toggle transition table
//!
//! The ledger stores the literal last action per (actor, target), including
//! the `UNLIKE`/`UNDISLIKE` values written on toggle-off. Whether a reaction
//! is currently active is derived from that last action, never stored
//! separately.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last action recorded in the activity ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionAction {
    Like,
    Unlike,
    Dislike,
    Undislike,
}

impl ReactionAction {
    /// Ledger string representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Unlike => "UNLIKE",
            Self::Dislike => "DISLIKE",
            Self::Undislike => "UNDISLIKE",
        }
    }

    /// Whether this action currently counts toward a counter.
    ///
    /// Only `LIKE` and `DISLIKE` are active; everything else (including a
    /// missing record) means "no active reaction".
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Like | Self::Dislike)
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a `ReactionAction` from its ledger string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction action")]
pub struct ParseActionError;

impl FromStr for ReactionAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKE" => Ok(Self::Like),
            "UNLIKE" => Ok(Self::Unlike),
            "DISLIKE" => Ok(Self::Dislike),
            "UNDISLIKE" => Ok(Self::Undislike),
            _ => Err(ParseActionError),
        }
    }
}

/// The reaction a caller is toggling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// The mirror toggle
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Ledger action written when this reaction becomes active
    #[inline]
    pub const fn active_action(self) -> ReactionAction {
        match self {
            Self::Like => ReactionAction::Like,
            Self::Dislike => ReactionAction::Dislike,
        }
    }

    /// Ledger action written when this reaction is toggled off
    #[inline]
    pub const fn inactive_action(self) -> ReactionAction {
        match self {
            Self::Like => ReactionAction::Unlike,
            Self::Dislike => ReactionAction::Undislike,
        }
    }

    /// Counter this reaction contributes to
    #[inline]
    pub const fn counter(self) -> CounterField {
        match self {
            Self::Like => CounterField::Like,
            Self::Dislike => CounterField::Dislike,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        })
    }
}

/// Denormalized counter mutated by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterField {
    Like,
    Dislike,
}

/// A single atomic counter mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterChange {
    Increment(CounterField),
    Decrement(CounterField),
}

/// Ledger write a transition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerWrite {
    /// First record for this (actor, target) pair
    Create(ReactionAction),
    /// In-place update of the existing record
    Update(ReactionAction),
}

/// Outcome of the toggle state machine for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    pub changes: Vec<CounterChange>,
    pub write: LedgerWrite,
}

/// Decide counter deltas and the ledger write for a toggle request.
///
/// The same table drives threads, comments, and replies; callers map the
/// abstract counter fields onto the target's columns. A decrement is only
/// ever planned for a counter this actor's prior action incremented, so
/// counters cannot go negative.
pub fn plan_transition(prior: Option<ReactionAction>, requested: ReactionKind) -> TransitionPlan {
    let active = requested.active_action();

    match prior {
        // Toggle off: the requested reaction is already active
        Some(action) if action == active => TransitionPlan {
            changes: vec![CounterChange::Decrement(requested.counter())],
            write: LedgerWrite::Update(requested.inactive_action()),
        },
        // Switch sides: the opposite reaction is active
        Some(action) if action == requested.opposite().active_action() => TransitionPlan {
            changes: vec![
                CounterChange::Decrement(requested.opposite().counter()),
                CounterChange::Increment(requested.counter()),
            ],
            write: LedgerWrite::Update(active),
        },
        // A record exists but no reaction is active (UNLIKE/UNDISLIKE)
        Some(_) => TransitionPlan {
            changes: vec![CounterChange::Increment(requested.counter())],
            write: LedgerWrite::Update(active),
        },
        // First reaction from this actor on this target
        None => TransitionPlan {
            changes: vec![CounterChange::Increment(requested.counter())],
            write: LedgerWrite::Create(active),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_roundtrip() {
        for action in [
            ReactionAction::Like,
            ReactionAction::Unlike,
            ReactionAction::Dislike,
            ReactionAction::Undislike,
        ] {
            assert_eq!(action.as_str().parse::<ReactionAction>(), Ok(action));
        }
        assert!("SUPERLIKE".parse::<ReactionAction>().is_err());
    }

    #[test]
    fn test_active_classification() {
        assert!(ReactionAction::Like.is_active());
        assert!(ReactionAction::Dislike.is_active());
        assert!(!ReactionAction::Unlike.is_active());
        assert!(!ReactionAction::Undislike.is_active());
    }

    #[test]
    fn test_first_like_creates_record() {
        let plan = plan_transition(None, ReactionKind::Like);
        assert_eq!(plan.changes, vec![CounterChange::Increment(CounterField::Like)]);
        assert_eq!(plan.write, LedgerWrite::Create(ReactionAction::Like));
    }

    #[test]
    fn test_like_toggle_off() {
        let plan = plan_transition(Some(ReactionAction::Like), ReactionKind::Like);
        assert_eq!(plan.changes, vec![CounterChange::Decrement(CounterField::Like)]);
        assert_eq!(plan.write, LedgerWrite::Update(ReactionAction::Unlike));
    }

    #[test]
    fn test_like_switches_from_dislike() {
        let plan = plan_transition(Some(ReactionAction::Dislike), ReactionKind::Like);
        assert_eq!(
            plan.changes,
            vec![
                CounterChange::Decrement(CounterField::Dislike),
                CounterChange::Increment(CounterField::Like),
            ]
        );
        assert_eq!(plan.write, LedgerWrite::Update(ReactionAction::Like));
    }

    #[test]
    fn test_like_after_toggle_off_reuses_record() {
        for prior in [ReactionAction::Unlike, ReactionAction::Undislike] {
            let plan = plan_transition(Some(prior), ReactionKind::Like);
            assert_eq!(plan.changes, vec![CounterChange::Increment(CounterField::Like)]);
            assert_eq!(plan.write, LedgerWrite::Update(ReactionAction::Like));
        }
    }

    #[test]
    fn test_dislike_mirrors_like() {
        let plan = plan_transition(None, ReactionKind::Dislike);
        assert_eq!(plan.changes, vec![CounterChange::Increment(CounterField::Dislike)]);
        assert_eq!(plan.write, LedgerWrite::Create(ReactionAction::Dislike));

        let plan = plan_transition(Some(ReactionAction::Dislike), ReactionKind::Dislike);
        assert_eq!(plan.changes, vec![CounterChange::Decrement(CounterField::Dislike)]);
        assert_eq!(plan.write, LedgerWrite::Update(ReactionAction::Undislike));

        let plan = plan_transition(Some(ReactionAction::Like), ReactionKind::Dislike);
        assert_eq!(
            plan.changes,
            vec![
                CounterChange::Decrement(CounterField::Like),
                CounterChange::Increment(CounterField::Dislike),
            ]
        );
        assert_eq!(plan.write, LedgerWrite::Update(ReactionAction::Dislike));
    }

    #[test]
    fn test_toggle_sequence_nets_out() {
        // like -> unlike -> dislike -> like, tracking net counter movement
        let mut likes = 0i64;
        let mut dislikes = 0i64;
        let mut prior: Option<ReactionAction> = None;

        for kind in [
            ReactionKind::Like,
            ReactionKind::Like,
            ReactionKind::Dislike,
            ReactionKind::Like,
        ] {
            let plan = plan_transition(prior, kind);
            for change in &plan.changes {
                match change {
                    CounterChange::Increment(CounterField::Like) => likes += 1,
                    CounterChange::Decrement(CounterField::Like) => likes -= 1,
                    CounterChange::Increment(CounterField::Dislike) => dislikes += 1,
                    CounterChange::Decrement(CounterField::Dislike) => dislikes -= 1,
                }
                assert!(likes >= 0 && dislikes >= 0);
            }
            prior = Some(match plan.write {
                LedgerWrite::Create(a) | LedgerWrite::Update(a) => a,
            });
        }

        assert_eq!((likes, dislikes), (1, 0));
        assert_eq!(prior, Some(ReactionAction::Like));
    }
}
