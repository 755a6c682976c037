pub mod actor;
pub mod cursor;
pub mod reaction;
pub mod target;
pub mod trending;

pub use actor::Actor;
pub use cursor::{Page, RecencyCursor, TrendingCursor};
pub use reaction::{
    plan_transition, CounterChange, CounterField, LedgerWrite, ReactionAction, ReactionKind,
    TransitionPlan,
};
pub use target::{ReactionTarget, TargetKind};
