//! Activity ledger entity <-> model mappers

use forum_core::entities::ActivityRecord;
use forum_core::{ReactionAction, ReactionTarget};

use crate::models::{CommentActivityModel, ThreadActivityModel};

/// Parse a joined ledger action column into the viewer's ACTIVE reaction.
///
/// Rows holding `UNLIKE`/`UNDISLIKE` (and unparseable values) surface as
/// no reaction.
pub fn parse_viewer_action(raw: Option<&str>) -> Option<ReactionAction> {
    raw.and_then(|s| s.parse::<ReactionAction>().ok())
        .filter(|action| action.is_active())
}

/// Parse the stored action column, defaulting corrupt values to `UNLIKE`.
///
/// The action column is CHECK-constrained, so this path only matters for
/// rows written outside the application.
fn parse_stored_action(raw: &str) -> ReactionAction {
    raw.parse().unwrap_or(ReactionAction::Unlike)
}

impl From<ThreadActivityModel> for ActivityRecord {
    fn from(model: ThreadActivityModel) -> Self {
        ActivityRecord {
            id: model.id,
            target: ReactionTarget::thread(model.thread_id),
            actor_id: model.actor_id,
            actor_email: model.actor_email,
            actor_username: model.actor_username,
            action: parse_stored_action(&model.action),
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentActivityModel> for ActivityRecord {
    fn from(model: CommentActivityModel) -> Self {
        let target = match model.thread_comment_reply_id {
            Some(reply_id) => {
                ReactionTarget::reply(model.thread_id, model.thread_comment_id, reply_id)
            }
            None => ReactionTarget::comment(model.thread_id, model.thread_comment_id),
        };

        ActivityRecord {
            id: model.id,
            target,
            actor_id: model.actor_id,
            actor_email: model.actor_email,
            actor_username: model.actor_username,
            action: parse_stored_action(&model.action),
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_action_surfaces_only_active_reactions() {
        assert_eq!(parse_viewer_action(Some("LIKE")), Some(ReactionAction::Like));
        assert_eq!(
            parse_viewer_action(Some("DISLIKE")),
            Some(ReactionAction::Dislike)
        );
        assert_eq!(parse_viewer_action(Some("UNLIKE")), None);
        assert_eq!(parse_viewer_action(Some("UNDISLIKE")), None);
        assert_eq!(parse_viewer_action(Some("garbage")), None);
        assert_eq!(parse_viewer_action(None), None);
    }
}
