//! Comment and reply entity <-> model mappers

use forum_core::entities::{CommentReply, ReplyListItem, ThreadComment};

use crate::models::{CommentListRowModel, CommentModel, ReplyListRowModel, ReplyModel};

use super::activity::parse_viewer_action;

impl From<CommentModel> for ThreadComment {
    fn from(model: CommentModel) -> Self {
        ThreadComment {
            id: model.id,
            thread_id: model.thread_id,
            author_id: model.author_id,
            content: model.content,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            reply_count: model.reply_count,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        }
    }
}

impl From<ReplyModel> for CommentReply {
    fn from(model: ReplyModel) -> Self {
        CommentReply {
            id: model.id,
            thread_id: model.thread_id,
            comment_id: model.thread_comment_id,
            author_id: model.author_id,
            content: model.content,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        }
    }
}

impl CommentListRowModel {
    /// Split the row into the comment entity and the viewer's active reaction
    pub fn into_parts(self) -> (ThreadComment, Option<forum_core::ReactionAction>) {
        let viewer_action = parse_viewer_action(self.viewer_action.as_deref());
        let comment = ThreadComment {
            id: self.id,
            thread_id: self.thread_id,
            author_id: self.author_id,
            content: self.content,
            like_count: self.like_count,
            dislike_count: self.dislike_count,
            reply_count: self.reply_count,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_by: self.updated_by,
            updated_at: self.updated_at,
        };
        (comment, viewer_action)
    }
}

impl From<ReplyListRowModel> for ReplyListItem {
    fn from(row: ReplyListRowModel) -> Self {
        let viewer_action = parse_viewer_action(row.viewer_action.as_deref());
        ReplyListItem {
            reply: CommentReply {
                id: row.id,
                thread_id: row.thread_id,
                comment_id: row.thread_comment_id,
                author_id: row.author_id,
                content: row.content,
                like_count: row.like_count,
                dislike_count: row.dislike_count,
                created_by: row.created_by,
                created_at: row.created_at,
                updated_by: row.updated_by,
                updated_at: row.updated_at,
            },
            viewer_action,
        }
    }
}
