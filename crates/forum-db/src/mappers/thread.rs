//! Thread entity <-> model mappers

use forum_core::entities::{Thread, ThreadListItem};

use crate::models::{ThreadListRowModel, ThreadModel};

use super::activity::parse_viewer_action;

impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            content_summary: model.content_summary,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            comment_count: model.comment_count,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        }
    }
}

impl From<ThreadListRowModel> for ThreadListItem {
    fn from(row: ThreadListRowModel) -> Self {
        let viewer_action = parse_viewer_action(row.viewer_action.as_deref());
        let trending_score = row.trending_score;

        ThreadListItem {
            thread: Thread {
                id: row.id,
                author_id: row.author_id,
                title: row.title,
                content: row.content,
                content_summary: row.content_summary,
                like_count: row.like_count,
                dislike_count: row.dislike_count,
                comment_count: row.comment_count,
                created_by: row.created_by,
                created_at: row.created_at,
                updated_by: row.updated_by,
                updated_at: row.updated_at,
            },
            trending_score,
            viewer_action,
        }
    }
}
