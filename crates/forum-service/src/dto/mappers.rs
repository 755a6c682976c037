//! Entity -> response DTO mappers

use forum_core::entities::{
    CommentListItem, CommentReply, ReplyListItem, Thread, ThreadComment, ThreadListItem,
};
use forum_core::ReactionAction;

use super::responses::{CommentResponse, ReplyResponse, ThreadResponse};

impl ThreadResponse {
    /// Build from a bare thread entity plus the viewer's active reaction
    pub fn from_thread(thread: Thread, viewer_action: Option<ReactionAction>) -> Self {
        Self {
            id: thread.id,
            author_id: thread.author_id,
            title: thread.title,
            content: thread.content,
            content_summary: thread.content_summary,
            like_count: thread.like_count,
            dislike_count: thread.dislike_count,
            comment_count: thread.comment_count,
            trending_score: None,
            viewer_action,
            created_by: thread.created_by,
            created_at: thread.created_at,
            updated_at: thread.updated_at,
        }
    }
}

impl From<ThreadListItem> for ThreadResponse {
    fn from(item: ThreadListItem) -> Self {
        let mut response = Self::from_thread(item.thread, item.viewer_action);
        response.trending_score = item.trending_score;
        response
    }
}

impl CommentResponse {
    /// Build from a bare comment entity (no viewer context, no replies)
    pub fn from_comment(comment: ThreadComment) -> Self {
        Self {
            id: comment.id,
            thread_id: comment.thread_id,
            author_id: comment.author_id,
            content: comment.content,
            like_count: comment.like_count,
            dislike_count: comment.dislike_count,
            reply_count: comment.reply_count,
            viewer_action: None,
            replies: Vec::new(),
            created_by: comment.created_by,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<CommentListItem> for CommentResponse {
    fn from(item: CommentListItem) -> Self {
        let mut response = Self::from_comment(item.comment);
        response.viewer_action = item.viewer_action;
        response.replies = item.replies.into_iter().map(ReplyResponse::from).collect();
        response
    }
}

impl ReplyResponse {
    /// Build from a bare reply entity (no viewer context)
    pub fn from_reply(reply: CommentReply) -> Self {
        Self {
            id: reply.id,
            thread_id: reply.thread_id,
            comment_id: reply.comment_id,
            author_id: reply.author_id,
            content: reply.content,
            like_count: reply.like_count,
            dislike_count: reply.dislike_count,
            viewer_action: None,
            created_by: reply.created_by,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}

impl From<ReplyListItem> for ReplyResponse {
    fn from(item: ReplyListItem) -> Self {
        let mut response = Self::from_reply(item.reply);
        response.viewer_action = item.viewer_action;
        response
    }
}
