//! Comment and reply handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{
    CommentResponse, CommentService, CreateCommentRequest, CreateReplyRequest, ReplyResponse,
    UpdateCommentRequest, UpdateReplyRequest,
};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// List a thread's comments with nested replies
///
/// GET /threads/{thread_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let thread_id = parse_id(&thread_id, "thread_id")?;

    let service = CommentService::new(state.service_context());
    let comments = service.get_thread_comments(&auth.actor, thread_id).await?;
    Ok(Json(comments))
}

/// Comment on a thread
///
/// POST /threads/{thread_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let thread_id = parse_id(&thread_id, "thread_id")?;

    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(&auth.actor, thread_id, request).await?;
    Ok(Created(Json(comment)))
}

/// Edit a comment (author only)
///
/// PATCH /threads/{thread_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Json(request): Json<UpdateCommentRequest>,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(&thread_id, "thread_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    service
        .update_comment(&auth.actor, thread_id, comment_id, request)
        .await?;
    Ok(NoContent)
}

/// Soft delete a comment (author only)
///
/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(&thread_id, "thread_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(&auth.actor, thread_id, comment_id).await?;
    Ok(NoContent)
}

/// Reply to a comment
///
/// POST /threads/{thread_id}/comments/{comment_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Json(request): Json<CreateReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let thread_id = parse_id(&thread_id, "thread_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    let reply = service
        .create_reply(&auth.actor, thread_id, comment_id, request)
        .await?;
    Ok(Created(Json(reply)))
}

/// Edit a reply (author only)
///
/// PATCH /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn update_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    Json(request): Json<UpdateReplyRequest>,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(&thread_id, "thread_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;
    let reply_id = parse_id(&reply_id, "reply_id")?;

    let service = CommentService::new(state.service_context());
    service
        .update_reply(&auth.actor, thread_id, comment_id, reply_id, request)
        .await?;
    Ok(NoContent)
}

/// Soft delete a reply (author only)
///
/// DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(&thread_id, "thread_id")?;
    let comment_id = parse_id(&comment_id, "comment_id")?;
    let reply_id = parse_id(&reply_id, "reply_id")?;

    let service = CommentService::new(state.service_context());
    service
        .delete_reply(&auth.actor, thread_id, comment_id, reply_id)
        .await?;
    Ok(NoContent)
}
