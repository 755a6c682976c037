//! Reaction handlers
//!
//! Toggle endpoints for threads, comments, and replies. All of them return
//! 204 on success: a repeated call undoes the reaction, so the caller can
//! retry freely.

use axum::extract::{Path, State};
use forum_core::ReactionKind;
use forum_service::ReactionService;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Toggle a like on a thread
///
/// POST /threads/{thread_id}/like
pub async fn like_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<NoContent> {
    toggle_thread(&state, &auth, &thread_id, ReactionKind::Like).await
}

/// Toggle a dislike on a thread
///
/// POST /threads/{thread_id}/dislike
pub async fn dislike_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<NoContent> {
    toggle_thread(&state, &auth, &thread_id, ReactionKind::Dislike).await
}

/// Toggle a like on a comment
///
/// POST /threads/{thread_id}/comments/{comment_id}/like
pub async fn like_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<(String, String)>,
) -> ApiResult<NoContent> {
    toggle_comment(&state, &auth, &path, ReactionKind::Like).await
}

/// Toggle a dislike on a comment
///
/// POST /threads/{thread_id}/comments/{comment_id}/dislike
pub async fn dislike_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<(String, String)>,
) -> ApiResult<NoContent> {
    toggle_comment(&state, &auth, &path, ReactionKind::Dislike).await
}

/// Toggle a like on a reply
///
/// POST /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}/like
pub async fn like_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<(String, String, String)>,
) -> ApiResult<NoContent> {
    toggle_reply(&state, &auth, &path, ReactionKind::Like).await
}

/// Toggle a dislike on a reply
///
/// POST /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}/dislike
pub async fn dislike_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<(String, String, String)>,
) -> ApiResult<NoContent> {
    toggle_reply(&state, &auth, &path, ReactionKind::Dislike).await
}

async fn toggle_thread(
    state: &AppState,
    auth: &AuthUser,
    thread_id: &str,
    kind: ReactionKind,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(thread_id, "thread_id")?;

    let service = ReactionService::new(state.service_context());
    service.toggle_thread(&auth.actor, thread_id, kind).await?;
    Ok(NoContent)
}

async fn toggle_comment(
    state: &AppState,
    auth: &AuthUser,
    (thread_id, comment_id): &(String, String),
    kind: ReactionKind,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(thread_id, "thread_id")?;
    let comment_id = parse_id(comment_id, "comment_id")?;

    let service = ReactionService::new(state.service_context());
    service
        .toggle_comment(&auth.actor, thread_id, comment_id, kind)
        .await?;
    Ok(NoContent)
}

async fn toggle_reply(
    state: &AppState,
    auth: &AuthUser,
    (thread_id, comment_id, reply_id): &(String, String, String),
    kind: ReactionKind,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(thread_id, "thread_id")?;
    let comment_id = parse_id(comment_id, "comment_id")?;
    let reply_id = parse_id(reply_id, "reply_id")?;

    let service = ReactionService::new(state.service_context());
    service
        .toggle_reply(&auth.actor, thread_id, comment_id, reply_id, kind)
        .await?;
    Ok(NoContent)
}
