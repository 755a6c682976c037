//! Thread handlers
//!
//! Endpoints for thread CRUD and the cursor-paginated listing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use forum_service::{
    CreateThreadRequest, ListThreadsRequest, ThreadListResponse, ThreadResponse, ThreadService,
    UpdateThreadRequest,
};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Create a thread
///
/// POST /threads
pub async fn create_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateThreadRequest>,
) -> ApiResult<Created<Json<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let thread = service.create_thread(&auth.actor, request).await?;
    Ok(Created(Json(thread)))
}

/// List threads, newest-first or trending, resumable via cursor
///
/// GET /threads?limit=&cursor=&is_trending=&search=&author_id=
pub async fn list_threads(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(request): Query<ListThreadsRequest>,
) -> ApiResult<Json<ThreadListResponse>> {
    let service = ThreadService::new(state.service_context());
    let page = service.get_thread_list(&auth.actor, request).await?;
    Ok(Json(page))
}

/// Get thread detail with the viewer's current reaction
///
/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread_id = parse_id(&thread_id, "thread_id")?;

    let service = ThreadService::new(state.service_context());
    let thread = service.get_thread_detail(&auth.actor, thread_id).await?;
    Ok(Json(thread))
}

/// Edit a thread (author only)
///
/// PATCH /threads/{thread_id}
pub async fn update_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    Json(request): Json<UpdateThreadRequest>,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(&thread_id, "thread_id")?;

    let service = ThreadService::new(state.service_context());
    service.update_thread(&auth.actor, thread_id, request).await?;
    Ok(NoContent)
}

/// Soft delete a thread (author only)
///
/// DELETE /threads/{thread_id}
pub async fn delete_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<NoContent> {
    let thread_id = parse_id(&thread_id, "thread_id")?;

    let service = ThreadService::new(state.service_context());
    service.delete_thread(&auth.actor, thread_id).await?;
    Ok(NoContent)
}
