//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{comments, health, reactions, threads};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted outside the versioned prefix)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(thread_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
}

/// Thread routes
fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", post(threads::create_thread))
        .route("/threads", get(threads::list_threads))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id", patch(threads::update_thread))
        .route("/threads/:thread_id", delete(threads::delete_thread))
}

/// Comment and reply routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/threads/:thread_id/comments", get(comments::get_comments))
        .route("/threads/:thread_id/comments", post(comments::create_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            patch(comments::update_comment),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies",
            post(comments::create_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id",
            patch(comments::update_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id",
            delete(comments::delete_reply),
        )
}

/// Reaction toggle routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/threads/:thread_id/like", post(reactions::like_thread))
        .route("/threads/:thread_id/dislike", post(reactions::dislike_thread))
        .route(
            "/threads/:thread_id/comments/:comment_id/like",
            post(reactions::like_comment),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/dislike",
            post(reactions::dislike_comment),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id/like",
            post(reactions::like_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id/dislike",
            post(reactions::dislike_reply),
        )
}
