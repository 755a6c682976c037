//! API request handlers organized by domain

pub mod comments;
pub mod health;
pub mod reactions;
pub mod threads;

use uuid::Uuid;

use crate::response::ApiError;

/// Parse a path segment as a uuid
pub(crate) fn parse_id(raw: &str, name: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}
