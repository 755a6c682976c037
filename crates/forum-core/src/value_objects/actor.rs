//! Actor identity context
//!
//! Supplied by the authenticated session for every state-changing call; the
//! core trusts these values as already verified.

use uuid::Uuid;

/// Authenticated identity performing an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

impl Actor {
    pub fn new(id: Uuid, email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_creation() {
        let id = Uuid::new_v4();
        let actor = Actor::new(id, "cat@example.com", "cat");
        assert_eq!(actor.id, id);
        assert_eq!(actor.email, "cat@example.com");
        assert_eq!(actor.username, "cat");
    }
}
