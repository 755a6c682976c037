//! Reaction targets
//!
//! Threads, comments, and replies share one toggle engine but separate
//! ledgers. The tagged variant carries exactly the ids each kind's ledger
//! lookup needs, so a comment lookup can never match a reply row or vice
//! versa.

use uuid::Uuid;

/// The entity a reaction is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTarget {
    Thread {
        thread_id: Uuid,
    },
    Comment {
        thread_id: Uuid,
        comment_id: Uuid,
    },
    Reply {
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
    },
}

impl ReactionTarget {
    pub const fn thread(thread_id: Uuid) -> Self {
        Self::Thread { thread_id }
    }

    pub const fn comment(thread_id: Uuid, comment_id: Uuid) -> Self {
        Self::Comment {
            thread_id,
            comment_id,
        }
    }

    pub const fn reply(thread_id: Uuid, comment_id: Uuid, reply_id: Uuid) -> Self {
        Self::Reply {
            thread_id,
            comment_id,
            reply_id,
        }
    }

    /// Kind discriminant
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::Thread { .. } => TargetKind::Thread,
            Self::Comment { .. } => TargetKind::Comment,
            Self::Reply { .. } => TargetKind::Reply,
        }
    }

    /// Thread every target ultimately belongs to
    pub const fn thread_id(&self) -> Uuid {
        match *self {
            Self::Thread { thread_id }
            | Self::Comment { thread_id, .. }
            | Self::Reply { thread_id, .. } => thread_id,
        }
    }
}

/// Target kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Thread,
    Comment,
    Reply,
}

impl TargetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Comment => "comment",
            Self::Reply => "reply",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminant() {
        let thread_id = Uuid::new_v4();
        let comment_id = Uuid::new_v4();
        let reply_id = Uuid::new_v4();

        assert_eq!(ReactionTarget::thread(thread_id).kind(), TargetKind::Thread);
        assert_eq!(
            ReactionTarget::comment(thread_id, comment_id).kind(),
            TargetKind::Comment
        );
        assert_eq!(
            ReactionTarget::reply(thread_id, comment_id, reply_id).kind(),
            TargetKind::Reply
        );
    }

    #[test]
    fn test_thread_id_accessor() {
        let thread_id = Uuid::new_v4();
        let target = ReactionTarget::reply(thread_id, Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(target.thread_id(), thread_id);
    }
}
