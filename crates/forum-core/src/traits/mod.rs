pub mod repositories;

pub use repositories::{
    CommentRepository, EngagementRepository, RepoResult, ThreadListQuery, ThreadOrder,
    ThreadRepository,
};
