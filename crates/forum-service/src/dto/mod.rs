pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateReplyRequest, CreateThreadRequest, ListThreadsRequest,
    UpdateCommentRequest, UpdateReplyRequest, UpdateThreadRequest,
};
pub use responses::{CommentResponse, ReplyResponse, ThreadListResponse, ThreadResponse};
