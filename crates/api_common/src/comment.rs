use devshare_db_schema::newtypes::{CommentId, PostId};
use devshare_db_views::structs::CommentView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// Create a comment, or a reply to another comment of the same post.
pub struct CreateComment {
  pub content: String,
  pub parent_id: Option<CommentId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment_view: CommentView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Edit a comment. Only the author can do this.
pub struct EditComment {
  pub comment_id: CommentId,
  pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Delete a comment, with all replies to it. Only the author can do this.
pub struct DeleteComment {
  pub comment_id: CommentId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeleteCommentResponse {
  pub comment_id: CommentId,
  pub deleted: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// All comments of a post, oldest first.
pub struct ListCommentsResponse {
  pub post_id: PostId,
  pub comments: Vec<CommentView>,
}
