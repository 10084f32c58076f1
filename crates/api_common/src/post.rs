use devshare_db_schema::{
  newtypes::{CommunityId, PostId},
  source::tag::Tag,
};
use devshare_db_views::structs::{CommentView, PostView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a post.
pub struct CreatePost {
  pub title: String,
  /// The body of the post, in markdown. The first image in it becomes the post image.
  pub content: String,
  pub community_id: Option<CommunityId>,
  pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post_view: PostView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Get a post.
pub struct GetPost {
  pub id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The post detail, with all of its comments.
pub struct GetPostResponse {
  pub post_view: PostView,
  pub comments: Vec<CommentView>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Get a list of posts, newest first.
pub struct GetPosts {
  /// Case-insensitive community name.
  pub community_name: Option<String>,
  /// Case-insensitive creator name.
  pub creator_name: Option<String>,
  /// Matches titles, contents and tag names.
  pub search: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPostsResponse {
  pub posts: Vec<PostView>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Edit a post. Only the author can do this.
pub struct EditPost {
  pub post_id: PostId,
  pub title: Option<String>,
  pub content: Option<String>,
  /// An empty string removes the image.
  pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Delete a post. Only the author can do this.
pub struct DeletePost {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeletePostResponse {
  pub post_id: PostId,
  pub deleted: bool,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListSavedPosts {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListTagsResponse {
  pub tags: Vec<Tag>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Flips your upvote on a post. Removes a downvote first.
pub struct UpvotePost {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Flips your downvote on a post. Removes an upvote first.
pub struct DownvotePost {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Flips whether the post is in your saved list.
pub struct SavePost {
  pub post_id: PostId,
}
