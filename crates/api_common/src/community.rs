use devshare_db_schema::newtypes::CommunityId;
use devshare_db_views::structs::{CommunityMemberView, CommunityView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a community. The creator becomes its owner and first member.
pub struct CreateCommunity {
  /// The unique name.
  pub name: String,
  pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommunityResponse {
  pub community_view: CommunityView,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Get a community by name.
pub struct GetCommunity {
  pub name: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Fetches a list of communities.
pub struct ListCommunities {
  /// Only the communities you joined. Requires a login.
  pub joined: Option<bool>,
  /// Matches community names.
  pub search: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListCommunitiesResponse {
  pub communities: Vec<CommunityView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Edit a community. Only the owner can do this.
pub struct EditCommunity {
  pub community_id: CommunityId,
  pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Delete a community, with all its posts. Only admins can do this.
pub struct DeleteCommunity {
  pub community_id: CommunityId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeleteCommunityResponse {
  pub community_id: CommunityId,
  pub deleted: bool,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListCommunityMembers {
  pub name: String,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListCommunityMembersResponse {
  pub members: Vec<CommunityMemberView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Join or leave a community.
pub struct JoinCommunity {
  pub community_id: CommunityId,
  pub join: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Flips whether comments in this community notify you.
pub struct MuteCommunity {
  pub community_id: CommunityId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Flips your notification subscription for this community.
pub struct NotifyCommunity {
  pub community_id: CommunityId,
}
