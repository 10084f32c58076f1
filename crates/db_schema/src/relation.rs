use crate::{
  newtypes::{CommunityId, PersonId, PostId},
  schema::{
    community_member,
    community_mute,
    community_notify,
    person_follower,
    post_like,
    post_saved,
  },
  source::{
    community::{
      Community,
      CommunityMember,
      CommunityMemberForm,
      CommunityMute,
      CommunityMuteForm,
      CommunityNotify,
      CommunityNotifyForm,
    },
    person::{Person, PersonFollower, PersonFollowerForm},
    post::{Post, PostLike, PostLikeForm, PostSaved, PostSavedForm},
  },
  traits::{Blockable, Crud, Followable, Joinable, Likeable, Saveable, Subscribable},
};
use devshare_utils::error::{DevshareError, DevshareErrorType, DevshareResult, NotFoundExt};
use diesel::{dsl::exists, select, ExpressionMethods, QueryDsl, RunQueryDsl, SqliteConnection};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Every association a person can switch on and off.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Relation {
  Follow,
  Upvote,
  Downvote,
  Save,
  Join,
  Mute,
  Notify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TargetKind {
  Person,
  Post,
  Community,
}

/// The object of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum RelationTarget {
  Person(PersonId),
  Post(PostId),
  Community(CommunityId),
}

impl RelationTarget {
  pub fn kind(&self) -> TargetKind {
    match self {
      RelationTarget::Person(_) => TargetKind::Person,
      RelationTarget::Post(_) => TargetKind::Post,
      RelationTarget::Community(_) => TargetKind::Community,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToggleState {
  On,
  Off,
}

impl From<bool> for ToggleState {
  fn from(on: bool) -> Self {
    if on {
      ToggleState::On
    } else {
      ToggleState::Off
    }
  }
}

struct RelationEntry {
  target: TargetKind,
  exclusive_with: Option<Relation>,
}

impl Relation {
  const fn entry(self) -> RelationEntry {
    use Relation::*;
    match self {
      Follow => RelationEntry {
        target: TargetKind::Person,
        exclusive_with: None,
      },
      Upvote => RelationEntry {
        target: TargetKind::Post,
        exclusive_with: Some(Downvote),
      },
      Downvote => RelationEntry {
        target: TargetKind::Post,
        exclusive_with: Some(Upvote),
      },
      Save => RelationEntry {
        target: TargetKind::Post,
        exclusive_with: None,
      },
      Join | Mute | Notify => RelationEntry {
        target: TargetKind::Community,
        exclusive_with: None,
      },
    }
  }

  pub fn target_kind(self) -> TargetKind {
    self.entry().target
  }

  /// The relation which gets cleared for the same pair before this one changes.
  pub fn exclusive_partner(self) -> Option<Relation> {
    self.entry().exclusive_with
  }

  pub fn is_vote(self) -> bool {
    matches!(self, Relation::Upvote | Relation::Downvote)
  }

  /// Whether `subject` currently holds this relation towards `target`.
  pub fn holds(
    self,
    conn: &mut SqliteConnection,
    subject: PersonId,
    target: RelationTarget,
  ) -> DevshareResult<bool> {
    let held: bool = match (self, target) {
      (Relation::Follow, RelationTarget::Person(person_id)) => select(exists(
        person_follower::table
          .filter(person_follower::follower_id.eq(subject))
          .filter(person_follower::person_id.eq(person_id)),
      ))
      .get_result(conn)?,
      (Relation::Upvote | Relation::Downvote, RelationTarget::Post(post_id)) => select(exists(
        post_like::table
          .filter(post_like::post_id.eq(post_id))
          .filter(post_like::person_id.eq(subject))
          .filter(post_like::score.eq(self.vote_score())),
      ))
      .get_result(conn)?,
      (Relation::Save, RelationTarget::Post(post_id)) => select(exists(
        post_saved::table
          .filter(post_saved::post_id.eq(post_id))
          .filter(post_saved::person_id.eq(subject)),
      ))
      .get_result(conn)?,
      (Relation::Join, RelationTarget::Community(community_id)) => select(exists(
        community_member::table
          .filter(community_member::community_id.eq(community_id))
          .filter(community_member::person_id.eq(subject)),
      ))
      .get_result(conn)?,
      (Relation::Mute, RelationTarget::Community(community_id)) => select(exists(
        community_mute::table
          .filter(community_mute::community_id.eq(community_id))
          .filter(community_mute::person_id.eq(subject)),
      ))
      .get_result(conn)?,
      (Relation::Notify, RelationTarget::Community(community_id)) => select(exists(
        community_notify::table
          .filter(community_notify::community_id.eq(community_id))
          .filter(community_notify::person_id.eq(subject)),
      ))
      .get_result(conn)?,
      _ => Err(DevshareErrorType::InvalidRelationTarget)?,
    };
    Ok(held)
  }

  fn vote_score(self) -> i16 {
    if self == Relation::Downvote {
      -1
    } else {
      1
    }
  }

  fn insert(
    self,
    conn: &mut SqliteConnection,
    subject: PersonId,
    target: RelationTarget,
  ) -> DevshareResult<()> {
    match (self, target) {
      (Relation::Follow, RelationTarget::Person(person_id)) => {
        PersonFollower::follow(conn, &PersonFollowerForm {
          person_id,
          follower_id: subject,
        })?;
      }
      (Relation::Upvote | Relation::Downvote, RelationTarget::Post(post_id)) => {
        PostLike::like(conn, &PostLikeForm {
          post_id,
          person_id: subject,
          score: self.vote_score(),
        })?;
      }
      (Relation::Save, RelationTarget::Post(post_id)) => {
        PostSaved::save(conn, &PostSavedForm {
          post_id,
          person_id: subject,
        })?;
      }
      (Relation::Join, RelationTarget::Community(community_id)) => {
        CommunityMember::join(conn, &CommunityMemberForm {
          community_id,
          person_id: subject,
        })?;
      }
      (Relation::Mute, RelationTarget::Community(community_id)) => {
        CommunityMute::block(conn, &CommunityMuteForm {
          community_id,
          person_id: subject,
        })?;
      }
      (Relation::Notify, RelationTarget::Community(community_id)) => {
        CommunityNotify::subscribe(conn, &CommunityNotifyForm {
          community_id,
          person_id: subject,
        })?;
      }
      _ => Err(DevshareErrorType::InvalidRelationTarget)?,
    }
    Ok(())
  }

  fn remove(
    self,
    conn: &mut SqliteConnection,
    subject: PersonId,
    target: RelationTarget,
  ) -> DevshareResult<()> {
    match (self, target) {
      (Relation::Follow, RelationTarget::Person(person_id)) => {
        PersonFollower::unfollow(conn, &PersonFollowerForm {
          person_id,
          follower_id: subject,
        })?;
      }
      (Relation::Upvote | Relation::Downvote, RelationTarget::Post(post_id)) => {
        PostLike::remove(conn, &PostLikeForm {
          post_id,
          person_id: subject,
          score: self.vote_score(),
        })?;
      }
      (Relation::Save, RelationTarget::Post(post_id)) => {
        PostSaved::unsave(conn, &PostSavedForm {
          post_id,
          person_id: subject,
        })?;
      }
      (Relation::Join, RelationTarget::Community(community_id)) => {
        CommunityMember::leave(conn, &CommunityMemberForm {
          community_id,
          person_id: subject,
        })?;
      }
      (Relation::Mute, RelationTarget::Community(community_id)) => {
        CommunityMute::unblock(conn, &CommunityMuteForm {
          community_id,
          person_id: subject,
        })?;
      }
      (Relation::Notify, RelationTarget::Community(community_id)) => {
        CommunityNotify::unsubscribe(conn, &CommunityNotifyForm {
          community_id,
          person_id: subject,
        })?;
      }
      _ => Err(DevshareErrorType::InvalidRelationTarget)?,
    }
    Ok(())
  }

  /// Checks which apply no matter if the relation gets switched on or off.
  fn check(
    self,
    conn: &mut SqliteConnection,
    subject: PersonId,
    target: RelationTarget,
  ) -> DevshareResult<()> {
    if self.target_kind() != target.kind() {
      Err(DevshareErrorType::InvalidRelationTarget)?
    }
    match target {
      RelationTarget::Person(person_id) => {
        read_target(Person::read(conn, person_id), DevshareErrorType::CouldntFindPerson)?;
        if person_id == subject {
          Err(DevshareErrorType::CantFollowYourself)?
        }
      }
      RelationTarget::Post(post_id) => {
        read_target(Post::read(conn, post_id), DevshareErrorType::CouldntFindPost)?;
      }
      RelationTarget::Community(community_id) => {
        read_target(
          Community::read(conn, community_id),
          DevshareErrorType::CouldntFindCommunity,
        )?;
      }
    }
    Ok(())
  }

  /// The owner of a community is always one of its members.
  fn check_removal(
    self,
    conn: &mut SqliteConnection,
    subject: PersonId,
    target: RelationTarget,
  ) -> DevshareResult<()> {
    if let (Relation::Join, RelationTarget::Community(community_id)) = (self, target) {
      let community = Community::read(conn, community_id)?;
      if community.owner_id == subject {
        Err(DevshareErrorType::OwnerCannotLeaveCommunity)?
      }
    }
    Ok(())
  }
}

fn read_target<T>(
  res: Result<T, diesel::result::Error>,
  not_found: DevshareErrorType,
) -> DevshareResult<T> {
  res.map_err(DevshareError::from).not_found_as(not_found)
}

/// Flips the relation between `subject` and `target`: removes the pair when it is present,
/// inserts it otherwise. An exclusive partner relation on the same pair is cleared first.
pub fn toggle(
  conn: &mut SqliteConnection,
  subject: PersonId,
  target: RelationTarget,
  relation: Relation,
) -> DevshareResult<ToggleState> {
  relation.check(conn, subject, target)?;
  if relation.holds(conn, subject, target)? {
    relation.check_removal(conn, subject, target)?;
    relation.remove(conn, subject, target)?;
    Ok(ToggleState::Off)
  } else {
    if let Some(partner) = relation.exclusive_partner() {
      partner.remove(conn, subject, target)?;
    }
    relation.insert(conn, subject, target)?;
    Ok(ToggleState::On)
  }
}

/// Like [toggle], but forces the given state. Setting a state which already holds changes
/// nothing.
pub fn set(
  conn: &mut SqliteConnection,
  subject: PersonId,
  target: RelationTarget,
  relation: Relation,
  on: bool,
) -> DevshareResult<ToggleState> {
  relation.check(conn, subject, target)?;
  let held = relation.holds(conn, subject, target)?;
  if on {
    if !held {
      if let Some(partner) = relation.exclusive_partner() {
        partner.remove(conn, subject, target)?;
      }
      relation.insert(conn, subject, target)?;
    }
  } else if held {
    relation.check_removal(conn, subject, target)?;
    relation.remove(conn, subject, target)?;
  }
  Ok(ToggleState::from(on))
}
