use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use diesel::result::DatabaseErrorKind;
use serde::{Deserialize, Serialize};
use std::{
  backtrace::Backtrace,
  fmt::{self, Debug},
};
use strum::{Display, EnumIter};

pub type DevshareResult<T> = Result<T, DevshareError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DevshareErrorType {
  NotFound,
  CouldntFindPerson,
  CouldntFindCommunity,
  CouldntFindPost,
  CouldntFindComment,
  CouldntFindNotification,
  NotLoggedIn,
  IncorrectLogin,
  NotAnAdmin,
  NotCommunityOwner,
  NoPostEditAllowed,
  NoCommentEditAllowed,
  NotYourNotification,
  CantFollowYourself,
  OwnerCannotLeaveCommunity,
  InvalidRelationTarget,
  CommunityRequired,
  /// Name must be 3 to 20 characters of letters, digits or underscores
  InvalidName,
  /// Password must be between 8 and 60 characters
  InvalidPassword,
  InvalidPostTitle,
  InvalidBodyField,
  InvalidCommunityDescription,
  BioLengthOverflow,
  InvalidUrl,
  UsernameAlreadyExists,
  CommunityAlreadyExists,
  EmailAlreadyExists,
  ParentCommentNotOnPost,
  NoProfileChanges,
  InvalidPage,
  InvalidLimit,
  CouldntCreatePost,
  CouldntUpdatePost,
  CouldntCreateComment,
  CouldntUpdateComment,
  CouldntCreateCommunity,
  CouldntUpdateCommunity,
  CouldntUpdateProfile,
  CouldntUpdateRelation,
  CouldntMarkNotificationsRead,
  DatabaseError,
  Unknown(String),
}

/// The five outcome classes every error type belongs to. They never overlap.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  NotFound,
  Unauthorized,
  Forbidden,
  InvalidOperation,
  UpstreamFailure,
}

impl DevshareErrorType {
  pub fn kind(&self) -> ErrorKind {
    use DevshareErrorType::*;
    match self {
      NotFound
      | CouldntFindPerson
      | CouldntFindCommunity
      | CouldntFindPost
      | CouldntFindComment
      | CouldntFindNotification => ErrorKind::NotFound,
      NotLoggedIn | IncorrectLogin => ErrorKind::Unauthorized,
      NotAnAdmin
      | NotCommunityOwner
      | NoPostEditAllowed
      | NoCommentEditAllowed
      | NotYourNotification => ErrorKind::Forbidden,
      CouldntCreatePost
      | CouldntUpdatePost
      | CouldntCreateComment
      | CouldntUpdateComment
      | CouldntCreateCommunity
      | CouldntUpdateCommunity
      | CouldntUpdateProfile
      | CouldntUpdateRelation
      | CouldntMarkNotificationsRead
      | DatabaseError
      | Unknown(_) => ErrorKind::UpstreamFailure,
      _ => ErrorKind::InvalidOperation,
    }
  }
}

pub struct DevshareError {
  pub error_type: DevshareErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl DevshareError {
  pub fn kind(&self) -> ErrorKind {
    self.error_type.kind()
  }

  pub fn is_unique_violation(&self) -> bool {
    matches!(
      self.inner.downcast_ref::<diesel::result::Error>(),
      Some(diesel::result::Error::DatabaseError(
        DatabaseErrorKind::UniqueViolation,
        _
      ))
    )
  }
}

impl<T> From<T> for DevshareError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => DevshareErrorType::NotFound,
      _ => DevshareErrorType::Unknown(format!("{}", &cause)),
    };
    DevshareError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for DevshareError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DevshareError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for DevshareError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl ResponseError for DevshareError {
  fn status_code(&self) -> StatusCode {
    match self.kind() {
      ErrorKind::NotFound => StatusCode::NOT_FOUND,
      ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
      ErrorKind::Forbidden => StatusCode::FORBIDDEN,
      ErrorKind::InvalidOperation => StatusCode::BAD_REQUEST,
      ErrorKind::UpstreamFailure => StatusCode::SERVICE_UNAVAILABLE,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<DevshareErrorType> for DevshareError {
  fn from(error_type: DevshareErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    DevshareError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait DevshareErrorExt<T, E: Into<anyhow::Error>> {
  fn with_devshare_type(self, error_type: DevshareErrorType) -> DevshareResult<T>;
  /// Lookups which found nothing get `error_type`, every other failure is converted as usual.
  fn not_found_as(self, error_type: DevshareErrorType) -> DevshareResult<T>;
}

impl<T, E: Into<anyhow::Error>> DevshareErrorExt<T, E> for Result<T, E> {
  fn with_devshare_type(self, error_type: DevshareErrorType) -> DevshareResult<T> {
    self.map_err(|error| DevshareError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }

  fn not_found_as(self, error_type: DevshareErrorType) -> DevshareResult<T> {
    NotFoundExt::not_found_as(self.map_err(DevshareError::from), error_type)
  }
}

pub trait DevshareErrorExt2<T> {
  fn with_devshare_type(self, error_type: DevshareErrorType) -> DevshareResult<T>;
  /// Writes rejected by a unique index get `error_type`, every other failure passes through.
  fn unique_violation_as(self, error_type: DevshareErrorType) -> DevshareResult<T>;
}

impl<T> DevshareErrorExt2<T> for DevshareResult<T> {
  fn with_devshare_type(self, error_type: DevshareErrorType) -> DevshareResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }

  fn unique_violation_as(self, error_type: DevshareErrorType) -> DevshareResult<T> {
    self.map_err(|mut e| {
      if e.is_unique_violation() {
        e.error_type = error_type;
      }
      e
    })
  }
}

/// Keeps the error type of lookups that failed with "not found", and replaces it with the more
/// specific one. Any other failure passes through untouched.
pub trait NotFoundExt<T> {
  fn not_found_as(self, error_type: DevshareErrorType) -> DevshareResult<T>;
}

impl<T> NotFoundExt<T> for DevshareResult<T> {
  fn not_found_as(self, error_type: DevshareErrorType) -> DevshareResult<T> {
    self.map_err(|mut e| {
      if e.error_type == DevshareErrorType::NotFound {
        e.error_type = error_type;
      }
      e
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::MessageBody;
  use pretty_assertions::assert_eq;
  use strum::IntoEnumIterator;

  #[test]
  fn deserializes_no_message() -> DevshareResult<()> {
    let err = DevshareError::from(DevshareErrorType::CantFollowYourself).error_response();
    let json = String::from_utf8(
      err
        .into_body()
        .try_into_bytes()
        .unwrap_or_default()
        .to_vec(),
    )?;
    assert_eq!(&json, "{\"error\":\"cant_follow_yourself\"}");

    Ok(())
  }

  #[test]
  fn deserializes_with_message() -> DevshareResult<()> {
    let unknown = DevshareErrorType::Unknown(String::from("reason"));
    let err = DevshareError::from(unknown).error_response();
    let json = String::from_utf8(
      err
        .into_body()
        .try_into_bytes()
        .unwrap_or_default()
        .to_vec(),
    )?;
    assert_eq!(&json, "{\"error\":\"unknown\",\"message\":\"reason\"}");

    Ok(())
  }

  #[test]
  fn test_convert_diesel_errors() {
    let not_found_error = DevshareError::from(diesel::NotFound);
    assert_eq!(DevshareErrorType::NotFound, not_found_error.error_type);
    assert_eq!(404, not_found_error.status_code());

    let other_error = DevshareError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(
      other_error.error_type,
      DevshareErrorType::Unknown { .. }
    ));
    assert_eq!(503, other_error.status_code());
  }

  #[test]
  fn test_status_per_kind() {
    let cases = [
      (DevshareErrorType::CouldntFindPost, 404),
      (DevshareErrorType::NotLoggedIn, 401),
      (DevshareErrorType::NotAnAdmin, 403),
      (DevshareErrorType::OwnerCannotLeaveCommunity, 400),
      (DevshareErrorType::DatabaseError, 503),
    ];
    for (error_type, status) in cases {
      assert_eq!(status, DevshareError::from(error_type).status_code());
    }
  }

  #[test]
  fn test_failed_writes_are_upstream_failures() {
    let writes = [
      DevshareErrorType::CouldntCreatePost,
      DevshareErrorType::CouldntUpdateComment,
      DevshareErrorType::CouldntCreateCommunity,
      DevshareErrorType::CouldntUpdateProfile,
      DevshareErrorType::CouldntUpdateRelation,
      DevshareErrorType::CouldntMarkNotificationsRead,
    ];
    for error_type in writes {
      assert_eq!(ErrorKind::UpstreamFailure, error_type.kind());
      assert_eq!(503, DevshareError::from(error_type).status_code());
    }
  }

  #[test]
  fn test_lookup_failures_keep_their_kind() {
    let missing: Result<(), diesel::result::Error> = Err(diesel::NotFound);
    let err = missing
      .not_found_as(DevshareErrorType::CouldntFindComment)
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CouldntFindComment), err);

    let broken: Result<(), diesel::result::Error> = Err(diesel::result::Error::NotInTransaction);
    let err = broken
      .not_found_as(DevshareErrorType::CouldntFindComment)
      .err()
      .map(|e| e.kind());
    assert_eq!(Some(ErrorKind::UpstreamFailure), err);
  }

  #[test]
  fn test_relation_errors_are_invalid_operations() {
    for e in DevshareErrorType::iter() {
      if matches!(
        e,
        DevshareErrorType::CantFollowYourself
          | DevshareErrorType::OwnerCannotLeaveCommunity
          | DevshareErrorType::InvalidRelationTarget
          | DevshareErrorType::CommunityRequired
      ) {
        assert_eq!(ErrorKind::InvalidOperation, e.kind());
      }
    }
  }

  #[test]
  fn test_unique_violation_as() {
    let conflict = diesel::result::Error::DatabaseError(
      DatabaseErrorKind::UniqueViolation,
      Box::new(String::from("UNIQUE constraint failed: community.name")),
    );
    let res: DevshareResult<()> = Err(conflict.into());
    let err = res
      .unique_violation_as(DevshareErrorType::CommunityAlreadyExists)
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CommunityAlreadyExists), err);

    let res: DevshareResult<()> = Err(diesel::NotFound.into());
    let err = res
      .unique_violation_as(DevshareErrorType::CommunityAlreadyExists)
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotFound), err);
  }

  #[test]
  fn test_not_found_as() {
    let res: DevshareResult<()> = Err(diesel::NotFound.into());
    let err = res
      .not_found_as(DevshareErrorType::CouldntFindPost)
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::CouldntFindPost), err);

    let res: DevshareResult<()> = Err(DevshareErrorType::NotAnAdmin.into());
    let err = res
      .not_found_as(DevshareErrorType::CouldntFindPost)
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotAnAdmin), err);
  }
}
