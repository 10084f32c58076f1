use crate::error::{DevshareErrorType, DevshareResult};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const ALLOWED_URL_SCHEMES: [&str; 2] = ["http", "https"];

const BODY_MAX_LENGTH: usize = 10000;
const POST_BODY_MAX_LENGTH: usize = 50000;
const BIO_MAX_LENGTH: usize = 1000;
const URL_MAX_LENGTH: usize = 2000;
const COMMUNITY_DESCRIPTION_MAX_LENGTH: usize = 500;
const ACTOR_NAME_MIN_LENGTH: usize = 3;
const ACTOR_NAME_MAX_LENGTH: usize = 20;
const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 60;
const POST_TITLE_MAX_LENGTH: usize = 200;

fn has_newline(name: &str) -> bool {
  name.contains('\n')
}

/// Validates person and community names.
pub fn is_valid_actor_name(name: &str) -> DevshareResult<()> {
  #[allow(clippy::expect_used)]
  static VALID_ACTOR_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

  min_length_check(name, ACTOR_NAME_MIN_LENGTH, DevshareErrorType::InvalidName)?;
  max_length_check(name, ACTOR_NAME_MAX_LENGTH, DevshareErrorType::InvalidName)?;
  if VALID_ACTOR_NAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(DevshareErrorType::InvalidName.into())
  }
}

pub fn password_length_check(pass: &str) -> DevshareResult<()> {
  let len = pass.chars().count();
  if (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&len) {
    Ok(())
  } else {
    Err(DevshareErrorType::InvalidPassword.into())
  }
}

pub fn is_valid_post_title(title: &str) -> DevshareResult<()> {
  let length = title.trim().chars().count();
  let check = (1..=POST_TITLE_MAX_LENGTH).contains(&length) && !has_newline(title);
  if !check {
    Err(DevshareErrorType::InvalidPostTitle.into())
  } else {
    Ok(())
  }
}

/// This could be post bodies or comments
pub fn is_valid_body_field(body: &str, post: bool) -> DevshareResult<()> {
  if post {
    max_length_check(body, POST_BODY_MAX_LENGTH, DevshareErrorType::InvalidBodyField)
  } else {
    min_length_check(body.trim(), 1, DevshareErrorType::InvalidBodyField)?;
    max_length_check(body, BODY_MAX_LENGTH, DevshareErrorType::InvalidBodyField)
  }
}

pub fn is_valid_bio_field(bio: &str) -> DevshareResult<()> {
  max_length_check(bio, BIO_MAX_LENGTH, DevshareErrorType::BioLengthOverflow)
}

pub fn description_length_check(description: &str) -> DevshareResult<()> {
  max_length_check(
    description,
    COMMUNITY_DESCRIPTION_MAX_LENGTH,
    DevshareErrorType::InvalidCommunityDescription,
  )
}

/// Avatar and image urls are only stored, never fetched. They still have to be proper web links.
pub fn is_valid_url(url: &str) -> DevshareResult<()> {
  let parsed = Url::parse(url).map_err(|_| DevshareErrorType::InvalidUrl)?;
  if !ALLOWED_URL_SCHEMES.contains(&parsed.scheme()) {
    Err(DevshareErrorType::InvalidUrl)?
  }
  max_length_check(url, URL_MAX_LENGTH, DevshareErrorType::InvalidUrl)
}

/// Check maximum length of input string. If the string is too long, the given error is
/// returned.
///
/// Length is counted in UTF-16 code units, the same way HTML `maxlength` does.
fn max_length_check(
  item: &str,
  max_length: usize,
  max_msg: DevshareErrorType,
) -> DevshareResult<()> {
  let len = item.encode_utf16().count();
  if len > max_length {
    Err(max_msg.into())
  } else {
    Ok(())
  }
}

fn min_length_check(
  item: &str,
  min_length: usize,
  min_msg: DevshareErrorType,
) -> DevshareResult<()> {
  let len = item.encode_utf16().count();
  if len < min_length {
    Err(min_msg.into())
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_actor_name() {
    assert!(is_valid_actor_name("Hello_98").is_ok());
    assert!(is_valid_actor_name("ten").is_ok());
    assert!(is_valid_actor_name("abcdefghij0123456789").is_ok());

    // dash
    assert!(is_valid_actor_name("Hello-98").is_err());
    // too short
    assert!(is_valid_actor_name("ab").is_err());
    // too long
    assert!(is_valid_actor_name("abcdefghij0123456789x").is_err());
    // empty
    assert!(is_valid_actor_name("").is_err());
    assert!(is_valid_actor_name("Line1\nLine3").is_err());
    assert!(is_valid_actor_name("Владимир").is_err());
  }

  #[test]
  fn test_password_length() {
    assert!(password_length_check("12345678").is_ok());
    assert!(password_length_check("1234567").is_err());
    assert!(password_length_check(&"x".repeat(61)).is_err());
  }

  #[test]
  fn test_valid_post_title() {
    assert!(is_valid_post_title("Post Title").is_ok());
    assert!(is_valid_post_title("A").is_ok());
    assert!(is_valid_post_title("   POST TITLE 😃😃😃😃😃").is_ok());
    assert!(is_valid_post_title("\n \n \n \n    		").is_err());
    assert!(is_valid_post_title("").is_err());
    assert!(is_valid_post_title(&"t".repeat(200)).is_ok());
    assert!(is_valid_post_title(&"t".repeat(201)).is_err());
  }

  #[test]
  fn test_valid_body_field() {
    assert!(is_valid_body_field("", true).is_ok());
    assert!(is_valid_body_field("   ", false).is_err());
    assert!(is_valid_body_field("nice post", false).is_ok());
    assert!(is_valid_body_field(&"x".repeat(BODY_MAX_LENGTH + 1), false).is_err());
  }

  #[test]
  fn test_valid_bio() {
    assert!(is_valid_bio_field(&"A".repeat(BIO_MAX_LENGTH)).is_ok());
    assert!(is_valid_bio_field(&"A".repeat(BIO_MAX_LENGTH + 1))
      .is_err_and(|e| e.error_type.eq(&DevshareErrorType::BioLengthOverflow)));
  }

  #[test]
  fn test_check_url_valid() {
    assert!(is_valid_url("http://example.com/avatar.png").is_ok());
    assert!(is_valid_url("https://example.com").is_ok());
    assert!(is_valid_url("ftp://example.com")
      .is_err_and(|e| e.error_type.eq(&DevshareErrorType::InvalidUrl)));
    assert!(is_valid_url("javascript:void").is_err());
    assert!(is_valid_url("not a url").is_err());

    let long_url = format!("http://example.com/{}", "X".repeat(URL_MAX_LENGTH));
    assert!(is_valid_url(&long_url).is_err());
  }
}
