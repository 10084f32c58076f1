use crate::error::{DevshareErrorExt, DevshareErrorType, DevshareResult};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

pub type Jwt = String;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// person_id, standard claim by RFC 7519.
  pub sub: String,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn validate(jwt: &str, secret: &str) -> DevshareResult<TokenData<Claims>> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    let key = DecodingKey::from_secret(secret.as_ref());
    decode::<Claims>(jwt, &key, &validation).with_devshare_type(DevshareErrorType::NotLoggedIn)
  }

  /// The person id carried by a validated token.
  pub fn person_id(&self) -> DevshareResult<i32> {
    self
      .sub
      .parse()
      .with_devshare_type(DevshareErrorType::NotLoggedIn)
  }

  pub fn generate(person_id: i32, hostname: &str, secret: &str) -> DevshareResult<Jwt> {
    let my_claims = Claims {
      sub: person_id.to_string(),
      iss: hostname.to_string(),
      iat: Utc::now().timestamp(),
    };
    let key = EncodingKey::from_secret(secret.as_ref());
    Ok(encode(&Header::default(), &my_claims, &key)?)
  }
}
