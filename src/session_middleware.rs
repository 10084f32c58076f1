use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::{HeaderValue, AUTHORIZATION, CACHE_CONTROL},
  Error,
  HttpMessage,
};
use core::future::Ready;
use devshare_api_common::{context::DevshareContext, utils::blocking};
use devshare_db_schema::newtypes::PersonId;
use devshare_db_views::structs::LocalUserView;
use devshare_utils::{
  claims::Claims,
  error::{DevshareErrorExt, DevshareErrorType, DevshareResult},
};
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc};

static BEARER_PREFIX: &str = "Bearer ";

/// Attaches the logged in user of a request, if any.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: DevshareContext,
}

impl SessionMiddleware {
  /// Middleware resolving tokens against the database of `context`.
  pub fn new(context: DevshareContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

#[doc(hidden)]
pub struct SessionService<S> {
  service: Rc<S>,
  context: DevshareContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .map(str::to_string);

      if let Some(jwt) = &jwt {
        // An invalid token leaves the request anonymous. Handlers which need a login reject it
        // with NotLoggedIn.
        match local_user_view_from_jwt(jwt, &context).await {
          Ok(local_user_view) => {
            req.extensions_mut().insert(local_user_view);
          }
          Err(e) => tracing::debug!("Ignoring invalid auth token: {}", e.error_type),
        }
      }

      let mut res = svc.call(req).await?;

      // Responses for a logged in user depend on who asks, so they may never be shared.
      let cache_value = if jwt.is_some() {
        "private"
      } else {
        "public, max-age=60"
      };
      res
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_value));
      Ok(res)
    })
  }
}

#[tracing::instrument(skip_all)]
async fn local_user_view_from_jwt(
  jwt: &str,
  context: &DevshareContext,
) -> DevshareResult<LocalUserView> {
  let claims = Claims::validate(jwt, &context.settings().jwt_secret)?.claims;
  let person_id = PersonId(claims.person_id()?);
  blocking(context.pool(), move |conn| {
    LocalUserView::read_person(conn, person_id)
  })
  .await?
  .not_found_as(DevshareErrorType::NotLoggedIn)
}

#[cfg(test)]
mod tests {
  use super::*;
  use devshare_db_schema::{
    source::{
      local_user::{LocalUser, LocalUserInsertForm},
      person::{Person, PersonInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_token_resolves_to_its_person() -> DevshareResult<()> {
    let context = DevshareContext::create(build_db_pool_for_tests()?);
    let person = blocking(context.pool(), |conn| {
      let person = Person::create(conn, &PersonInsertForm {
        name: "Gerry9812".into(),
        ..Default::default()
      })?;
      LocalUser::create(conn, &LocalUserInsertForm {
        person_id: person.id,
        password_encrypted: "123456".into(),
        email: None,
      })?;
      Ok(person) as DevshareResult<Person>
    })
    .await??;

    let settings = context.settings();
    let jwt = Claims::generate(person.id.0, &settings.hostname, &settings.jwt_secret)?;
    let local_user_view = local_user_view_from_jwt(&jwt, &context).await?;
    assert_eq!(person, local_user_view.person);

    let forged = Claims::generate(person.id.0, &settings.hostname, "some other secret")?;
    let err = local_user_view_from_jwt(&forged, &context)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotLoggedIn), err);

    // A valid signature for somebody who doesn't exist
    let ghost = Claims::generate(person.id.0 + 1, &settings.hostname, &settings.jwt_secret)?;
    let err = local_user_view_from_jwt(&ghost, &context)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(DevshareErrorType::NotLoggedIn), err);
    Ok(())
  }
}
