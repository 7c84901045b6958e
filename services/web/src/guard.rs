//! Session loading and route guards.
//!
//! `load_session` runs on every request and attaches the decoded [`Session`]
//! as a request extension. `require_login` and `require_admin` are applied per
//! route group with `route_layer`.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use cafehop_session::cookie::session_token;
use cafehop_session::flash::push_flash;
use cafehop_session::token::{Session, validate_session_token};

use crate::error::WebServiceError;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";

/// Secret and cookie flags for session handling.
#[derive(Clone)]
pub struct SessionKeys {
    pub secret: String,
    pub secure_cookies: bool,
}

/// Attach the session carried by the cookie, if it is valid and unexpired.
/// Requests without one pass through anonymously.
pub async fn load_session(
    State(keys): State<SessionKeys>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(&jar) {
        match validate_session_token(token, &keys.secret) {
            Ok(session) => {
                req.extensions_mut().insert(session);
            }
            Err(e) => tracing::debug!(error = %e, "ignoring session cookie"),
        }
    }
    next.run(req).await
}

/// Redirect anonymous visitors to the login page with a notice.
pub async fn require_login(jar: CookieJar, req: Request, next: Next) -> Response {
    if req.extensions().get::<Session>().is_none() {
        let jar = push_flash(jar, LOGIN_REQUIRED_MESSAGE);
        return (jar, Redirect::to("/login")).into_response();
    }
    next.run(req).await
}

/// Reject everyone but admins with 403.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, WebServiceError> {
    let is_admin = req
        .extensions()
        .get::<Session>()
        .is_some_and(Session::is_admin);
    if !is_admin {
        return Err(WebServiceError::Forbidden);
    }
    Ok(next.run(req).await)
}

/// The visitor behind the request: `Some` once `load_session` found a session.
#[derive(Debug, Clone, Default)]
pub struct Viewer(pub Option<Session>);

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = parts.extensions.get::<Session>().cloned();
        async move { Ok(Self(session)) }
    }
}
