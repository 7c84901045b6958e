use anyhow::Context as _;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use cafehop_session::cookie::{clear_session_cookie, set_session_cookie};
use cafehop_session::flash::push_flash;
use cafehop_session::token::issue_session_token;

use crate::domain::types::Customer;
use crate::error::WebServiceError;
use crate::forms::{LoginForm, RegisterForm, check};
use crate::guard::Viewer;
use crate::state::AppState;
use crate::usecase::account::{LoginUseCase, RegisterUseCase};
use crate::views::{FormView, render, render_with_status};

pub const EMAIL_ALREADY_REGISTERED: &str =
    "You've already signed up with that email, log in instead!";
pub const INVALID_CREDENTIALS: &str = "Incorrect email or password, please try again.";

const REGISTER_FORM: &str = "register";
const LOGIN_FORM: &str = "login";

fn start_session(
    jar: CookieJar,
    state: &AppState,
    customer: &Customer,
) -> Result<CookieJar, WebServiceError> {
    let (token, _) = issue_session_token(
        customer.id,
        &customer.name,
        customer.role,
        &state.session.secret,
    )
    .context("issue session token")?;
    Ok(set_session_cookie(jar, token, state.session.secure_cookies))
}

// ── GET /register ────────────────────────────────────────────────────────────

pub async fn register_form(viewer: Viewer, jar: CookieJar) -> Response {
    render(jar, &viewer, FormView::empty(REGISTER_FORM))
}

// ── POST /register ───────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, WebServiceError> {
    if let Err(errors) = check(&form) {
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            &viewer,
            FormView::invalid(REGISTER_FORM, errors),
        ));
    }

    let usecase = RegisterUseCase {
        repo: state.customer_repo(),
    };
    match usecase.execute(form.into()).await {
        Ok(customer) => {
            let jar = start_session(jar, &state, &customer)?;
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(WebServiceError::EmailAlreadyRegistered) => {
            let jar = push_flash(jar, EMAIL_ALREADY_REGISTERED);
            Ok((jar, Redirect::to("/login")).into_response())
        }
        Err(e) => Err(e),
    }
}

// ── GET /login ───────────────────────────────────────────────────────────────

pub async fn login_form(viewer: Viewer, jar: CookieJar) -> Response {
    render(jar, &viewer, FormView::empty(LOGIN_FORM))
}

// ── POST /login ──────────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebServiceError> {
    if let Err(errors) = check(&form) {
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            &viewer,
            FormView::invalid(LOGIN_FORM, errors),
        ));
    }

    let usecase = LoginUseCase {
        repo: state.customer_repo(),
    };
    match usecase.execute(form.into()).await {
        Ok(customer) => {
            let jar = start_session(jar, &state, &customer)?;
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(WebServiceError::InvalidCredentials) => {
            let jar = push_flash(jar, INVALID_CREDENTIALS);
            Ok((jar, Redirect::to("/login")).into_response())
        }
        Err(e) => Err(e),
    }
}

// ── GET /logout ──────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let jar = clear_session_cookie(jar, state.session.secure_cookies);
    (jar, Redirect::to("/")).into_response()
}
