use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value};
use std::collections::BTreeMap;
use tower::ServiceExt;

use cafehop_session::cookie::CAFEHOP_SESSION;
use cafehop_session::flash::{CAFEHOP_FLASH, peek_flashes, push_flash};
use cafehop_session::token::validate_session_token;
use cafehop_testing::session::{MockSession, TEST_SESSION_SECRET};
use cafehop_web::guard::{LOGIN_REQUIRED_MESSAGE, SessionKeys};
use cafehop_web::handlers::account::{EMAIL_ALREADY_REGISTERED, INVALID_CREDENTIALS};
use cafehop_web::handlers::cafe::{CAFE_ALREADY_EXISTS, NO_CAFE_AT_LOCATION};
use cafehop_web::infra::mail::SesMailer;
use cafehop_web::router::build_router;
use cafehop_web::state::AppState;
use cafehop_web::usecase::account::hash_password;
use cafehop_web_schema::{cafe_menu_items, cafes, customers};

/// Router over a disconnected database: only routes that never reach storage
/// succeed, which is what guard and form tests need.
fn app() -> Router {
    app_with(DatabaseConnection::Disconnected)
}

/// Router over a sea-orm mock; queued results are consumed in query order.
fn app_with(db: DatabaseConnection) -> Router {
    let ses_config = aws_sdk_sesv2::Config::builder()
        .behavior_version(aws_sdk_sesv2::config::BehaviorVersion::latest())
        .region(aws_sdk_sesv2::config::Region::new("us-east-1"))
        .build();
    build_router(AppState {
        db,
        session: SessionKeys {
            secret: TEST_SESSION_SECRET.to_owned(),
            secure_cookies: false,
        },
        mailer: SesMailer {
            client: aws_sdk_sesv2::Client::from_conf(ses_config),
            from: "orders@cafehop.test".to_owned(),
        },
    })
}

fn get(uri: &str, session: Option<&MockSession>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, session.cookie_header());
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str, session: Option<&MockSession>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, session.cookie_header());
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

/// The `Set-Cookie` header for cookie `name`, if the response sets it.
fn set_cookie<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
    let prefix = format!("{name}=");
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|c| c.starts_with(&prefix))
}

/// Flash messages queued by the response for the next page.
fn queued_flashes(resp: &Response) -> Vec<String> {
    let raw = set_cookie(resp, CAFEHOP_FLASH).expect("flash cookie");
    let cookie = Cookie::parse(raw.to_owned()).unwrap();
    peek_flashes(&CookieJar::new().add(cookie))
}

fn session_cookie_value(resp: &Response) -> Option<String> {
    let raw = set_cookie(resp, CAFEHOP_SESSION)?;
    let cookie = Cookie::parse(raw.to_owned()).unwrap();
    Some(cookie.value().to_owned()).filter(|v| !v.is_empty())
}

fn customer_model(id: i32, email: &str, password: &str, role: i16) -> customers::Model {
    customers::Model {
        id,
        name: "Alice".to_owned(),
        email: email.to_owned(),
        password: hash_password(password).unwrap(),
        address: "1 Rue de Rivoli, Paris".to_owned(),
        role,
        created_at: Utc::now(),
    }
}

fn cafe_model(id: i32, name: &str) -> cafes::Model {
    cafes::Model {
        id,
        name: name.to_owned(),
        map_url: "https://maps.example.com/cafe".to_owned(),
        img_url: "https://img.example.com/cafe.png".to_owned(),
        location: "Paris".to_owned(),
        has_sockets: true,
        has_toilet: true,
        has_wifi: true,
        can_take_calls: false,
        seats: Some("20-30".to_owned()),
        coffee_price: Some("€3.50".to_owned()),
    }
}

fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
}

const REGISTER_BODY: &str =
    "name=Alice&email=alice%40example.com&password=correct+horse&address=1+Rue+de+Rivoli";
const LOGIN_BODY: &str = "email=alice%40example.com&password=correct+horse";

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_healthz_with_request_id() {
    let resp = app().oneshot(get("/healthz", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let resp = app().oneshot(get("/readyz", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ── Login guard ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_redirect_anonymous_visitor_to_login() {
    for uri in ["/add_cafe", "/checkout", "/edit_price/1", "/add_to_cart/1/1"] {
        let resp = app().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(resp.headers()[header::LOCATION], "/login", "{uri}");
    }
}

#[tokio::test]
async fn should_render_add_cafe_form_for_customer() {
    let session = MockSession::customer(2);
    let resp = app()
        .oneshot(get("/add_cafe", Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["form"], "add_cafe");
    assert_eq!(json["viewer"]["customer_id"], 2);
    assert_eq!(json["viewer"]["name"], "customer-2");
    assert_eq!(json["viewer"]["is_admin"], false);
}

// ── Admin guard ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_forbid_admin_pages_for_customer() {
    let session = MockSession::customer(2);
    let resp = app()
        .oneshot(get("/add_menu_item_to_database", Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(resp).await["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_forbid_admin_pages_for_anonymous_visitor() {
    for uri in [
        "/add_menu_item_to_database",
        "/manage_menu_at_cafe/1",
        "/remove_menuitem_at_cafe/1/1",
    ] {
        let resp = app().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn should_render_add_menu_item_form_for_admin() {
    let session = MockSession::admin(1);
    let resp = app()
        .oneshot(get("/add_menu_item_to_database", Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["form"], "add_menu_item");
    assert_eq!(json["viewer"]["is_admin"], true);
}

// ── Forms ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_blank_search_with_field_errors() {
    let resp = app()
        .oneshot(post_form("/search", "location=+++", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(resp).await;
    assert_eq!(json["form"], "search");
    assert_eq!(json["errors"]["location"][0], "This field is required.");
}

#[tokio::test]
async fn should_reject_incomplete_registration() {
    let resp = app()
        .oneshot(post_form("/register", "name=Alice&email=alice%40example.com", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(resp).await;
    let errors = json["errors"].as_object().unwrap();
    assert!(errors.contains_key("password"));
    assert!(errors.contains_key("address"));
    assert!(!errors.contains_key("name"));
}

// ── Session and flash cookies ────────────────────────────────────────────────

#[tokio::test]
async fn should_clear_session_on_logout() {
    let session = MockSession::customer(2);
    let resp = app()
        .oneshot(get("/logout", Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");

    let set_cookie = resp.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("cafehop_session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn should_show_pending_flash_on_next_page() {
    let jar = push_flash(CookieJar::new(), LOGIN_REQUIRED_MESSAGE);
    let flash = jar.get(CAFEHOP_FLASH).unwrap().value().to_owned();
    let req = Request::builder()
        .uri("/login")
        .header(header::COOKIE, format!("{CAFEHOP_FLASH}={flash}"))
        .body(Body::empty())
        .unwrap();

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("cafehop_flash=;"));

    let json = json_body(resp).await;
    assert_eq!(json["form"], "login");
    assert_eq!(json["flashes"][0], LOGIN_REQUIRED_MESSAGE);
}

// ── Account handlers ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_start_admin_session_after_first_registration() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<customers::Model>::new()])
        .append_query_results([[count_row(0)]])
        .append_query_results([[customer_model(1, "alice@example.com", "correct horse", 1)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let resp = app_with(db)
        .oneshot(post_form("/register", REGISTER_BODY, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");

    let token = session_cookie_value(&resp).expect("session cookie");
    let session = validate_session_token(&token, TEST_SESSION_SECRET).unwrap();
    assert_eq!(session.customer_id, 1);
    assert!(session.is_admin());
}

#[tokio::test]
async fn should_send_duplicate_registration_to_login() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[customer_model(1, "alice@example.com", "other", 0)]])
        .into_connection();

    let resp = app_with(db)
        .oneshot(post_form("/register", REGISTER_BODY, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/login");
    assert_eq!(session_cookie_value(&resp), None);
    assert_eq!(queued_flashes(&resp), vec![EMAIL_ALREADY_REGISTERED]);
}

#[tokio::test]
async fn should_start_session_on_login() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[customer_model(4, "alice@example.com", "correct horse", 0)]])
        .into_connection();

    let resp = app_with(db)
        .oneshot(post_form("/login", LOGIN_BODY, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");

    let token = session_cookie_value(&resp).expect("session cookie");
    let session = validate_session_token(&token, TEST_SESSION_SECRET).unwrap();
    assert_eq!(session.customer_id, 4);
    assert!(!session.is_admin());
}

#[tokio::test]
async fn should_not_start_session_on_wrong_password() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[customer_model(4, "alice@example.com", "battery staple", 0)]])
        .into_connection();

    let resp = app_with(db)
        .oneshot(post_form("/login", LOGIN_BODY, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/login");
    assert!(set_cookie(&resp, CAFEHOP_SESSION).is_none());
    assert_eq!(queued_flashes(&resp), vec![INVALID_CREDENTIALS]);
}

// ── Cafe handlers ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_send_duplicate_cafe_back_to_form() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[cafe_model(1, "Blue Bottle")]])
        .into_connection();
    let session = MockSession::customer(2);

    let resp = app_with(db)
        .oneshot(post_form(
            "/add_cafe",
            "name=Blue+Bottle&map_url=https%3A%2F%2Fmaps.example.com%2F1\
             &img_url=https%3A%2F%2Fimg.example.com%2Fa.png&location=Paris",
            Some(&session),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/add_cafe");
    assert_eq!(queued_flashes(&resp), vec![CAFE_ALREADY_EXISTS]);
}

#[tokio::test]
async fn should_flash_empty_search_without_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<cafes::Model>::new()])
        .into_connection();

    let resp = app_with(db)
        .oneshot(post_form("/search", "location=atlantis", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["flashes"][0], NO_CAFE_AT_LOCATION);
    assert_eq!(json["cafes"], serde_json::json!([]));
}

#[tokio::test]
async fn should_list_cafes_found_by_search() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[cafe_model(1, "Blue Bottle")]])
        .into_connection();

    let resp = app_with(db)
        .oneshot(post_form("/search", "location=paris", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["flashes"], serde_json::json!([]));
    assert_eq!(json["cafes"][0]["name"], "Blue Bottle");
}

// ── Menu handlers ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_to_manage_page_after_removing_link() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[cafe_menu_items::Model {
            id: 9,
            cafe_id: 3,
            menu_item_id: 4,
        }]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let session = MockSession::admin(1);

    let resp = app_with(db)
        .oneshot(get("/remove_menuitem_at_cafe/4/3", Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/manage_menu_at_cafe/3");
}

#[tokio::test]
async fn should_redirect_when_link_is_already_gone() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<cafe_menu_items::Model>::new()])
        .into_connection();
    let session = MockSession::admin(1);

    let resp = app_with(db)
        .oneshot(get("/remove_menuitem_at_cafe/4/3", Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/manage_menu_at_cafe/3");
}
