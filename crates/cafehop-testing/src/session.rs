//! Mock session helpers for router tests.
//!
//! Guarded routes read the `cafehop_session` cookie. `MockSession` signs a real
//! session token with a test secret and renders it as a `Cookie` header, so
//! tests exercise the same validation path as a logged-in browser.

use http::HeaderValue;

use cafehop_domain::role::CustomerRole;
use cafehop_session::cookie::CAFEHOP_SESSION;
use cafehop_session::token::issue_session_token;

/// Session secret shared by tests that mint and validate cookies.
pub const TEST_SESSION_SECRET: &str = "test-session-secret-for-unit-tests-only";

/// Configurable identity injected into test requests.
pub struct MockSession {
    pub customer_id: i32,
    pub name: String,
    pub role: CustomerRole,
}

impl MockSession {
    pub fn customer(customer_id: i32) -> Self {
        Self {
            customer_id,
            name: format!("customer-{customer_id}"),
            role: CustomerRole::Customer,
        }
    }

    pub fn admin(customer_id: i32) -> Self {
        Self {
            customer_id,
            name: format!("admin-{customer_id}"),
            role: CustomerRole::Admin,
        }
    }

    /// Signed session token for [`TEST_SESSION_SECRET`].
    pub fn token(&self) -> String {
        issue_session_token(self.customer_id, &self.name, self.role, TEST_SESSION_SECRET)
            .map(|(token, _)| token)
            .expect("failed to sign test session token")
    }

    /// `Cookie` header value carrying the session token.
    pub fn cookie_header(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("{CAFEHOP_SESSION}={}", self.token()))
            .expect("session cookie is a valid header value")
    }
}
