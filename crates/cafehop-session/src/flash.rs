//! Flash messages: notices queued before a redirect and shown by the next view.
//!
//! Messages are stored in the `cafehop_flash` cookie as a base64url-encoded
//! JSON array so any text survives cookie value restrictions.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use time::Duration;

/// Cookie name for pending flash messages.
pub const CAFEHOP_FLASH: &str = "cafehop_flash";

fn decode(value: &str) -> Vec<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn encode(messages: &[String]) -> String {
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Pending messages in the jar, without consuming them.
pub fn peek_flashes(jar: &CookieJar) -> Vec<String> {
    jar.get(CAFEHOP_FLASH)
        .map(|c| decode(c.value()))
        .unwrap_or_default()
}

/// Queue a message for the next rendered view.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use cafehop_session::flash::{peek_flashes, push_flash};
///
/// let jar = push_flash(CookieJar::new(), "Cafe already exist on the website.");
/// let jar = push_flash(jar, "second");
/// assert_eq!(peek_flashes(&jar), vec!["Cafe already exist on the website.", "second"]);
/// ```
pub fn push_flash(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let mut messages = peek_flashes(&jar);
    messages.push(message.into());
    let cookie = Cookie::build((CAFEHOP_FLASH, encode(&messages)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Take every pending message, clearing the flash cookie when there was one.
pub fn take_flashes(jar: CookieJar) -> (CookieJar, Vec<String>) {
    if jar.get(CAFEHOP_FLASH).is_none() {
        return (jar, Vec::new());
    }
    let messages = peek_flashes(&jar);
    let cleared = Cookie::build((CAFEHOP_FLASH, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cleared), messages)
}
