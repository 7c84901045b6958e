//! Session token issue and validation (HS256 JWT).

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use cafehop_domain::role::CustomerRole;

/// Session lifetime in seconds (7 days). Also used as the cookie Max-Age.
pub const SESSION_TTL_SECS: u64 = 604800;

/// Authenticated customer attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub customer_id: i32,
    pub name: String,
    pub role: CustomerRole,
    pub expires_at: u64,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign session token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `sub` | customer id (decimal string) |
/// | `name` | customer display name |
/// | `role` | [`CustomerRole`] wire value |
/// | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub role: u8,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign a session token for a customer. Returns the token and its expiry.
pub fn issue_session_token(
    customer_id: i32,
    name: &str,
    role: CustomerRole,
    secret: &str,
) -> Result<(String, u64), SessionError> {
    let exp = now_secs() + SESSION_TTL_SECS;
    let claims = SessionClaims {
        sub: customer_id.to_string(),
        name: name.to_owned(),
        role: role.as_u8(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(SessionError::Signing)?;
    Ok((token, exp))
}

/// Validate a session cookie value, returning the session it carries.
///
/// Validation: HS256, `exp` checked with the default 60s leeway, required
/// claims `exp` + `sub`. Unknown role values are rejected as malformed.
pub fn validate_session_token(token: &str, secret: &str) -> Result<Session, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    let claims = data.claims;
    let customer_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| SessionError::Malformed)?;
    let role = CustomerRole::from_u8(claims.role).ok_or(SessionError::Malformed)?;
    Ok(Session {
        customer_id,
        name: claims.name,
        role,
        expires_at: claims.exp,
    })
}
