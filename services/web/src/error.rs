use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Website domain error variants.
///
/// Handlers turn the business conflicts (`CafeAlreadyExists`,
/// `EmailAlreadyRegistered`, `InvalidCredentials`) into a flash and a redirect;
/// the JSON response below is what reaches the client when they are not caught.
#[derive(Debug, thiserror::Error)]
pub enum WebServiceError {
    #[error("cafe not found")]
    CafeNotFound,
    #[error("menu item not found")]
    MenuItemNotFound,
    #[error("customer not found")]
    CustomerNotFound,
    #[error("cafe already exists")]
    CafeAlreadyExists,
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl WebServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CafeNotFound => "CAFE_NOT_FOUND",
            Self::MenuItemNotFound => "MENU_ITEM_NOT_FOUND",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::CafeAlreadyExists => "CAFE_ALREADY_EXISTS",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for WebServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CafeNotFound | Self::MenuItemNotFound | Self::CustomerNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::CafeAlreadyExists | Self::EmailAlreadyRegistered => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client outcomes and already visible in the TraceLayer span.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
