/// Website configuration loaded from environment variables.
///
/// `main` loads a `.env` file first when one exists.
#[derive(Debug)]
pub struct WebConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing session tokens. Env var: `SECRET_KEY`.
    pub secret_key: String,
    /// Sender identity for order confirmation emails. Env var: `MAIL_FROM`.
    pub mail_from: String,
    /// AWS region for SES; the AWS default chain decides when unset. Env var: `SES_REGION`.
    pub ses_region: Option<String>,
    /// TCP port for the HTTP server (default 3000). Env var: `WEB_PORT`.
    pub web_port: u16,
    /// Mark cookies `Secure` (default true). Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            secret_key: std::env::var("SECRET_KEY").expect("SECRET_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            ses_region: std::env::var("SES_REGION").ok().filter(|v| !v.is_empty()),
            web_port: std::env::var("WEB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
