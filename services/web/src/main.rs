use aws_config::BehaviorVersion;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use cafehop_core::tracing::init_tracing;
use cafehop_web::config::WebConfig;
use cafehop_web::guard::SessionKeys;
use cafehop_web::infra::mail::SesMailer;
use cafehop_web::router::build_router;
use cafehop_web::state::AppState;
use cafehop_web_migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = WebConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let aws_config = match &config.ses_region {
        Some(region) => aws_config
            .to_builder()
            .region(aws_config::Region::new(region.clone()))
            .build(),
        None => aws_config,
    };
    let mailer = SesMailer {
        client: aws_sdk_sesv2::Client::new(&aws_config),
        from: config.mail_from,
    };

    let state = AppState {
        db,
        session: SessionKeys {
            secret: config.secret_key,
            secure_cookies: config.cookie_secure,
        },
        mailer,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("web service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
