use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use session_service::config::Config;
use session_service::domain::session::service::SessionService;
use session_service::inbound::http::router::create_router;
use session_service::outbound::repositories::MySqlCredentialRepository;
use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "session-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        run_mode = ?config.run_mode,
        session_lifetime_minutes = config.jwt.session_lifetime_minutes,
        remember_me_lifetime_days = config.jwt.remember_me_lifetime_days,
        bcrypt_cost = config.password.bcrypt_cost,
        "Configuration loaded"
    );

    let mysql_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "mysql",
        "Database connection pool created"
    );

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&mysql_pool).await?;
        tracing::info!(database = "mysql", "Database migrations completed");
    }

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_policy(),
        PasswordHasher::with_cost(config.password.bcrypt_cost),
    )?);
    let credential_repository = Arc::new(MySqlCredentialRepository::new(mysql_pool));

    let session_service = Arc::new(SessionService::new(credential_repository, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(session_service, config.run_mode);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
