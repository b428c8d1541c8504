use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keyake::adapters::auth::JwtSessionValidator;
use keyake::adapters::http::{
    app_router, AdminAppState, AppState, BusinessAppState, SurveyAppState,
};
use keyake::adapters::postgres::{
    PostgresAccountReader, PostgresAnswerRepository, PostgresStatsReader, PostgresSurveyRepository,
};
use keyake::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(environment = ?config.server.environment, "Starting KéyaKé backend");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let surveys = Arc::new(PostgresSurveyRepository::new(pool.clone()));
    let answers = Arc::new(PostgresAnswerRepository::new(pool.clone()));
    let stats = Arc::new(PostgresStatsReader::new(pool.clone()));
    let accounts = Arc::new(PostgresAccountReader::new(pool));
    let validator = Arc::new(JwtSessionValidator::new(
        &config.auth.jwt_secret,
        config.auth.token_leeway(),
    ));

    let state = AppState {
        surveys: SurveyAppState::new(surveys, answers),
        admin: AdminAppState::new(stats, accounts.clone()),
        business: BusinessAppState::new(accounts),
        auth: validator,
    };
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
