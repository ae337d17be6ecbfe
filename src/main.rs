// src/main.rs

use std::net::SocketAddr;
use std::time::Duration;

use dotenvy::dotenv;
use sqlx::SqlitePool;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::config::Config;
use trivia_api::db::{self, SqlStore};
use trivia_api::routes;
use trivia_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env();

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(&config);

    let pool = connect_with_retry(&config.database_url).await;
    tracing::info!("Database connected...");

    tracing::info!("Running migrations...");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    if config.seed_categories {
        if let Err(e) = db::seed_default_categories(&pool).await {
            tracing::error!("Failed to seed categories: {:?}", e);
        }
    }

    let state = AppState::new(SqlStore::new(pool));
    let cors = routes::cors_layer(&config.cors_allowed_origins);
    let app = routes::create_router(state, cors);

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .expect("BIND_ADDR must be a socket address like 0.0.0.0:3000");
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listening address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Logs to stdout and to a daily-rolling file under `LOG_DIR`, filtered by `RUST_LOG`.
fn init_tracing(config: &Config) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "trivia-api.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}

/// Initialize Database Pool with Retry
async fn connect_with_retry(database_url: &str) -> SqlitePool {
    let mut retry_count = 0;
    loop {
        match db::connect(database_url).await {
            Ok(pool) => break pool,
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    panic!("Failed to connect to database after 5 retries: {}", e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
