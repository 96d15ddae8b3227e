// src/main.rs

use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::config::Config;
use trivia_api::db::{self, DynStore};
use trivia_api::routes;
use trivia_api::state::AppState;

/// Categories inserted by `SEED_CATEGORIES=true` into an empty table.
const STANDARD_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[tokio::main]
async fn main() {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "trivia.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Initialize Database Pool with Retry
    let mut retry_count = 0;
    let store = loop {
        match db::connect(&config.database_url).await {
            Ok(store) => break store,
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    panic!("Failed to connect to database after 5 retries: {}", e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    };

    tracing::info!("Database connected...");

    store
        .init_schema()
        .await
        .expect("Failed to create database schema");
    tracing::info!("Schema ready.");

    if config.seed_categories {
        if let Err(e) = seed_categories(&store).await {
            tracing::error!("Failed to seed categories: {:?}", e);
        }
    }

    if !config.legacy_status_codes {
        tracing::info!("Legacy status codes disabled");
    }

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .unwrap_or_else(|e| panic!("Invalid BIND_ADDR '{}': {}", config.bind_addr, e));

    // Create AppState
    let state = AppState::new(store, config);

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", addr, e));

    // Start the server
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}

async fn seed_categories(store: &DynStore) -> Result<(), sqlx::Error> {
    if !store.list_categories().await?.is_empty() {
        return Ok(());
    }

    for category_type in STANDARD_CATEGORIES {
        store.insert_category(category_type).await?;
    }
    tracing::info!("Seeded {} categories.", STANDARD_CATEGORIES.len());

    Ok(())
}
