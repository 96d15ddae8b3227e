// tests/common/mod.rs

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use trivia_api::{
    config::Config,
    db::{DynStore, NewQuestion, SqliteStore},
    routes,
    state::AppState,
};

pub struct TestApp {
    pub address: String,
    pub store: DynStore,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn add_category(&self, category_type: &str) -> i64 {
        self.store
            .insert_category(category_type)
            .await
            .expect("Failed to seed category")
    }

    pub async fn add_question(&self, text: &str, category: i64, difficulty: i32) -> i64 {
        self.store
            .insert_question(&NewQuestion {
                question: text.to_string(),
                answer: "answer".to_string(),
                category,
                difficulty,
            })
            .await
            .expect("Failed to seed question")
    }
}

pub fn test_config(legacy_status_codes: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        log_dir: "logs".to_string(),
        legacy_status_codes,
        seed_categories: false,
        quiz_seed: Some(7),
    }
}

/// Spawns the app on a random port, backed by a fresh in-memory SQLite database.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(true)).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    // One long-lived connection: every in-memory connection is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&config.database_url)
        .await
        .expect("Failed to open in-memory SQLite");

    let store: DynStore = Arc::new(SqliteStore::new(pool));
    store.init_schema().await.expect("Failed to create schema");

    // test_config pins quiz_seed, so AppState picks a SeededRandom
    let state = AppState::new(store.clone(), config);

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        store,
        client: reqwest::Client::new(),
    }
}
