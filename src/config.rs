// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: String,
    pub log_dir: String,

    /// Reproduce the legacy status codes: 500 for an exhausted quiz and
    /// 422 for deleting a missing question.
    pub legacy_status_codes: bool,

    /// Insert the standard trivia categories when the table is empty.
    pub seed_categories: bool,

    /// Fixed seed for quiz selection. `None` uses thread-local randomness.
    pub quiz_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let legacy_status_codes = bool_var("LEGACY_STATUS_CODES", true);
        let seed_categories = bool_var("SEED_CATEGORIES", false);

        let quiz_seed = env::var("QUIZ_SEED").ok().and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!("Ignoring unparseable QUIZ_SEED value '{}'", raw);
                None
            }
        });

        Self {
            database_url,
            rust_log,
            bind_addr,
            log_dir,
            legacy_status_codes,
            seed_categories,
            quiz_seed,
        }
    }
}

fn bool_var(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
            tracing::warn!("Ignoring unparseable {} value '{}', using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
