// src/db/mod.rs

//! Storage layer. Handlers talk to a [`TriviaStore`]; the concrete backend is
//! picked from the scheme of `DATABASE_URL`.

mod postgres;
mod sqlite;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, sqlite::SqlitePoolOptions};

use crate::models::{category::Category, question::Question};

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

pub type DynStore = Arc<dyn TriviaStore>;

/// Columns for a new `questions` row. The id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Creates the `categories` and `questions` tables if they are missing.
    async fn init_schema(&self) -> Result<(), sqlx::Error>;

    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn insert_category(&self, category_type: &str) -> Result<i64, sqlx::Error>;

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error>;

    async fn count_questions(&self) -> Result<i64, sqlx::Error>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    async fn questions_by_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error>;

    /// Questions eligible for the quiz: not in `exclude`, and in `category` when one is given.
    async fn quiz_candidates(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, sqlx::Error>;

    /// Returns the id assigned to the new row.
    async fn insert_question(&self, question: &NewQuestion) -> Result<i64, sqlx::Error>;

    /// Returns `false` when no row had this id.
    async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error>;
}

/// Opens a pool for `database_url` and wraps it in the matching store.
pub async fn connect(database_url: &str) -> Result<DynStore, sqlx::Error> {
    if database_url.starts_with("sqlite:") {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;
        Ok(Arc::new(SqliteStore::new(pool)))
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;
        Ok(Arc::new(PgStore::new(pool)))
    }
}

/// Whether `err` is a foreign-key violation reported by the database.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

/// Escape character used by [`like_pattern`].
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Wraps `term` in `%...%` with LIKE wildcards escaped, so the term matches literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
