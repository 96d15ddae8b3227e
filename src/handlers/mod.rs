// src/handlers/mod.rs

pub mod category;
pub mod question;
pub mod quiz;

use crate::error::AppError;

/// Fallback for unknown routes, so they share the JSON error envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}
