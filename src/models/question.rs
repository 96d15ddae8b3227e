// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Foreign key to `categories.id`.
    pub category: i64,

    /// Difficulty on a 1..=5 scale.
    pub difficulty: i32,
}

/// DTO for creating a new question.
/// Every field is required; serde rejects missing fields and wrong types.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: i64,
    #[validate(range(min = 1, max = 5, message = "Difficulty must be from 1 to 5."))]
    pub difficulty: i32,
}

/// DTO for the search endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuestionRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
