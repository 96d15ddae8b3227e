// src/models/quiz.rs

use serde::Deserialize;
use validator::Validate;

/// Category id that lifts the category restriction.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Deserialize, Validate)]
pub struct QuizCategory {
    pub id: i64,

    /// Display name echoed back by clients; not used for filtering.
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

impl QuizCategory {
    /// `None` when every category is eligible.
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(nested)]
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i64>,
}
