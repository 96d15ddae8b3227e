// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    config::Config,
    db::DynStore,
    error::AppError,
    models::quiz::QuizRequest,
    quiz::{QuizPick, select_quiz_question},
    utils::{extract::ValidatedJson, random::RandomSource},
};

/// Returns a random question that is not in `previous_questions`.
///
/// `quiz_category.id == 0` draws from every category. When nothing is left,
/// legacy mode answers 500; otherwise the response carries `"question": null`.
pub async fn next_question(
    State(store): State<DynStore>,
    State(random): State<Arc<dyn RandomSource>>,
    State(config): State<Arc<Config>>,
    ValidatedJson(req): ValidatedJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = req.quiz_category.filter();

    let pick = select_quiz_question(
        store.as_ref(),
        random.as_ref(),
        category,
        &req.previous_questions,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch quiz candidates: {:?}", e);
        AppError::from(e)
    })?;

    match pick {
        QuizPick::Question(question) => Ok(Json(json!({
            "success": true,
            "question": question,
        }))),
        QuizPick::Exhausted if config.legacy_status_codes => Err(AppError::InternalServerError(
            format!("No quiz questions left for category {:?}", category),
        )),
        QuizPick::Exhausted => Ok(Json(json!({
            "success": true,
            "question": null,
        }))),
    }
}
