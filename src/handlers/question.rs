// src/handlers/question.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    config::Config,
    db::{DynStore, NewQuestion, is_foreign_key_violation},
    error::AppError,
    models::{
        category::category_map,
        question::{CreateQuestionRequest, SearchQuestionRequest},
    },
    utils::{
        extract::{IdPath, ValidatedJson},
        pagination::{PageParams, QUESTIONS_PER_PAGE, paginate},
    },
};

/// Lists all questions ordered by id, 10 per page, with the category map.
///
/// `total_questions` is the unpaginated count. An empty question table,
/// or an empty category table, is a 404.
pub async fn list_questions(
    State(store): State<DynStore>,
    params: PageParams,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.list_questions().await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::from(e)
    })?;

    if questions.is_empty() {
        return Err(AppError::NotFound("No questions".to_string()));
    }

    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::from(e)
    })?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&questions, params.page(), QUESTIONS_PER_PAGE),
        "categories": category_map(&categories),
        "total_questions": questions.len(),
    })))
}

/// Creates a question.
///
/// Shape and difficulty range are checked by the extractor (400). A category
/// that does not exist trips the foreign key and is reported as 422.
pub async fn create_question(
    State(store): State<DynStore>,
    ValidatedJson(payload): ValidatedJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = NewQuestion {
        question: payload.question,
        answer: payload.answer,
        category: payload.category,
        difficulty: payload.difficulty,
    };

    let id = store.insert_question(&new_question).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::Unprocessable(format!("Category {} does not exist", new_question.category))
        } else {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::from(e)
        }
    })?;

    let total = store.count_questions().await?;
    tracing::info!("Created question {}", id);

    Ok(Json(json!({
        "success": true,
        "created": id,
        "total_questions": total,
    })))
}

/// Deletes a question by id.
///
/// A missing id answers 422 in legacy mode and 404 otherwise.
pub async fn delete_question(
    State(store): State<DynStore>,
    State(config): State<Arc<Config>>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let deleted = store.delete_question(id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::from(e)
    })?;

    if !deleted {
        let detail = format!("Question {} not found", id);
        return Err(if config.legacy_status_codes {
            AppError::Unprocessable(detail)
        } else {
            AppError::NotFound(detail)
        });
    }

    let total = store.count_questions().await?;
    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "total_questions": total,
    })))
}

/// Case-insensitive substring search on the question text, 10 per page.
/// No match is a normal, empty result.
pub async fn search_questions(
    State(store): State<DynStore>,
    params: PageParams,
    ValidatedJson(payload): ValidatedJson<SearchQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store
        .search_questions(&payload.search_term)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::from(e)
        })?;

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&questions, params.page(), QUESTIONS_PER_PAGE),
        "total_questions": questions.len(),
    })))
}
