// src/handlers/category.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    db::DynStore,
    error::AppError,
    models::category::category_map,
    utils::{
        extract::IdPath,
        pagination::{PageParams, QUESTIONS_PER_PAGE, paginate},
    },
};

/// Lists every category as an `{id: type}` map.
///
/// An empty table is a 404: the client cannot do anything without categories.
pub async fn list_categories(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::from(e)
    })?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
        "total_categories": categories.len(),
    })))
}

/// Lists the questions of one category, 10 per page.
/// An unknown (or empty) category is a 404.
pub async fn questions_by_category(
    State(store): State<DynStore>,
    IdPath(category_id): IdPath,
    params: PageParams,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.questions_by_category(category_id).await.map_err(|e| {
        tracing::error!("Failed to list questions of category {}: {:?}", category_id, e);
        AppError::from(e)
    })?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions in category {}",
            category_id
        )));
    }

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&questions, params.page(), QUESTIONS_PER_PAGE),
        "total_questions": questions.len(),
        "current_category": category_id,
    })))
}
