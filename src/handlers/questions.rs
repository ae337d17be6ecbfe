// src/handlers/questions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};

use crate::{
    db::TriviaStore,
    error::AppError,
    models::question::QuestionPayload,
    services::questions,
    utils::pagination::{PageParams, requested_page},
};

/// Lists one page of all questions, with the category map.
pub async fn list_questions(
    State(store): State<Arc<dyn TriviaStore>>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let response = questions::list_questions(store.as_ref(), requested_page(query)).await?;
    Ok(Json(response))
}

/// Searches questions when the body carries a non-empty `searchTerm`,
/// otherwise creates a question from the body.
pub async fn create_or_search(
    State(store): State<Arc<dyn TriviaStore>>,
    query: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<QuestionPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let page = requested_page(query);

    if let Some(term) = payload.search_term() {
        let response = questions::search_questions(store.as_ref(), term, page).await?;
        return Ok(Json(response).into_response());
    }

    let new_question = payload.into_new_question()?;
    let response = questions::create_question(store.as_ref(), new_question, page).await?;
    Ok(Json(response).into_response())
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<Arc<dyn TriviaStore>>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let response = questions::delete_question(store.as_ref(), id, requested_page(query)).await?;
    Ok(Json(response))
}
