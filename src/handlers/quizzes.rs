// src/handlers/quizzes.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    db::TriviaStore,
    error::AppError,
    models::quiz::{CategorySelector, QuizRequest},
    services::quiz,
};

/// Returns a random question of the chosen category that is not in
/// `previous_questions`, or `null` once all of them have been asked.
pub async fn next_question(
    State(store): State<Arc<dyn TriviaStore>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let selector = CategorySelector::try_from(&req.quiz_category)?;

    let response = quiz::next_question(store.as_ref(), selector, &req.previous_questions).await?;
    Ok(Json(response))
}
