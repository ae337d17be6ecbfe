// src/handlers/categories.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};

use crate::{
    db::TriviaStore,
    error::AppError,
    services::questions,
    utils::pagination::{PageParams, requested_page},
};

/// Lists every category as an id → label map.
pub async fn list_categories(
    State(store): State<Arc<dyn TriviaStore>>,
) -> Result<impl IntoResponse, AppError> {
    let response = questions::list_categories(store.as_ref()).await?;
    Ok(Json(response))
}

/// Lists one page of the questions in a category.
pub async fn questions_by_category(
    State(store): State<Arc<dyn TriviaStore>>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let page = requested_page(query);
    let response = questions::questions_by_category(store.as_ref(), id, page).await?;
    Ok(Json(response))
}
