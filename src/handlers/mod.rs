// src/handlers/mod.rs

pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::AppError;

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("resource not found".to_string())
}

/// Fallback for known paths hit with an unsupported verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
