// src/services/questions.rs

//! Question listing, search, category filtering and mutation.
//!
//! `total_questions` is always the size of the filtered set the page was cut from.

use crate::{
    db::TriviaStore,
    error::AppError,
    models::{
        category::{CategoriesResponse, category_map},
        question::{
            CategoryQuestionsResponse, CreatedResponse, DeletedResponse, NewQuestion,
            QuestionListResponse, SearchResponse,
        },
    },
    utils::pagination::paginate,
};

/// All categories as an id → label map. An empty table is a setup error.
pub async fn list_categories(store: &dyn TriviaStore) -> Result<CategoriesResponse, AppError> {
    let categories = store.categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories found".to_string()));
    }

    Ok(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    })
}

/// One page of all questions. An empty page is reported as not found.
pub async fn list_questions(
    store: &dyn TriviaStore,
    page: usize,
) -> Result<QuestionListResponse, AppError> {
    let questions = store.questions().await?;
    let current = paginate(&questions, page);

    if current.is_empty() {
        let message = if questions.is_empty() {
            "no questions found".to_string()
        } else {
            format!("page {} is out of range", page)
        };
        return Err(AppError::NotFound(message));
    }

    let categories = store.categories().await?;

    Ok(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: None,
    })
}

/// One page of questions whose text contains `term`, ignoring case.
pub async fn search_questions(
    store: &dyn TriviaStore,
    term: &str,
    page: usize,
) -> Result<SearchResponse, AppError> {
    let matches = store.search_questions(term).await?;
    tracing::debug!("Search '{}' matched {} questions", term, matches.len());

    Ok(SearchResponse {
        success: true,
        questions: paginate(&matches, page).to_vec(),
        total_questions: matches.len(),
    })
}

/// One page of the questions in a category. An unknown category is not found;
/// a known category without questions yields an empty page.
pub async fn questions_by_category(
    store: &dyn TriviaStore,
    category_id: i64,
    page: usize,
) -> Result<CategoryQuestionsResponse, AppError> {
    let category = store
        .category(category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {} not found", category_id)))?;

    let questions = store.questions_in_category(category.id).await?;

    Ok(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
        current_category: category.category_type,
    })
}

/// Stores a validated question and returns the fresh listing.
pub async fn create_question(
    store: &dyn TriviaStore,
    new_question: NewQuestion,
    page: usize,
) -> Result<CreatedResponse, AppError> {
    if store.category(new_question.category).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "category {} does not exist",
            new_question.category
        )));
    }

    let (id, questions) = store.create_question(&new_question).await?;
    tracing::info!("Created question {} in category {}", id, new_question.category);

    Ok(CreatedResponse {
        success: true,
        created: id,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    })
}

/// Deletes a question and returns the remaining listing.
pub async fn delete_question(
    store: &dyn TriviaStore,
    id: i64,
    page: usize,
) -> Result<DeletedResponse, AppError> {
    let questions = store
        .delete_question(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("question {} not found", id)))?;
    tracing::info!("Deleted question {}", id);

    Ok(DeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    })
}
