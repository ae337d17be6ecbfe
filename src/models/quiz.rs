// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::AppError, models::question::Question, utils::payload::integer_field};

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this session. The server keeps no record of them.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Category picked on the quiz screen. `id` 0 means "any category".
/// Clients also echo the label as `type`; it plays no part in selection and is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Value,
}

/// Which pool of questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    Any,
    Category(i64),
}

impl CategorySelector {
    pub const ANY_ID: i64 = 0;

    pub fn from_id(id: i64) -> Result<Self, AppError> {
        match id {
            Self::ANY_ID => Ok(CategorySelector::Any),
            id if id > 0 => Ok(CategorySelector::Category(id)),
            id => Err(AppError::BadRequest(format!("invalid quiz category {}", id))),
        }
    }
}

impl TryFrom<&QuizCategory> for CategorySelector {
    type Error = AppError;

    fn try_from(category: &QuizCategory) -> Result<Self, Self::Error> {
        let id = integer_field(Some(&category.id), "quiz_category.id")?;
        CategorySelector::from_id(id)
    }
}

/// `POST /quizzes`. `question` is `null` once the pool is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
