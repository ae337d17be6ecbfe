// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::{
    error::AppError,
    models::category::CategoryMap,
    utils::payload::{integer_field, string_field},
};

/// Represents the 'questions' table in the database.
/// Serializes as the flat record clients display.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Id of the category this question belongs to.
    pub category: i64,

    /// Rating from 1 (easy) to 5 (hard).
    pub difficulty: i64,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, max = 1000, message = "question must be between 1 and 1000 chars"))]
    pub question: String,
    #[validate(length(min = 1, max = 500, message = "answer must be between 1 and 500 chars"))]
    pub answer: String,
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: i64,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i64,
}

/// Body of `POST /questions`.
///
/// The route both searches (when `searchTerm` is non-empty) and creates.
/// Fields are kept loose so that a missing or mistyped field becomes a
/// 400 with a useful message instead of a generic deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

impl QuestionPayload {
    /// The search term, if this request is a search.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }

    /// Converts the body into a validated `NewQuestion`.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let new_question = NewQuestion {
            question: string_field(self.question.as_ref(), "question")?.trim().to_string(),
            answer: string_field(self.answer.as_ref(), "answer")?.trim().to_string(),
            category: integer_field(self.category.as_ref(), "category")?,
            difficulty: integer_field(self.difficulty.as_ref(), "difficulty")?,
        };

        if let Err(validation_errors) = new_question.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }

        Ok(new_question)
    }
}

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// `POST /questions` with a search term.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// `POST /questions` creating a question.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: serde_json::Value) -> QuestionPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn empty_search_term_means_create() {
        assert_eq!(payload(json!({"searchTerm": ""})).search_term(), None);
        assert_eq!(payload(json!({})).search_term(), None);
        assert_eq!(payload(json!({"searchTerm": "title"})).search_term(), Some("title"));
    }

    #[test]
    fn complete_payload_converts() {
        let q = payload(json!({
            "question": "Who invented Peanut Butter?",
            "answer": "George Washington Carver",
            "category": "4",
            "difficulty": 3
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(q.question, "Who invented Peanut Butter?");
        assert_eq!(q.category, 4);
        assert_eq!(q.difficulty, 3);
    }

    #[test]
    fn missing_field_is_bad_request() {
        let err = payload(json!({
            "question": "Who invented Peanut Butter?",
            "category": 4,
            "difficulty": 3
        }))
        .into_new_question()
        .unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("answer")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        for (category, difficulty) in [(4, 0), (4, 6), (0, 3), (-1, 3)] {
            let err = payload(json!({
                "question": "Q",
                "answer": "A",
                "category": category,
                "difficulty": difficulty
            }))
            .into_new_question()
            .unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
    }

    #[test]
    fn blank_text_fails_validation() {
        let err = payload(json!({
            "question": "   ",
            "answer": "A",
            "category": 1,
            "difficulty": 1
        }))
        .into_new_question()
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
