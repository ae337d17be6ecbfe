// src/db/store.rs

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Persistence collaborator used by the services.
///
/// Every listing is ordered by id ascending. Mutations run together with
/// the re-read of the listing in one transaction.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn category(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;

    async fn questions(&self) -> Result<Vec<Question>, sqlx::Error>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error>;

    /// Inserts the question and returns its id with the full listing afterwards.
    async fn create_question(
        &self,
        new_question: &NewQuestion,
    ) -> Result<(i64, Vec<Question>), sqlx::Error>;

    /// Deletes the question and returns the remaining listing,
    /// or `None` (nothing changed) when the id does not exist.
    async fn delete_question(&self, id: i64) -> Result<Option<Vec<Question>>, sqlx::Error>;
}

/// `TriviaStore` over a SQLite pool.
#[derive(Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

const SELECT_QUESTIONS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// Unicode-aware, case-insensitive substring test.
/// SQLite's `LIKE` and `lower()` only fold ASCII, so matching happens here.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl TriviaStore for SqlStore {
    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!("{} ORDER BY id", SELECT_QUESTIONS))
            .fetch_all(&self.pool)
            .await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let questions = self.questions().await?;

        Ok(questions
            .into_iter()
            .filter(|q| contains_ignore_case(&q.question, &needle))
            .collect())
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "{} WHERE category = ?1 ORDER BY id",
            SELECT_QUESTIONS
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn create_question(
        &self,
        new_question: &NewQuestion,
    ) -> Result<(i64, Vec<Question>), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let questions = sqlx::query_as::<_, Question>(&format!("{} ORDER BY id", SELECT_QUESTIONS))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((id, questions))
    }

    async fn delete_question(&self, id: i64) -> Result<Option<Vec<Question>>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query("SELECT id FROM questions WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();

        if !exists {
            return Ok(None);
        }

        sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let questions = sqlx::query_as::<_, Question>(&format!("{} ORDER BY id", SELECT_QUESTIONS))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_folds_unicode_case() {
        assert!(contains_ignore_case("Who wrote ÉMILE, or On Education?", "émile"));
        assert!(contains_ignore_case("Straße nach Köln", "straße"));
        assert!(contains_ignore_case("Is 100% of the Moon visible?", "100%"));
        assert!(!contains_ignore_case("Who discovered penicillin?", "%"));
    }
}
