// src/services/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    db::TriviaStore,
    error::AppError,
    models::{
        question::Question,
        quiz::{CategorySelector, QuizResponse},
    },
};

/// Picks one question from `pool` whose id is not in `previous`, uniformly at random.
/// Returns `None` when every question has been asked.
pub fn pick_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    candidates.choose(rng).cloned()
}

/// Next quiz question for the selected category, skipping `previous_questions`.
pub async fn next_question(
    store: &dyn TriviaStore,
    selector: CategorySelector,
    previous_questions: &[i64],
) -> Result<QuizResponse, AppError> {
    let pool = match selector {
        CategorySelector::Any => store.questions().await?,
        CategorySelector::Category(id) => {
            if store.category(id).await?.is_none() {
                return Err(AppError::BadRequest(format!("quiz category {} does not exist", id)));
            }
            store.questions_in_category(id).await?
        }
    };

    let previous: HashSet<i64> = previous_questions.iter().copied().collect();
    let question = pick_question(pool, &previous, &mut rand::thread_rng());

    match &question {
        Some(q) => tracing::debug!("Quiz picked question {} ({:?})", q.id, selector),
        None => tracing::debug!("Quiz pool exhausted ({:?})", selector),
    }

    Ok(QuizResponse {
        success: true,
        question,
    })
}
