// tests/common/mod.rs

#![allow(dead_code)]

use sqlx::SqlitePool;
use trivia_api::db;

/// Fresh in-memory database with the schema applied.
pub async fn memory_pool() -> SqlitePool {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    db::run_migrations(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

/// Seeds the six default categories (ids 1..=6: Science, Art, Geography,
/// History, Entertainment, Sports).
pub async fn seed_categories(pool: &SqlitePool) {
    db::seed_default_categories(pool)
        .await
        .expect("Failed to seed categories");
}

pub async fn insert_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> i64 {
    sqlx::query("INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)")
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(difficulty)
        .execute(pool)
        .await
        .expect("Failed to insert question")
        .last_insert_rowid()
}

/// Categories plus a small trivia set:
/// 3 Science, 2 Art, 1 History, 1 Entertainment questions (ids 1..=7).
/// Geography (3) and Sports (6) have no questions.
pub async fn seed_trivia(pool: &SqlitePool) {
    seed_categories(pool).await;

    let questions = [
        ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        ("Which Dutch graphic artist was a creator of optical illusions?", "Escher", 2, 1),
        ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ("Which crop did George Washington Carver promote?", "Peanuts", 4, 2),
        ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ];

    for (question, answer, category, difficulty) in questions {
        insert_question(pool, question, answer, category, difficulty).await;
    }
}

/// Inserts `count` numbered questions into category 1.
pub async fn seed_numbered_questions(pool: &SqlitePool, count: usize) {
    for i in 0..count {
        insert_question(pool, &format!("Question {}", i), "Answer", 1, 1).await;
    }
}
