// src/db/mod.rs

pub mod store;

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub use store::{SqlStore, TriviaStore};

/// Categories inserted by `seed_default_categories`.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Opens a pool for a SQLite URL.
///
/// An in-memory database lives only as long as its connection, so such URLs
/// get exactly one connection that is never recycled.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    pool_options
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Inserts `DEFAULT_CATEGORIES` when the categories table is empty.
/// Returns the number of rows inserted.
pub async fn seed_default_categories(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        tracing::debug!("Categories already present ({}), skipping seed", existing);
        return Ok(0);
    }

    let mut inserted = 0;
    for label in DEFAULT_CATEGORIES {
        inserted += sqlx::query("INSERT INTO categories (type) VALUES (?1)")
            .bind(label)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    tracing::info!("Seeded {} default categories", inserted);
    Ok(inserted)
}
