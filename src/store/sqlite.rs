// src/store/sqlite.rs

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::ResultsStore;
use crate::{error::AppError, models::result::ResultRow};

/// Results kept in a `quiz_results` table.
#[derive(Clone)]
pub struct SqliteResultsStore {
    pool: SqlitePool,
}

impl SqliteResultsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `url`, e.g. `sqlite://results.db`.
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// All rows in insertion order.
    pub async fn rows(&self) -> Result<Vec<ResultRow>, AppError> {
        let rows: Vec<(String, String, String, i64)> =
            sqlx::query_as("SELECT name, email, roll, score FROM quiz_results ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(name, email, roll, score)| ResultRow {
                name,
                email,
                roll,
                score: u32::try_from(score).unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl ResultsStore for SqliteResultsStore {
    async fn ensure_header(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quiz_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                roll TEXT NOT NULL,
                score INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create results table: {:?}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn append(&self, row: &ResultRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO quiz_results (name, email, roll, score, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.name)
        .bind(&row.email)
        .bind(&row.roll)
        .bind(i64::from(row.score))
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert result row: {:?}", e);
            AppError::from(e)
        })?;

        tracing::info!(
            "Saved result: name={}, email={}, roll={}, score={}",
            row.name,
            row.email,
            row.roll,
            row.score
        );
        Ok(())
    }
}
