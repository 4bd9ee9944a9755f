// src/store/mod.rs

//! Append-only persistence for graded results.

pub mod sqlite;
pub mod xlsx;

use async_trait::async_trait;

use crate::{error::AppError, models::result::ResultRow};

pub use sqlite::SqliteResultsStore;
pub use xlsx::XlsxResultsStore;

#[async_trait]
pub trait ResultsStore: Send + Sync {
    /// Prepares the store so that the first append lands under a header.
    /// Safe to call repeatedly.
    async fn ensure_header(&self) -> Result<(), AppError>;

    /// Appends one row. Repeated rows for the same participant are kept.
    async fn append(&self, row: &ResultRow) -> Result<(), AppError>;
}
