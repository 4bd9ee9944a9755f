// src/store/xlsx.rs

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use super::ResultsStore;
use crate::{
    error::AppError,
    models::result::{RESULT_HEADERS, ResultRow},
};

/// Results kept in the first sheet of an `.xlsx` workbook.
///
/// Every write rereads and rewrites the whole file, so writes from this
/// process go through one lock. Other processes writing the same file are
/// not coordinated.
pub struct XlsxResultsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl XlsxResultsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn first_sheet(book: &mut Spreadsheet) -> Result<&mut Worksheet, AppError> {
    book.get_sheet_mut(&0)
        .ok_or_else(|| AppError::InternalServerError("results workbook has no sheet".to_string()))
}

/// Writes the header if the first cell is still empty. Returns whether it did.
fn write_header(sheet: &mut Worksheet) -> bool {
    if !sheet.get_value((1, 1)).is_empty() {
        return false;
    }
    for (col, title) in RESULT_HEADERS.iter().enumerate() {
        let cell = sheet.get_cell_mut(((col as u32) + 1, 1));
        cell.set_value(*title);
        cell.get_style_mut().get_font_mut().set_bold(true);
    }
    true
}

fn open_or_create(path: &Path) -> Result<Spreadsheet, AppError> {
    if path.exists() {
        Ok(umya_spreadsheet::reader::xlsx::read(path)?)
    } else {
        Ok(umya_spreadsheet::new_file())
    }
}

fn ensure_header_blocking(path: &Path) -> Result<(), AppError> {
    let mut book = open_or_create(path)?;
    if write_header(first_sheet(&mut book)?) {
        umya_spreadsheet::writer::xlsx::write(&book, path)?;
        tracing::info!("Created results sheet at {}", path.display());
    }
    Ok(())
}

fn append_blocking(path: &Path, row: &ResultRow) -> Result<(), AppError> {
    let mut book = open_or_create(path)?;
    let sheet = first_sheet(&mut book)?;
    write_header(sheet);

    let next = sheet.get_highest_row() + 1;
    sheet.get_cell_mut((1, next)).set_value(row.name.as_str());
    sheet.get_cell_mut((2, next)).set_value(row.email.as_str());
    sheet.get_cell_mut((3, next)).set_value(row.roll.as_str());
    sheet.get_cell_mut((4, next)).set_value_number(row.score);

    umya_spreadsheet::writer::xlsx::write(&book, path)?;
    Ok(())
}

#[async_trait]
impl ResultsStore for XlsxResultsStore {
    async fn ensure_header(&self) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || ensure_header_blocking(&path)).await?
    }

    async fn append(&self, row: &ResultRow) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        let owned = row.clone();
        tokio::task::spawn_blocking(move || append_blocking(&path, &owned)).await??;

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
