// tests/store_tests.rs

use std::path::PathBuf;

use aiken_quiz::{
    models::result::ResultRow,
    store::{ResultsStore, SqliteResultsStore, XlsxResultsStore},
};

fn temp_path(ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quiz_store_{}.{}", uuid::Uuid::new_v4(), ext))
}

fn row(name: &str, score: u32) -> ResultRow {
    ResultRow {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        roll: "R1".to_string(),
        score,
    }
}

#[tokio::test]
async fn xlsx_store_writes_header_once_and_appends() {
    let path = temp_path("xlsx");
    let store = XlsxResultsStore::new(path.clone());

    store.ensure_header().await.unwrap();
    store.ensure_header().await.unwrap();
    store.append(&row("Ada", 3)).await.unwrap();
    store.append(&row("Ada", 1)).await.unwrap();

    let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    let sheet = book.get_sheet(&0).unwrap();

    assert_eq!(sheet.get_highest_row(), 3);
    assert_eq!(sheet.get_value((1, 1)), "Name");
    assert_eq!(sheet.get_value((2, 1)), "Email");
    assert_eq!(sheet.get_value((3, 1)), "Roll No");
    assert_eq!(sheet.get_value((4, 1)), "Score");
    assert_eq!(sheet.get_value((1, 2)), "Ada");
    assert_eq!(sheet.get_value((2, 2)), "ada@example.com");
    assert_eq!(sheet.get_value((4, 2)).parse::<f64>().unwrap(), 3.0);
    assert_eq!(sheet.get_value((4, 3)).parse::<f64>().unwrap(), 1.0);

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn xlsx_store_creates_file_on_first_append() {
    let path = temp_path("xlsx");
    let store = XlsxResultsStore::new(path.clone());

    store.append(&row("Bob", 0)).await.unwrap();

    let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    let sheet = book.get_sheet(&0).unwrap();
    assert_eq!(sheet.get_value((1, 1)), "Name");
    assert_eq!(sheet.get_value((1, 2)), "Bob");

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn sqlite_store_appends_rows_in_order() {
    let path = temp_path("db");
    let url = format!("sqlite://{}", path.display());
    let store = SqliteResultsStore::connect(&url).await.unwrap();

    store.ensure_header().await.unwrap();
    store.ensure_header().await.unwrap();
    store.append(&row("Ada", 3)).await.unwrap();
    store.append(&row("Ada", 3)).await.unwrap();
    store.append(&row("Cy", 0)).await.unwrap();

    let rows = store.rows().await.unwrap();
    assert_eq!(rows, vec![row("Ada", 3), row("Ada", 3), row("Cy", 0)]);

    std::fs::remove_file(&path).ok();
}
