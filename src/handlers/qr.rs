// src/handlers/qr.rs

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::{
    config::Config,
    error::AppError,
    utils::{html, qr},
};

/// Page showing the entry QR code with a download link.
pub async fn qr_page() -> impl IntoResponse {
    Html(html::qr_page())
}

/// PNG of the QR code for the public quiz URL, served as an attachment.
pub async fn download_qr(State(config): State<Config>) -> Result<impl IntoResponse, AppError> {
    let png = qr::qr_png(&config.public_url)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"quiz_qr_code.png\"",
            ),
        ],
        png,
    ))
}
