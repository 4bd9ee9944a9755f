// src/utils/window.rs

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};

use crate::error::AppError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock period during which the quiz can be opened and submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AccessWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, String> {
        if end < start {
            return Err(format!("window end {} is before start {}", end, start));
        }
        Ok(Self { start, end })
    }

    /// Parses `YYYY-MM-DD HH:MM:SS` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, String> {
        let start = NaiveDateTime::parse_from_str(start.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| format!("invalid window start {:?}: {}", start, e))?;
        let end = NaiveDateTime::parse_from_str(end.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| format!("invalid window end {:?}: {}", end, e))?;
        Self::new(start, end)
    }

    /// Inclusive on both ends.
    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now <= self.end
    }
}

/// Axum Middleware: rejects requests with 403 outside the access window.
pub async fn window_middleware(
    State(window): State<AccessWindow>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let now = Local::now().naive_local();
    if !window.is_open(now) {
        tracing::info!("Rejected {} at {}: quiz window closed", req.uri().path(), now);
        return AppError::Forbidden(
            "The quiz is not accessible at this time. Check back during the allowed period."
                .to_string(),
        )
        .into_response();
    }

    next.run(req).await
}
