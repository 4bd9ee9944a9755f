// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Form,
    body::Bytes,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::{
        result::ResultRow,
        submission::{LoginForm, SubmissionRecord},
    },
    store::ResultsStore,
    utils::{aiken, grading, html},
};

/// Renders the login form.
pub async fn login() -> impl IntoResponse {
    Html(html::login_page())
}

/// Parses the bank afresh and renders it in a new random order.
///
/// Identity fields are passed through to the quiz form unchecked;
/// they are validated on submission.
pub async fn start_quiz(
    State(config): State<Config>,
    Form(login): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let bank = aiken::load(&config.bank_path, config.parse_mode).await?;

    tracing::info!(
        "Presenting {} question(s) to {:?}",
        bank.len(),
        login.name.as_deref().unwrap_or_default()
    );

    Ok(Html(html::quiz_page(&login, &bank)))
}

/// Grades a quiz submission and appends the result.
///
/// * Rejects the request with 400 if name, email or roll is missing.
/// * Reparses the bank; question ids are matched against form field names.
/// * Redirects to the confirmation page.
pub async fn submit(
    State(config): State<Config>,
    State(results): State<Arc<dyn ResultsStore>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let submission = SubmissionRecord::from_urlencoded(&body);

    if let Err(validation_errors) = submission.participant.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let bank = aiken::load(&config.bank_path, config.parse_mode).await?;
    let score = grading::grade(&bank, &submission);

    tracing::info!(
        "Graded submission from {} ({}): {}/{}",
        submission.participant.name,
        submission.participant.roll,
        score,
        bank.len()
    );

    results
        .append(&ResultRow::new(&submission.participant, score))
        .await?;

    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", &submission.participant.name)
        .finish();

    Ok(Redirect::to(&format!("/response_saved?{}", query)))
}

#[derive(Debug, Deserialize)]
pub struct SavedParams {
    pub name: Option<String>,
}

/// Confirmation page shown after a submission is stored.
pub async fn response_saved(Query(params): Query<SavedParams>) -> impl IntoResponse {
    Html(html::response_saved_page(params.name.as_deref()))
}
