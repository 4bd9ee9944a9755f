// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf};

use dotenvy::dotenv;

use crate::utils::{aiken::ParseMode, window::AccessWindow};

#[derive(Debug, Clone)]
pub struct Config {
    pub bank_path: PathBuf,
    pub parse_mode: ParseMode,
    pub window: AccessWindow,
    pub results_path: PathBuf,
    /// When set, results go to this SQLite database instead of the spreadsheet.
    pub results_database_url: Option<String>,
    /// URL encoded into the QR code.
    pub public_url: String,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let bank_path = env::var("QUIZ_BANK_PATH")
            .unwrap_or_else(|_| "questions.aiken".to_string())
            .into();

        let strict = env::var("STRICT_BANK")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let parse_mode = if strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        };

        let start = env::var("QUIZ_START").expect("QUIZ_START must be set");
        let end = env::var("QUIZ_END").expect("QUIZ_END must be set");
        let window = AccessWindow::parse(&start, &end)
            .unwrap_or_else(|e| panic!("Invalid quiz window: {}", e));

        let results_path = env::var("RESULTS_PATH")
            .unwrap_or_else(|_| "quiz_results.xlsx".to_string())
            .into();

        let results_database_url = env::var("RESULTS_DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let public_url = env::var("QUIZ_PUBLIC_URL")
            .unwrap_or_else(|_| "http://localhost:5001".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5001".to_string())
            .parse()
            .expect("BIND_ADDR must be a socket address");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            bank_path,
            parse_mode,
            window,
            results_path,
            results_database_url,
            public_url,
            bind_addr,
            rust_log,
        }
    }
}
