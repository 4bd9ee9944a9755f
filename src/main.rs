// src/main.rs

use std::sync::Arc;

use aiken_quiz::config::Config;
use aiken_quiz::routes;
use aiken_quiz::state::AppState;
use aiken_quiz::store::{ResultsStore, SqliteResultsStore, XlsxResultsStore};
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "quiz.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Quiz window {} .. {}, bank {}",
        config.window.start,
        config.window.end,
        config.bank_path.display()
    );

    let results: Arc<dyn ResultsStore> = match &config.results_database_url {
        Some(url) => {
            let store = SqliteResultsStore::connect(url)
                .await
                .unwrap_or_else(|e| panic!("Failed to open results database: {}", e));
            tracing::info!("Results database connected...");
            Arc::new(store)
        }
        None => {
            tracing::info!("Results sheet: {}", config.results_path.display());
            Arc::new(XlsxResultsStore::new(config.results_path.clone()))
        }
    };

    if let Err(e) = results.ensure_header().await {
        panic!("Failed to prepare results store: {}", e);
    }

    let addr = config.bind_addr;

    // Create AppState
    let state = AppState { config, results };

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    // Start the server
    axum::serve(listener, app).await.expect("Server error");
}
