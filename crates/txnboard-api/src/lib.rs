//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::transactions: Transactions page, table partial, JSON view
//! - routes::settings: Configuration display

pub mod components;
pub mod error;
pub mod routes;

use axum::{
    http::Method,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use txnboard_config::Config;
use txnboard_core::{DefaultErrorLogger, ErrorContext, ErrorLogger, StyleTable, TransactionStore};

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<TransactionStore>>,
    pub config: Config,
    pub styles: Arc<StyleTable>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<RwLock<TransactionStore>>) -> Self {
        let styles = Arc::new(StyleTable::from_config(&config));
        Self { store, config, styles }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::settings::api_settings;
    use routes::transactions::{api_categories, api_transactions, htmx_transactions_table, page_transactions};

    // Cross-origin access covers the read-only endpoints; reload stays same-origin
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/transactions", get(api_transactions))
        .route("/categories", get(api_categories))
        .route("/settings", get(api_settings))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]))
        .route("/reload", post(api_reload));

    Router::new()
        .nest("/api", api)
        // HTMX page routes
        .route("/", get(index_page))
        .route("/transactions", get(page_transactions))
        // HTMX partial routes
        .route("/transactions/table", get(htmx_transactions_table))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn index_page() -> Redirect {
    Redirect::to("/transactions")
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound {
        resource: uri.path().to_string(),
    }
}

/// Reload transactions API endpoint
async fn api_reload(state: axum::extract::State<AppState>) -> Json<serde_json::Value> {
    let mut store = state.store.write().await;
    match store.reload().await {
        Ok(count) => Json(serde_json::json!({
            "success": true,
            "message": format!("Reloaded {} transactions", count),
        })),
        Err(e) => {
            let context = ErrorContext::new("reload")
                .with_data("source", serde_json::json!(store.source_description()));
            DefaultErrorLogger.log_error(&e, &context);
            Json(serde_json::json!({ "success": false, "message": e.to_string() }))
        }
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - txnboard</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    <main class='max-w-6xl mx-auto p-6'>{}</main>
</body>
</html>"#,
        txnboard_utils::escape_html(title),
        content
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, inner_content)
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: Config, store: Arc<RwLock<TransactionStore>>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store);

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;
    log::info!("Starting txnboard server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /transactions (Transactions table)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Tests ====================
