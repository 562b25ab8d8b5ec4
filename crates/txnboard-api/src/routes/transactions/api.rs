//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - htmx_transactions_table: Filter control + table (HTML fragment)
//! - api_transactions: The same render pass as JSON
//! - api_categories: Category options (JSON)

use crate::components::{pending_placeholders, render_table_view};
use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use txnboard_core::{
    category_options, CategoryFilter, DefaultFormatter, TableView, Transaction, TransactionsTable,
    ALL_CATEGORIES,
};

/// Query parameters shared by the table endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    /// Selected category; missing or empty means `all`
    #[serde(default)]
    pub category: Option<String>,
    /// Force the loading placeholders
    #[serde(default)]
    pub loading: bool,
}

/// Run one render pass of the transactions table
pub(crate) fn build_view(
    state: &AppState,
    transactions: Option<&[Transaction]>,
    is_loading: bool,
    category: Option<&str>,
) -> TableView {
    let formatter = DefaultFormatter::from_config(&state.config.display);
    let table = TransactionsTable::new(transactions)
        .loading(is_loading)
        .with_filter(CategoryFilter::new(category.unwrap_or(ALL_CATEGORIES)));

    let view = table.view(&formatter);
    log::debug!(
        "Rendered transactions table: mode={}, category={}",
        view.mode(),
        table.selected_category()
    );
    view
}

/// HTMX: Transactions table - Partial page update
///
/// While a reload holds the store, loading placeholders are returned
/// instead of waiting; they poll until the table can be rendered.
pub async fn htmx_transactions_table(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Html<String> {
    let category = query.category.as_deref();
    let html = match state.store.try_read() {
        Ok(store) => {
            let view = build_view(&state, store.transactions(), query.loading, category);
            render_table_view(&view, &state.styles)
        }
        Err(_) => {
            log::debug!("Transaction store is reloading, rendering pending placeholders");
            let view = build_view(&state, None, true, category);
            let selected = CategoryFilter::new(category.unwrap_or(ALL_CATEGORIES));
            pending_placeholders(&render_table_view(&view, &state.styles), selected.selected())
        }
    };

    Html(html)
}

/// Transactions table view (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Json<TableView> {
    let store = state.store.read().await;
    Json(build_view(&state, store.transactions(), query.loading, query.category.as_deref()))
}

/// Category options (JSON API)
pub async fn api_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let store = state.store.read().await;
    let transactions = store.require_transactions()?;
    Ok(Json(category_options(transactions)))
}
