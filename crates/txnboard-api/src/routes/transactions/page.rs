//! Transactions page rendering - Full page endpoint

use crate::components::{render_table_view, TABLE_TARGET_ID};
use crate::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

/// Transactions page - starts in the loading state and swaps in the table
pub async fn page_transactions(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let (count, loaded_at, source) = {
        let store = state.store.read().await;
        (
            store.count(),
            store
                .loaded_at()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "-".to_string()),
            store.source_description(),
        )
    };

    let placeholders = super::api::build_view(&state, None, true, None);

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-2xl font-bold'>Transactions</h2>
            <button onclick='reloadTransactions()' class='px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200' title='Reload transactions'>
                Reload
            </button>
        </div>
        <div class='grid grid-cols-1 md:grid-cols-3 gap-3 mb-4'>
            <div class='bg-indigo-50 p-3 rounded-lg border border-indigo-100'><p class='text-xs text-indigo-600'>Transactions</p><p class='text-xl font-bold'>{count}</p></div>
            <div class='bg-green-50 p-3 rounded-lg border border-green-100'><p class='text-xs text-green-600'>Loaded at</p><p class='text-sm font-medium truncate'>{loaded_at}</p></div>
            <div class='bg-orange-50 p-3 rounded-lg border border-orange-100'><p class='text-xs text-orange-600'>Source</p><p class='text-sm font-medium truncate'>{source}</p></div>
        </div>
        <div id='{target}' hx-get='/transactions/table' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6'>
            {placeholders}
        </div>
        <script>
        function reloadTransactions() {{
            fetch('/api/reload', {{method: 'POST'}})
                .then(r => r.json())
                .then(data => {{
                    if (data.success) {{
                        window.location.reload();
                    }} else {{
                        alert('Reload failed: ' + data.message);
                    }}
                }})
                .catch(e => alert('Reload failed: ' + e));
        }}
        </script>"#,
        count = count,
        loaded_at = loaded_at,
        source = txnboard_utils::escape_html(&source),
        target = TABLE_TARGET_ID,
        placeholders = render_table_view(&placeholders, &state.styles),
    );

    Html(crate::page_response(&headers, "Transactions", &inner_content))
}
