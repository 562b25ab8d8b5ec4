//! Transaction routes - Transactions table with category filter
//!
//! Features:
//! - Full page with loading placeholders swapped for the table on load
//! - HTMX partial re-rendered whenever the category select changes
//! - JSON view of the same render pass
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_categories, api_transactions, htmx_transactions_table};
pub use page::page_transactions;
