//! Core transaction table logic
//!
//! - models/types: the transaction model
//! - filter: category options and filtering
//! - format: status/amount/date collaborators
//! - styles: badge style table
//! - table: the presenter producing a render-ready view
//! - source: transaction sources and the store

pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod source;
pub mod styles;
pub mod table;
pub mod types;

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorCode, ErrorContext, ErrorLogger, ErrorSeverity};
pub use filter::{category_options, filter_by_category, option_label, CategoryFilter, ALL_CATEGORIES};
pub use format::{DefaultFormatter, FormattedDateTime, TransactionFormatter};
pub use models::{parse_date_time, Transaction};
pub use source::{parse_transactions, JsonFileSource, SourceRef, TransactionSource, TransactionStore};
pub use styles::{StyleBundle, StyleTable};
pub use table::{
    derive_row, AmountTone, RenderMode, TableView, TransactionRow, TransactionsTable, DEFAULT_PLACEHOLDER_ROWS,
};
pub use types::{TransactionStatus, TransactionType};
