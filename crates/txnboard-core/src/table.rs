//! Transactions table presenter
//!
//! Turns `(transactions, is_loading, selected category)` into a
//! [`TableView`]: loading placeholders, the empty message, or the category
//! options plus one [`TransactionRow`] per visible transaction. Rendering is
//! a pure function of those inputs; the HTTP layer turns the view into
//! markup or JSON.

use serde::Serialize;

use super::filter::{category_options, CategoryFilter};
use super::format::TransactionFormatter;
use super::models::Transaction;
use super::types::TransactionStatus;

/// Placeholder rows shown while loading; always this many
pub const DEFAULT_PLACEHOLDER_ROWS: usize = 5;

/// Which of the three mutually exclusive outputs a render produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Loading,
    Empty,
    Populated,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Loading => write!(f, "loading"),
            RenderMode::Empty => write!(f, "empty"),
            RenderMode::Populated => write!(f, "populated"),
        }
    }
}

/// Whether a row is styled as money out or money in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountTone {
    Negative,
    Positive,
}

/// Display fields derived for one visible transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    /// Name with special characters removed
    pub display_name: String,
    /// Formatter output before any debit prefix
    pub formatted_amount: String,
    /// Amount text as shown in the table
    pub display_amount: String,
    pub is_debit: bool,
    pub is_credit: bool,
    pub tone: AmountTone,
    pub status: TransactionStatus,
    pub display_date: String,
    pub payment_channel: String,
    pub category: String,
}

impl TransactionRow {
    pub fn is_negative(&self) -> bool {
        self.tone == AmountTone::Negative
    }
}

/// Derive the display fields of one transaction
///
/// A row is negative when the transaction is declared a debit OR the
/// formatted amount starts with `-`. Debits get an extra `-` prefix even
/// when the formatter already produced one.
pub fn derive_row(tx: &Transaction, formatter: &dyn TransactionFormatter) -> TransactionRow {
    let status = formatter.classify_status(&tx.date);
    let formatted_amount = formatter.format_amount(&tx.amount);
    let is_debit = tx.is_debit();
    let is_credit = tx.is_credit();

    let tone = if is_debit || formatted_amount.starts_with('-') {
        AmountTone::Negative
    } else {
        AmountTone::Positive
    };

    let display_amount = if is_debit {
        format!("-{}", formatted_amount)
    } else {
        formatted_amount.clone()
    };

    TransactionRow {
        id: tx.id.clone(),
        display_name: formatter.strip_special_characters(&tx.name),
        formatted_amount,
        display_amount,
        is_debit,
        is_credit,
        tone,
        status,
        display_date: formatter.format_date_time(&tx.date).date_time,
        payment_channel: tx.payment_channel.clone(),
        category: tx.category.clone(),
    }
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TableView {
    Loading {
        placeholder_rows: usize,
    },
    Empty,
    Populated {
        categories: Vec<String>,
        selected_category: String,
        rows: Vec<TransactionRow>,
    },
}

impl TableView {
    pub fn mode(&self) -> RenderMode {
        match self {
            TableView::Loading { .. } => RenderMode::Loading,
            TableView::Empty => RenderMode::Empty,
            TableView::Populated { .. } => RenderMode::Populated,
        }
    }
}

/// The transactions table with its category selection
///
/// `None` transactions means no valid list is available; it renders the
/// same as an empty list.
#[derive(Debug, Clone)]
pub struct TransactionsTable<'a> {
    transactions: Option<&'a [Transaction]>,
    is_loading: bool,
    filter: CategoryFilter,
}

impl<'a> TransactionsTable<'a> {
    pub fn new(transactions: Option<&'a [Transaction]>) -> Self {
        Self {
            transactions,
            is_loading: false,
            filter: CategoryFilter::default(),
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Category select changed
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.filter.select(category);
    }

    pub fn selected_category(&self) -> &str {
        self.filter.selected()
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.is_loading {
            return RenderMode::Loading;
        }
        match self.transactions {
            Some(txs) if !txs.is_empty() => RenderMode::Populated,
            _ => RenderMode::Empty,
        }
    }

    /// Options for the category select, from the full list
    pub fn categories(&self) -> Vec<String> {
        category_options(self.transactions.unwrap_or_default())
    }

    /// Transactions visible under the current selection
    pub fn visible(&self) -> Vec<&'a Transaction> {
        self.filter.apply(self.transactions.unwrap_or_default())
    }

    /// Run one render pass
    pub fn view(&self, formatter: &dyn TransactionFormatter) -> TableView {
        match self.render_mode() {
            RenderMode::Loading => TableView::Loading {
                placeholder_rows: DEFAULT_PLACEHOLDER_ROWS,
            },
            RenderMode::Empty => TableView::Empty,
            RenderMode::Populated => TableView::Populated {
                categories: self.categories(),
                selected_category: self.filter.selected().to_string(),
                rows: self
                    .visible()
                    .into_iter()
                    .map(|tx| derive_row(tx, formatter))
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormattedDateTime;
    use crate::types::TransactionType;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    /// Formatter with canned output so row derivation can be checked in isolation
    struct StubFormatter;

    impl TransactionFormatter for StubFormatter {
        fn classify_status(&self, date: &NaiveDateTime) -> TransactionStatus {
            if date.date() >= NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() {
                TransactionStatus::Processing
            } else {
                TransactionStatus::Success
            }
        }

        fn format_amount(&self, amount: &Decimal) -> String {
            if amount.is_sign_negative() {
                format!("-${:.2}", amount.abs())
            } else {
                format!("${:.2}", amount)
            }
        }

        fn format_date_time(&self, date: &NaiveDateTime) -> FormattedDateTime {
            let text = date.format("%Y-%m-%d").to_string();
            FormattedDateTime {
                date_time: format!("at {}", text),
                date_day: text.clone(),
                date_only: text.clone(),
                time_only: text,
            }
        }
    }

    fn tx(id: &str, kind: TransactionType, amount: i64, category: &str, day: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            name: format!("Shop #{}!", id),
            amount: Decimal::new(amount, 0),
            transaction_type: kind,
            date: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            payment_channel: "online".to_string(),
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("1", TransactionType::Debit, 50, "Food", 10),
            tx("2", TransactionType::Credit, -20, "Refund", 11),
            tx("3", TransactionType::Credit, 300, "Payment", 12),
            tx("4", TransactionType::Debit, 12, "Food", 13),
        ]
    }

    #[test]
    fn test_debit_with_positive_formatted_amount() {
        let row = derive_row(&tx("1", TransactionType::Debit, 50, "Food", 10), &StubFormatter);

        assert_eq!(row.formatted_amount, "$50.00");
        assert_eq!(row.display_amount, "-$50.00");
        assert!(row.is_debit);
        assert!(row.is_negative());
    }

    #[test]
    fn test_credit_with_negative_formatted_amount() {
        let row = derive_row(&tx("2", TransactionType::Credit, -20, "Refund", 10), &StubFormatter);

        assert_eq!(row.display_amount, "-$20.00");
        assert!(row.is_credit);
        assert!(!row.is_debit);
        assert_eq!(row.tone, AmountTone::Negative);
    }

    #[test]
    fn test_debit_with_negative_amount_doubles_sign() {
        let row = derive_row(&tx("5", TransactionType::Debit, -7, "Food", 10), &StubFormatter);
        assert_eq!(row.display_amount, "--$7.00");
        assert!(row.is_negative());
    }

    #[test]
    fn test_credit_positive_is_positive() {
        let row = derive_row(&tx("3", TransactionType::Credit, 300, "Payment", 10), &StubFormatter);
        assert_eq!(row.display_amount, "$300.00");
        assert_eq!(row.tone, AmountTone::Positive);
    }

    #[test]
    fn test_other_type_shows_formatted_amount_unchanged() {
        let row = derive_row(&tx("6", TransactionType::Other, 5, "Misc", 10), &StubFormatter);
        assert!(!row.is_debit);
        assert!(!row.is_credit);
        assert_eq!(row.display_amount, "$5.00");
        assert_eq!(row.tone, AmountTone::Positive);
    }

    #[test]
    fn test_row_uses_collaborators() {
        let mut early = tx("7", TransactionType::Debit, 1, "Food", 1);
        early.date = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let row = derive_row(&early, &StubFormatter);

        assert_eq!(row.status, TransactionStatus::Success);
        assert_eq!(row.display_date, "at 2024-02-01");
        assert_eq!(row.display_name, "Shop 7");
        assert_eq!(row.payment_channel, "online");
        assert_eq!(row.category, "Food");
    }

    #[test]
    fn test_status_ignores_type_and_amount() {
        let debit = derive_row(&tx("1", TransactionType::Debit, 50, "Food", 10), &StubFormatter);
        let credit = derive_row(&tx("2", TransactionType::Credit, -20, "Food", 10), &StubFormatter);
        assert_eq!(debit.status, credit.status);
    }

    #[test]
    fn test_loading_renders_placeholders_regardless_of_data() {
        let txs = sample();
        for input in [Some(txs.as_slice()), Some(&[][..]), None] {
            let view = TransactionsTable::new(input).loading(true).view(&StubFormatter);
            assert_eq!(view, TableView::Loading { placeholder_rows: 5 });
        }
    }

    #[test]
    fn test_loading_ignores_filter() {
        let txs = sample();
        let mut table = TransactionsTable::new(Some(txs.as_slice())).loading(true);
        table.select_category("Food");
        assert_eq!(table.render_mode(), RenderMode::Loading);
    }

    #[test]
    fn test_empty_and_missing_lists_render_empty() {
        let empty = TransactionsTable::new(Some(&[][..])).view(&StubFormatter);
        assert_eq!(empty, TableView::Empty);

        let missing = TransactionsTable::new(None).view(&StubFormatter);
        assert_eq!(missing, TableView::Empty);
    }

    #[test]
    fn test_populated_view_all() {
        let txs = sample();
        let view = TransactionsTable::new(Some(txs.as_slice())).view(&StubFormatter);

        match view {
            TableView::Populated {
                categories,
                selected_category,
                rows,
            } => {
                assert_eq!(categories, vec!["all", "Food", "Refund", "Payment"]);
                assert_eq!(selected_category, "all");
                let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "2", "3", "4"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_select_category_filters_rows_but_not_options() {
        let txs = sample();
        let mut table = TransactionsTable::new(Some(txs.as_slice()));
        table.select_category("Food");

        match table.view(&StubFormatter) {
            TableView::Populated {
                categories,
                selected_category,
                rows,
            } => {
                assert_eq!(categories.len(), 4);
                assert_eq!(selected_category, "Food");
                let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "4"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_selection_keeps_table_with_no_rows() {
        let txs = sample();
        let table = TransactionsTable::new(Some(txs.as_slice())).with_filter(CategoryFilter::new("Travel"));

        match table.view(&StubFormatter) {
            TableView::Populated { rows, .. } => assert!(rows.is_empty()),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_view_is_repeatable() {
        let txs = sample();
        let table = TransactionsTable::new(Some(txs.as_slice())).with_filter(CategoryFilter::new("Food"));
        assert_eq!(table.view(&StubFormatter), table.view(&StubFormatter));
    }

    #[test]
    fn test_view_serializes_mode_tag() {
        let json = serde_json::to_value(TableView::Empty).unwrap();
        assert_eq!(json["mode"], "empty");

        let json = serde_json::to_value(TableView::Loading { placeholder_rows: 5 }).unwrap();
        assert_eq!(json["mode"], "loading");
        assert_eq!(json["placeholder_rows"], 5);
    }
}
