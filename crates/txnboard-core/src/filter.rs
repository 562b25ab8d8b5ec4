//! Category filter for the transactions table

use std::collections::HashSet;

use super::models::Transaction;

/// Selection value that shows every transaction
pub const ALL_CATEGORIES: &str = "all";

/// The selectable options: `all` followed by each distinct category in
/// first-seen order
pub fn category_options(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for tx in transactions {
        if seen.insert(tx.category.as_str()) {
            options.push(tx.category.clone());
        }
    }
    options
}

/// Label shown for a category option
pub fn option_label(category: &str) -> &str {
    if category == ALL_CATEGORIES {
        "All"
    } else {
        category
    }
}

/// Transactions matching the selection, in input order
pub fn filter_by_category<'a>(transactions: &'a [Transaction], selected: &str) -> Vec<&'a Transaction> {
    if selected == ALL_CATEGORIES {
        transactions.iter().collect()
    } else {
        transactions.iter().filter(|t| t.category == selected).collect()
    }
}

/// Current category selection of one table instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CategoryFilter {
    /// Start with a given selection; an empty value means `all`
    pub fn new(selected: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.select(selected);
        filter
    }

    /// Replace the selection
    pub fn select(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.selected = if category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category
        };
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_all(&self) -> bool {
        self.selected == ALL_CATEGORIES
    }

    /// Visible subset for the current selection
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        filter_by_category(transactions, &self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tx(id: &str, category: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            name: format!("tx {}", id),
            amount: Decimal::new(100, 0),
            transaction_type: TransactionType::Debit,
            date: NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            payment_channel: "online".to_string(),
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("1", "Food"),
            tx("2", "Travel"),
            tx("3", "Food"),
            tx("4", "Transfer"),
            tx("5", "Travel"),
        ]
    }

    fn ids(txs: &[&Transaction]) -> Vec<String> {
        txs.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_category_options_first_seen_order() {
        assert_eq!(category_options(&sample()), vec!["all", "Food", "Travel", "Transfer"]);
    }

    #[test]
    fn test_category_options_empty() {
        assert_eq!(category_options(&[]), vec!["all"]);
    }

    #[test]
    fn test_category_options_keep_literal_all_category() {
        let txs = vec![tx("1", "all"), tx("2", "All")];
        assert_eq!(category_options(&txs), vec!["all", "all", "All"]);
    }

    #[test]
    fn test_filter_all_returns_input() {
        let txs = sample();
        let visible = filter_by_category(&txs, ALL_CATEGORIES);
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_by_category_keeps_relative_order() {
        let txs = sample();
        assert_eq!(ids(&filter_by_category(&txs, "Travel")), vec!["2", "5"]);
        assert_eq!(ids(&filter_by_category(&txs, "Food")), vec!["1", "3"]);
    }

    #[test]
    fn test_filter_exact_match_only() {
        let txs = sample();
        assert!(filter_by_category(&txs, "food").is_empty());
        assert!(filter_by_category(&txs, "Groceries").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let txs = sample();
        let filter = CategoryFilter::new("Travel");
        assert_eq!(ids(&filter.apply(&txs)), ids(&filter.apply(&txs)));
    }

    #[test]
    fn test_category_filter_selection() {
        let mut filter = CategoryFilter::default();
        assert!(filter.is_all());

        filter.select("Food");
        assert_eq!(filter.selected(), "Food");
        assert!(!filter.is_all());

        filter.select("");
        assert!(filter.is_all());
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label("all"), "All");
        assert_eq!(option_label("Food"), "Food");
    }
}
