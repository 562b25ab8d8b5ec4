//! Display collaborators used by the transactions table
//!
//! The presenter never formats anything itself: status classification,
//! amount and date formatting, and name cleanup all go through
//! [`TransactionFormatter`]. [`DefaultFormatter`] is the implementation the
//! server uses; tests substitute their own.

use chrono::{Duration, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use txnboard_config::DisplayConfig;
use txnboard_utils::{format_number, remove_special_characters};

use super::types::TransactionStatus;

/// The different renderings of one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDateTime {
    /// `Mon, Oct 25, 8:30 AM`
    pub date_time: String,
    /// `Mon, 10/25/2024`
    pub date_day: String,
    /// `Oct 25, 2024`
    pub date_only: String,
    /// `8:30 AM`
    pub time_only: String,
}

/// Formatting and classification contract consumed by the presenter
pub trait TransactionFormatter: Send + Sync {
    /// Classify a transaction date relative to "now"
    fn classify_status(&self, date: &NaiveDateTime) -> TransactionStatus;

    /// Render an amount; the result starts with `-` iff the value is negative
    fn format_amount(&self, amount: &Decimal) -> String;

    /// Render a date in every supported style
    fn format_date_time(&self, date: &NaiveDateTime) -> FormattedDateTime;

    /// Remove characters that should not be displayed in a name
    fn strip_special_characters(&self, name: &str) -> String {
        remove_special_characters(name)
    }
}

/// Formatter driven by the `display` section of the configuration
#[derive(Debug, Clone)]
pub struct DefaultFormatter {
    currency_symbol: String,
    decimal_places: u32,
    thousands_separator: String,
    processing_window: Duration,
    now: NaiveDateTime,
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl DefaultFormatter {
    /// Create a formatter anchored at the current UTC time
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            currency_symbol: display.currency_symbol.clone(),
            decimal_places: display.decimal_places,
            thousands_separator: display.thousands_separator.clone(),
            processing_window: Duration::try_days(display.processing_window_days).unwrap_or(Duration::MAX),
            now: Utc::now().naive_utc(),
        }
    }

    /// Anchor status classification at a fixed time
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }
}

impl TransactionFormatter for DefaultFormatter {
    fn classify_status(&self, date: &NaiveDateTime) -> TransactionStatus {
        // A window reaching past the earliest representable date covers everything
        let cutoff = self
            .now
            .checked_sub_signed(self.processing_window)
            .unwrap_or(NaiveDateTime::MIN);
        if *date > cutoff {
            TransactionStatus::Processing
        } else {
            TransactionStatus::Success
        }
    }

    fn format_amount(&self, amount: &Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.*}", self.decimal_places as usize, rounded.abs());

        let (integer, fraction) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut formatted = String::new();
        if negative {
            formatted.push('-');
        }
        formatted.push_str(&self.currency_symbol);
        formatted.push_str(&format_number(integer, &self.thousands_separator));
        if let Some(fraction) = fraction {
            formatted.push('.');
            formatted.push_str(fraction);
        }
        formatted
    }

    fn format_date_time(&self, date: &NaiveDateTime) -> FormattedDateTime {
        FormattedDateTime {
            date_time: date.format("%a, %b %-d, %-I:%M %p").to_string(),
            date_day: date.format("%a, %m/%d/%Y").to_string(),
            date_only: date.format("%b %-d, %Y").to_string(),
            time_only: date.format("%-I:%M %p").to_string(),
        }
    }
}
