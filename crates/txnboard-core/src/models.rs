//! Core data models for the transaction table

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::types::TransactionType;

/// One financial ledger entry, as supplied by the transaction source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Free-text description
    pub name: String,
    /// Signed amount; negative conventionally means money out
    pub amount: Decimal,
    /// Declared debit/credit nature
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Posting time
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,
    /// Channel label (online, in store, ...)
    #[serde(alias = "payment_channel")]
    pub payment_channel: String,
    /// Grouping label used for filtering and badge styling
    pub category: String,
}

impl Transaction {
    /// Check if the transaction is declared as a debit
    pub fn is_debit(&self) -> bool {
        self.transaction_type == TransactionType::Debit
    }

    /// Check if the transaction is declared as a credit
    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }
}

/// Parse the date formats accepted in transaction exports
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`
/// and bare `YYYY-MM-DD` dates (midnight).
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_time(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid transaction date: {}", raw)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
