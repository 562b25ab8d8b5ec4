//! Transaction sources and the in-memory store the server renders from

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;

use super::error::{CoreError, CoreResult};
use super::models::Transaction;

/// Somewhere transactions can be loaded from
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Load the full transaction list
    async fn load(&self) -> CoreResult<Vec<Transaction>>;

    /// Human-readable location, for logs and status output
    fn describe(&self) -> String;
}

/// Source reference type
pub type SourceRef = Arc<dyn TransactionSource>;

/// Parse a JSON array of transactions
pub fn parse_transactions(content: &str) -> CoreResult<Vec<Transaction>> {
    serde_json::from_str(content).map_err(|e| CoreError::ParseError {
        message: e.to_string(),
    })
}

/// Reads a JSON array of transactions from a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl TransactionSource for JsonFileSource {
    async fn load(&self) -> CoreResult<Vec<Transaction>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CoreError::FileNotFound {
                    path: self.path.to_string_lossy().to_string(),
                },
                _ => CoreError::from(e),
            })?;

        parse_transactions(&content)
    }

    fn describe(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Last successfully loaded transaction list
pub struct TransactionStore {
    source: SourceRef,
    transactions: Option<Vec<Transaction>>,
    loaded_at: Option<DateTime<Utc>>,
}

impl TransactionStore {
    /// Create an empty store; nothing is loaded until [`load`](Self::load)
    pub fn new(source: SourceRef) -> Self {
        Self {
            source,
            transactions: None,
            loaded_at: None,
        }
    }

    /// Load from the source, returning the number of transactions
    ///
    /// On failure the previously loaded list is kept.
    pub async fn load(&mut self) -> CoreResult<usize> {
        let transactions = self.source.load().await?;
        let count = transactions.len();
        log::info!("Loaded {} transactions from {}", count, self.source.describe());

        self.transactions = Some(transactions);
        self.loaded_at = Some(Utc::now());
        Ok(count)
    }

    /// Reload the store from its source
    pub async fn reload(&mut self) -> CoreResult<usize> {
        self.load().await
    }

    /// The loaded list, or `None` if nothing was ever loaded
    pub fn transactions(&self) -> Option<&[Transaction]> {
        self.transactions.as_deref()
    }

    /// Loaded transactions, failing if nothing was ever loaded
    pub fn require_transactions(&self) -> CoreResult<&[Transaction]> {
        self.transactions().ok_or(CoreError::NotLoaded)
    }

    pub fn count(&self) -> usize {
        self.transactions.as_ref().map_or(0, Vec::len)
    }

    pub fn is_loaded(&self) -> bool {
        self.transactions.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}
