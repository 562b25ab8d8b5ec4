//! txnboard main entry point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;
use txnboard_api::start_server;
use txnboard_config::Config;
use txnboard_core::{DefaultErrorLogger, ErrorContext, ErrorLogger, JsonFileSource, TransactionStore};

#[derive(Parser, Debug)]
#[command(name = "txnboard")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight dashboard with a filterable transactions table", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    // Logging is configured from the file, so report config errors directly
    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            for hint in e.suggestions() {
                eprintln!("  hint: {}", hint);
            }
            return Err(e.into());
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    let rt = Runtime::new()?;
    rt.block_on(async {
        let transactions_path = config.transactions_path();
        log::info!(
            "Config loaded: data path={}, transactions_file={}",
            config.data.path.display(),
            config.data.transactions_file
        );

        let source = Arc::new(JsonFileSource::new(transactions_path.clone()));
        let store = Arc::new(RwLock::new(TransactionStore::new(source)));

        if transactions_path.exists() {
            let mut guard = store.write().await;
            match guard.load().await {
                Ok(count) => log::info!("Loaded {} transactions", count),
                Err(e) => {
                    let context = ErrorContext::new("startup load")
                        .with_data("path", serde_json::json!(transactions_path.display().to_string()));
                    DefaultErrorLogger.log_error(&e, &context);
                }
            }
        } else {
            log::warn!("Transactions file not found: {}", transactions_path.display());
        }

        start_server(config, store).await
    })
}
