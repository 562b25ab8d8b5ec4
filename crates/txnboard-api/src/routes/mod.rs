//! Route modules for the API server
//!
//! - transactions: transactions page, table partial, JSON view
//! - settings: configuration display
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX partials
//! - page.rs: Full page rendering

pub mod settings;
pub mod transactions;
