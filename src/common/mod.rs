//! Common module - error types and shared run types

pub mod errors;
pub mod types;

pub use errors::{AppError, ConfigError, Result};
pub use types::{Outcome, RunStatus, TradeRecord};
