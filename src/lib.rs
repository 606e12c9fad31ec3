//! Masaniello Library
//!
//! A Rust library for computing Masaniello progressive staking schedules
//! over fixed-odds trade sequences.

pub mod common;
pub mod config;
pub mod report;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{AppError, ConfigError, Result};
pub use common::types::{Outcome, RunStatus, TradeRecord};
pub use config::types::AppConfig;
pub use report::Report;

// Strategy types
pub use strategy::{
    RawInput, Snapshot, StakingEngine, StrategyConfig, StrategyInput, StrategyState,
};
