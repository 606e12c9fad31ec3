//! Strategy module for Masaniello stake sizing
//!
//! This module provides the staking engine and the probability primitives it
//! is built on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CONFIGURE (once)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RawInput.parse() → StrategyInput                           │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  StrategyConfig::derive()                                   │
//! │    - odds = 1 + payout / 100, p = 1 / odds                  │
//! │    - target capital = capital / P(wins >= target)           │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PER TRADE                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  StakingEngine.next_stake()        (read-only)              │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  StakingEngine.apply_outcome(Win | Loss)                    │
//! │    - settles the stake, appends to history                  │
//! │    - ACTIVE → SUCCESS | STOP_LOSS | EXHAUSTED               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`StakingEngine`]: Owns one run's config and state
//! - [`StrategyConfig`]: Fixed parameters plus derived target capital
//! - [`StrategyState`]: Balance, counters and trade history
//! - [`Snapshot`]: Read-only projection for display
//! - [`RawInput`]: Text fields as a host collects them
//!
//! # Example
//!
//! ```
//! use masaniello::strategy::{RawInput, StakingEngine};
//! use masaniello::{Outcome, RunStatus};
//!
//! let mut engine = RawInput::new("100", "82", "5", "5")
//!     .parse()
//!     .and_then(|input| input.configure())
//!     .unwrap();
//!
//! // One loss with five wins required out of five trades ends the run
//! assert_eq!(engine.apply_outcome(Outcome::Loss), RunStatus::StopLoss);
//! assert_eq!(engine.next_stake(), 0.0);
//! ```

pub mod combinatorics;
mod engine;
mod input;
mod snapshot;
mod types;

pub use combinatorics::{binomial_pmf, combinations, factorial, prob_at_least};

pub use engine::StakingEngine;

pub use input::{RawInput, StrategyInput};

pub use snapshot::Snapshot;

pub use types::{StrategyConfig, StrategyState};
