//! Common test utilities and fixtures

#![allow(dead_code)]

use masaniello::{Outcome, StakingEngine};

/// Relative tolerance for comparing derived money amounts
pub const REL_TOLERANCE: f64 = 1e-9;

/// Scenario A parameters: 100 capital, 82% payout, 6 wins out of 10
pub fn scenario_a() -> StakingEngine {
    StakingEngine::configure(100.0, 82.0, 10, 6).expect("scenario A should configure")
}

/// Apply a sequence like "WLWW" and return the engine
pub fn play(mut engine: StakingEngine, sequence: &str) -> StakingEngine {
    for outcome in Outcome::parse_sequence(sequence).expect("valid outcome sequence") {
        engine.apply_outcome(outcome);
    }
    engine
}

/// Every ordering of `wins` wins and `losses` losses
pub fn orderings(wins: usize, losses: usize) -> Vec<Vec<Outcome>> {
    if wins == 0 {
        return vec![vec![Outcome::Loss; losses]];
    }
    if losses == 0 {
        return vec![vec![Outcome::Win; wins]];
    }

    let mut result = Vec::new();
    for mut tail in orderings(wins - 1, losses) {
        tail.insert(0, Outcome::Win);
        result.push(tail);
    }
    for mut tail in orderings(wins, losses - 1) {
        tail.insert(0, Outcome::Loss);
        result.push(tail);
    }
    result
}

pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() / scale < REL_TOLERANCE,
        "expected {} but got {}",
        expected,
        actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orderings_count() {
        // C(5, 2)
        assert_eq!(orderings(2, 3).len(), 10);
    }
}
