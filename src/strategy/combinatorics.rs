//! Binomial probability primitives
//!
//! Everything here is plain `f64` accumulation. Results are exact for small
//! arguments and degrade the usual floating-point way for large ones:
//! `factorial` overflows to infinity past 170!, and tail sums underflow to
//! exactly `0.0` when every term is below the smallest subnormal. The engine
//! relies on that underflow to reject impossible targets.

/// n! by iterative multiplication.
///
/// Returns `0.0` for negative `n`.
pub fn factorial(n: i64) -> f64 {
    if n < 0 {
        return 0.0;
    }
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    result
}

/// Number of ways to choose `r` items out of `n`.
///
/// Computed incrementally over the smaller of `r` and `n - r`; each step
/// multiplies by the next numerator term and then divides by `i`, which keeps
/// intermediate values close to the true binomial coefficients.
pub fn combinations(n: i64, r: i64) -> f64 {
    if r < 0 || r > n {
        return 0.0;
    }
    if r == 0 || r == n {
        return 1.0;
    }

    let r = r.min(n - r);
    let mut result = 1.0;
    for i in 1..=r {
        result *= (n - i + 1) as f64;
        result /= i as f64;
    }
    result
}

/// Probability of exactly `k` successes in `n` trials with success chance `p`.
pub fn binomial_pmf(k: i64, n: i64, p: f64) -> f64 {
    let coefficient = combinations(n, k);
    if coefficient == 0.0 {
        return 0.0;
    }
    coefficient * p.powf(k as f64) * (1.0 - p).powf((n - k) as f64)
}

/// Probability of at least `k` successes in `n` trials with success chance `p`.
///
/// Empty sum (`0.0`) when `k > n`.
pub fn prob_at_least(k: i64, n: i64, p: f64) -> f64 {
    (k..=n).map(|i| binomial_pmf(i, n, p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(-1), 0.0);
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert!(factorial(170).is_finite());
        assert!(factorial(171).is_infinite());
    }

    #[test]
    fn test_combinations_guards() {
        assert_eq!(combinations(5, -1), 0.0);
        assert_eq!(combinations(5, 6), 0.0);
        assert_eq!(combinations(5, 0), 1.0);
        assert_eq!(combinations(5, 5), 1.0);
        assert_eq!(combinations(0, 0), 1.0);
    }

    #[test]
    fn test_combinations_values() {
        assert_eq!(combinations(5, 2), 10.0);
        assert_eq!(combinations(10, 6), 210.0);
        assert_eq!(combinations(52, 5), 2_598_960.0);
    }

    #[test]
    fn test_combinations_symmetry() {
        for n in 0..=60 {
            for r in 0..=n {
                assert_eq!(combinations(n, r), combinations(n, n - r), "n={} r={}", n, r);
            }
        }
    }

    #[test]
    fn test_combinations_match_factorial_ratio() {
        for n in 0..=20 {
            for r in 0..=n {
                let expected = factorial(n) / (factorial(r) * factorial(n - r));
                assert!((combinations(n, r) - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_binomial_pmf_out_of_range() {
        assert_eq!(binomial_pmf(-1, 10, 0.5), 0.0);
        assert_eq!(binomial_pmf(11, 10, 0.5), 0.0);
    }

    #[test]
    fn test_binomial_pmf_sums_to_one() {
        for &p in &[0.1, 0.3, 0.5, 1.0 / 1.82, 0.9] {
            for n in [1, 5, 10, 50, 200] {
                let total: f64 = (0..=n).map(|k| binomial_pmf(k, n, p)).sum();
                assert!((total - 1.0).abs() < 1e-9, "n={} p={} total={}", n, p, total);
            }
        }
    }

    #[test]
    fn test_prob_at_least_bounds() {
        for &p in &[0.2, 0.5, 0.75] {
            for n in [1, 7, 30] {
                assert!((prob_at_least(0, n, p) - 1.0).abs() < 1e-9);
                assert_eq!(prob_at_least(n + 1, n, p), 0.0);
            }
        }
    }

    #[test]
    fn test_prob_at_least_known_value() {
        // P(X >= 2) for X ~ Bin(3, 0.5) = (3 + 1) / 8
        assert!((prob_at_least(2, 3, 0.5) - 0.5).abs() < EPS);
        // P(X >= n) is p^n
        assert!((prob_at_least(4, 4, 0.5) - 0.0625).abs() < EPS);
    }

    #[test]
    fn test_prob_at_least_underflows_to_zero() {
        let p = 1.0 / 10_001.0;
        assert_eq!(prob_at_least(200, 200, p), 0.0);
    }
}
