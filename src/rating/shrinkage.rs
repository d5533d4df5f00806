use super::constants::Prior;

/// Bayesian-prior smoothing of a rate.
///
/// Blends `actual / attempts` with `prior_rate` as if `prior_weight` extra
/// attempts had been observed at the prior rate. With no attempts the result
/// is exactly the prior rate; as attempts grow it converges to the raw rate.
/// `prior_weight` must be positive so the denominator is never zero.
pub fn shrink(actual: f64, attempts: f64, prior_rate: f64, prior_weight: f64) -> f64 {
    (actual + prior_rate * prior_weight) / (attempts + prior_weight)
}

pub fn shrink_with(actual: f64, attempts: u64, prior: Prior) -> f64 {
    shrink(actual, attempts as f64, prior.rate, prior.weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_attempts_returns_prior() {
        assert!((shrink(0.0, 0.0, 0.05, 15.0) - 0.05).abs() < 1e-12);
        assert!((shrink(0.0, 0.0, 1.5, 10.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_small_perfect_sample_is_pulled_toward_prior() {
        let rate = shrink(2.0, 2.0, 0.30, 15.0);
        assert!(rate < 1.0);
        assert!(rate > 0.30);
    }

    #[test]
    fn test_converges_to_raw_rate() {
        let rate = shrink(50_000.0, 100_000.0, 0.30, 15.0);
        assert!((rate - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_negative_actual_is_allowed() {
        // more attack errors than kills
        let rate = shrink(-3.0, 10.0, 0.30, 15.0);
        assert!((rate - 1.5 / 25.0).abs() < 1e-12);
    }
}
