use crate::Probability;
use crate::Utility;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CfrConfig {
    pub iters: usize,
}

impl Default for CfrConfig {
    fn default() -> Self {
        Self { iters: 100 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CfrResult {
    /// normalized average strategy, index-aligned with the utilities
    pub strategy: Vec<Probability>,
    /// final accumulated regrets
    pub regrets: Vec<Utility>,
}

/// scale to a distribution, or uniform when the mass is non-positive
fn normalize(v: &mut [Probability]) {
    let sum: Probability = v.iter().sum();
    if sum <= 0.0 {
        let uniform = if v.is_empty() { 0.0 } else { 1.0 / v.len() as Probability };
        v.iter_mut().for_each(|x| *x = uniform);
    } else {
        v.iter_mut().for_each(|x| *x /= sum);
    }
}

/// Regret matching at a single decision node with a fixed utility vector.
///
/// Each iteration accumulates per-action regret against the expected
/// utility of the current strategy, rederives the strategy from positive
/// regrets (uniform when none are positive), and adds it into a linear
/// undiscounted running average. Because the utilities never change,
/// mass concentrates on the maximizing action(s) as iterations grow;
/// zero iterations leave the all-zero running sum, which normalizes to
/// the uniform distribution.
pub fn cfr_onestep(utilities: &[Utility], config: &CfrConfig) -> CfrResult {
    let n = utilities.len();
    let uniform = if n > 0 { 1.0 / n as Probability } else { 0.0 };
    let mut regrets = vec![0.0; n];
    let mut strategy = vec![uniform; n];
    let mut average = vec![0.0; n];

    for _ in 0..config.iters {
        let expected: Utility = strategy
            .iter()
            .zip(utilities.iter())
            .map(|(p, u)| p * u)
            .sum();
        let mut positive = 0.0;
        for (regret, utility) in regrets.iter_mut().zip(utilities.iter()) {
            *regret += utility - expected;
            if *regret > 0.0 {
                positive += *regret;
            }
        }
        if positive > 0.0 {
            for (s, regret) in strategy.iter_mut().zip(regrets.iter()) {
                *s = regret.max(0.0) / positive;
            }
        } else {
            strategy.iter_mut().for_each(|s| *s = uniform);
        }
        for (sum, s) in average.iter_mut().zip(strategy.iter()) {
            *sum += *s;
        }
    }

    normalize(&mut average);
    CfrResult {
        strategy: average,
        regrets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(utilities: &[Utility], iters: usize) -> CfrResult {
        cfr_onestep(utilities, &CfrConfig { iters })
    }

    #[test]
    fn zero_iterations_yield_uniform() {
        let result = solve(&[1.0, 2.0, 3.0], 0);
        assert_eq!(result.strategy, vec![1.0 / 3.0; 3]);
        assert_eq!(result.regrets, vec![0.0; 3]);
    }

    #[test]
    fn empty_action_list_is_not_an_error() {
        let result = solve(&[], 100);
        assert!(result.strategy.is_empty());
        assert!(result.regrets.is_empty());
    }

    #[test]
    fn mass_concentrates_on_the_best_action() {
        let result = solve(&[-1.0, 0.5, 2.0], 1000);
        let best = result.strategy[2];
        assert!(best > result.strategy[0]);
        assert!(best > result.strategy[1]);
        assert!(best > 0.9, "best action mass {}", best);
    }

    #[test]
    fn strategy_is_a_distribution() {
        for iters in [1, 7, 100] {
            let result = solve(&[0.3, -0.2, 0.3, 0.0], iters);
            let total: Probability = result.strategy.iter().sum();
            assert!((total - 1.0).abs() < 1e-6);
            assert!(result.strategy.iter().all(|p| *p >= 0.0));
        }
    }

    #[test]
    fn equal_utilities_stay_uniform() {
        let result = solve(&[1.0, 1.0], 250);
        assert!((result.strategy[0] - 0.5).abs() < 1e-9);
        assert!((result.strategy[1] - 0.5).abs() < 1e-9);
    }
}
