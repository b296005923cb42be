//! Per-fold evaluation over a resampling plan.

use crate::{Fold, SplitPlan};

/// Apply a scoring function to every fold of a plan, collecting the scores
/// in draw order.
///
/// `score_fn` receives each fold and returns a score; model fitting, data
/// slicing, and parameter selection stay with the caller.
///
/// # Example
///
/// ```
/// use nanosplit::{eval, MonteCarloSplitter, SplitConfig};
///
/// let data: Vec<f64> = (0..120).map(f64::from).collect();
///
/// let config = SplitConfig::new(5, 0.6, 0.1).unwrap();
/// let mut splitter = MonteCarloSplitter::seeded(config, 42);
/// let plan = splitter.split(data.len()).unwrap();
///
/// // Score each repetition, e.g. mean of the test window.
/// let scores = eval::evaluate(&plan, |fold| {
///     let test = &data[fold.test.clone()];
///     test.iter().sum::<f64>() / test.len() as f64
/// });
///
/// assert_eq!(scores.len(), 5);
/// ```
pub fn evaluate<F>(plan: &SplitPlan, score_fn: F) -> Vec<f64>
where
    F: Fn(&Fold) -> f64,
{
    plan.iter().map(|fold| score_fn(&fold)).collect()
}

/// Parallel variant of [`evaluate`]; scores still come back in draw order.
#[cfg(feature = "parallel")]
pub fn evaluate_parallel<F>(plan: &SplitPlan, score_fn: F) -> Vec<f64>
where
    F: Fn(&Fold) -> f64 + Sync,
{
    use rayon::prelude::*;

    let folds: Vec<Fold> = plan.iter().collect();
    folds.par_iter().map(|fold| score_fn(fold)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MonteCarloSplitter, SplitConfig};

    fn plan() -> SplitPlan {
        let config = SplitConfig::new(6, 0.6, 0.1).unwrap();
        MonteCarloSplitter::seeded(config, 5).split(120).unwrap()
    }

    #[test]
    fn scores_follow_draw_order() {
        let plan = plan();
        let scores = evaluate(&plan, |fold| fold.test.start as f64);

        let expected: Vec<f64> = plan.origins().iter().map(|&o| o as f64).collect();
        assert_eq!(scores, expected);
    }

    #[test]
    fn one_score_per_fold() {
        let plan = plan();
        let scores = evaluate(&plan, |_| 1.0);
        assert_eq!(scores.len(), plan.len());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let plan = plan();
        let score = |fold: &Fold| (fold.train.start + fold.test.end) as f64;

        assert_eq!(evaluate(&plan, score), evaluate_parallel(&plan, score));
    }
}
