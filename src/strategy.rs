//! Capability interface for resampling strategies.

use crate::{ConfigError, MonteCarloSplitter, SplitPlan};

/// A resampling strategy a search or evaluation driver can consume
/// polymorphically.
///
/// A driver needs exactly two things from a splitter: how many repetitions
/// each plan will contain, and a plan of index ranges for a dataset of a
/// given length. Anything answering both is a valid strategy.
///
/// `split` takes `&mut self` because drawing origins advances the
/// strategy's random generator.
pub trait SplitStrategy {
    /// Generate a resampling plan for a dataset of `n_samples` observations.
    fn split(&mut self, n_samples: usize) -> Result<SplitPlan, ConfigError>;

    /// Number of repetitions each plan will contain.
    fn n_splits(&self) -> usize;
}

impl SplitStrategy for MonteCarloSplitter {
    fn split(&mut self, n_samples: usize) -> Result<SplitPlan, ConfigError> {
        MonteCarloSplitter::split(self, n_samples)
    }

    fn n_splits(&self) -> usize {
        MonteCarloSplitter::n_splits(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitConfig;

    #[test]
    fn consumed_through_dyn_object() {
        let config = SplitConfig::new(4, 0.6, 0.1).unwrap();
        let mut strategy: Box<dyn SplitStrategy> =
            Box::new(MonteCarloSplitter::seeded(config, 11));

        assert_eq!(strategy.n_splits(), 4);

        let plan = strategy.split(120).unwrap();
        assert_eq!(plan.len(), strategy.n_splits());
    }
}
