//! Monte Carlo split generation: validation, origin sampling, plan assembly.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ConfigError, SplitConfig, SplitPlan};

/// Randomized-origin train/test splitter for time-indexed data.
///
/// Each call to [`split`](MonteCarloSplitter::split) derives fixed train and
/// test window lengths from the dataset length, draws one origin per
/// repetition uniformly (with replacement) from the range of positions that
/// leaves room for both windows, and returns the whole design as a
/// [`SplitPlan`].
///
/// The splitter owns its random generator. [`seeded`](MonteCarloSplitter::seeded)
/// construction pins the generator state, making plans reproducible;
/// [`new`](MonteCarloSplitter::new) seeds from OS entropy. Successive `split`
/// calls advance the generator, so each call yields an independent plan.
///
/// # Example
///
/// ```
/// use nanosplit::{MonteCarloSplitter, SplitConfig};
///
/// let config = SplitConfig::new(8, 0.5, 0.2).unwrap();
/// let mut splitter = MonteCarloSplitter::seeded(config, 99);
///
/// let plan = splitter.split(1_000).unwrap();
/// assert_eq!(plan.len(), 8);
/// assert_eq!(plan.train_window(), 499);
/// assert_eq!(plan.test_window(), 199);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloSplitter {
    config: SplitConfig,
    rng: StdRng,
}

impl MonteCarloSplitter {
    /// Create a splitter seeded from OS entropy.
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a splitter with a deterministic seed.
    ///
    /// Two splitters with identical configuration and seed produce identical
    /// plans, the contract reproducible experiments rely on.
    pub fn seeded(config: SplitConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of repetitions each plan will contain.
    ///
    /// Lets a search driver size its result buffers without enumerating a
    /// plan first.
    pub fn n_splits(&self) -> usize {
        self.config.n_splits()
    }

    /// Borrow the configuration.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Generate a resampling plan for a dataset of `n_samples` observations.
    ///
    /// Window lengths are `floor(n_samples * ratio) - 1` for each of the two
    /// ratios, shared by every repetition. Origins are drawn uniformly with
    /// replacement from the admissible range; duplicates are not deduplicated.
    ///
    /// # Errors
    ///
    /// All validation runs before any origin is drawn, so a failing call has
    /// no effect on the generator state and never yields a partial plan:
    ///
    /// - [`ConfigError::InsufficientSamples`] if `n_splits > n_samples`.
    /// - [`ConfigError::GapExceedsTrainWindow`] if the gap consumes the
    ///   whole train window.
    /// - [`ConfigError::EmptyTestWindow`] if the test ratio rounds down to
    ///   an empty test window.
    /// - [`ConfigError::EmptySelectionRange`] if no origin position leaves
    ///   room for both windows.
    pub fn split(&mut self, n_samples: usize) -> Result<SplitPlan, ConfigError> {
        let geometry = WindowGeometry::for_samples(&self.config, n_samples)?;

        let origins = (0..self.config.n_splits())
            .map(|_| self.rng.random_range(geometry.selection.clone()))
            .collect();

        Ok(SplitPlan::new(
            origins,
            geometry.train_window,
            geometry.test_window,
            self.config.gap(),
            n_samples,
        ))
    }
}

// Window lengths and the admissible origin range for one dataset length.
struct WindowGeometry {
    train_window: usize,
    test_window: usize,
    selection: Range<usize>,
}

impl WindowGeometry {
    fn for_samples(config: &SplitConfig, n_samples: usize) -> Result<Self, ConfigError> {
        // Window lengths can go to zero or below for small datasets; stay
        // signed until every check has passed.
        let train_window = (n_samples as f64 * config.train_ratio()).floor() as i64 - 1;
        let test_window = (n_samples as f64 * config.test_ratio()).floor() as i64 - 1;

        if config.n_splits() > n_samples {
            return Err(ConfigError::InsufficientSamples {
                n_splits: config.n_splits(),
                n_samples,
            });
        }
        if train_window - config.gap() as i64 <= 0 {
            return Err(ConfigError::GapExceedsTrainWindow {
                gap: config.gap(),
                train_window,
            });
        }
        if test_window <= 0 {
            return Err(ConfigError::EmptyTestWindow { n_samples });
        }

        // Half-open range of origins leaving a full train window before the
        // origin and a full test window from the origin onward.
        let lo = train_window + 1;
        let hi = n_samples as i64 - test_window - 1;
        if hi <= lo {
            return Err(ConfigError::EmptySelectionRange { n_samples });
        }

        Ok(Self {
            train_window: train_window as usize,
            test_window: test_window as usize,
            selection: lo as usize..hi as usize,
        })
    }
}
