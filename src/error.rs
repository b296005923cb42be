//! Configuration errors for split generation.

/// All errors that can occur when configuring a splitter or generating a
/// plan.
///
/// Range-sanity variants surface at [`SplitConfig::new`](crate::SplitConfig::new);
/// the rest are detected at the start of
/// [`MonteCarloSplitter::split`](crate::MonteCarloSplitter::split), before
/// any origin is drawn. None are recoverable internally: the caller adjusts
/// the configuration or supplies more data.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// At least one repetition is required.
    #[error("n_splits must be at least 1")]
    ZeroSplits,

    /// Train ratio outside `(0, 1]`.
    #[error("train_ratio must be in (0, 1], got {0}")]
    InvalidTrainRatio(f64),

    /// Test ratio outside `(0, 1]`.
    #[error("test_ratio must be in (0, 1], got {0}")]
    InvalidTestRatio(f64),

    /// More repetitions requested than available samples.
    #[error("more repetitions requested than available samples: n_splits={n_splits}, n_samples={n_samples}")]
    InsufficientSamples {
        /// Configured repetition count.
        n_splits: usize,
        /// Dataset length supplied to `split`.
        n_samples: usize,
    },

    /// Gap too large relative to the train window.
    #[error("gap too large relative to the train window: gap={gap}, train_window={train_window}")]
    GapExceedsTrainWindow {
        /// Configured gap.
        gap: usize,
        /// Train window length derived from the dataset length. Can be
        /// negative for very small datasets.
        train_window: i64,
    },

    /// Test ratio yields an empty test window for this dataset length.
    #[error("test_ratio yields an empty test window for {n_samples} samples")]
    EmptyTestWindow {
        /// Dataset length supplied to `split`.
        n_samples: usize,
    },

    /// Train and test windows together do not fit in the dataset.
    #[error("no admissible origin: train and test windows do not fit in {n_samples} samples")]
    EmptySelectionRange {
        /// Dataset length supplied to `split`.
        n_samples: usize,
    },
}
