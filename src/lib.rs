//! # nanosplit
//!
//! Monte Carlo train/test resampling for time-indexed data.
//!
//! Classic time-series holdout fixes a single split point and evaluates a
//! model once. `nanosplit` generalizes that to a repeated, randomized-origin
//! scheme: every repetition uses the same train/test window lengths (fixed
//! fractions of the dataset), only the placement of the split point varies.
//! Origins are drawn uniformly with replacement, so repetitions are
//! independent and duplicates are possible by design.
//!
//! The crate never touches feature or label values. A dataset is just "N
//! items addressable by position"; callers receive index ranges and use them
//! to slice their own containers.
//!
//! ## Quick Start
//!
//! ```
//! use nanosplit::{MonteCarloSplitter, SplitConfig};
//!
//! // 5 repetitions, 60% train window, 10% test window.
//! let config = SplitConfig::new(5, 0.6, 0.1).unwrap();
//! let mut splitter = MonteCarloSplitter::seeded(config, 42);
//!
//! let plan = splitter.split(120).unwrap();
//! assert_eq!(plan.len(), 5);
//!
//! for fold in &plan {
//!     // Window lengths are constant across repetitions.
//!     assert_eq!(fold.train_len(), 72);
//!     assert_eq!(fold.test_len(), 11);
//!     // Train always precedes test.
//!     assert!(fold.train.end <= fold.test.start);
//! }
//! ```
//!
//! ## Gap
//!
//! A gap pulls the train window back from the test window, which keeps leaky
//! features (lagged targets, rolling statistics) out of the evaluation. With
//! a gap of `g`, the last training index sits exactly `g` positions before
//! the start of the test window:
//!
//! ```
//! use nanosplit::{MonteCarloSplitter, SplitConfig};
//!
//! let config = SplitConfig::new(5, 0.6, 0.1).unwrap().with_gap(3);
//! let mut splitter = MonteCarloSplitter::seeded(config, 42);
//!
//! let plan = splitter.split(120).unwrap();
//! for fold in &plan {
//!     let last_train = fold.train.end - 1;
//!     assert_eq!(last_train + 3, fold.test.start);
//! }
//! ```
//!
//! ## Reproducibility
//!
//! A splitter owns its generator. Same configuration, same seed, same plan:
//!
//! ```
//! use nanosplit::{MonteCarloSplitter, SplitConfig};
//!
//! let config = SplitConfig::new(10, 0.5, 0.2).unwrap();
//! let mut a = MonteCarloSplitter::seeded(config, 7);
//! let mut b = MonteCarloSplitter::seeded(config, 7);
//!
//! assert_eq!(a.split(500).unwrap(), b.split(500).unwrap());
//! ```
//!
//! ## Validation
//!
//! Invalid combinations of configuration and dataset length fail before any
//! origin is drawn; a plan is never partial or degenerate:
//!
//! ```
//! use nanosplit::{MonteCarloSplitter, SplitConfig};
//!
//! // Train and test windows cannot both fit in 10 samples.
//! let config = SplitConfig::new(5, 0.9, 0.5).unwrap();
//! let mut splitter = MonteCarloSplitter::new(config);
//! assert!(splitter.split(10).is_err());
//! ```

mod config;
mod error;
mod fold;
mod plan;
mod splitter;
mod strategy;

pub mod eval;
#[cfg(feature = "persistence")]
pub mod persistence;

// Re-export public API
pub use config::SplitConfig;
pub use error::ConfigError;
pub use fold::Fold;
pub use plan::{Folds, SplitPlan};
pub use splitter::MonteCarloSplitter;
pub use strategy::SplitStrategy;
