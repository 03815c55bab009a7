//! This directory provides some features for experiments.
//! Measure the test accuracy of pruned and unpruned trees
//! over repeated random splits.

/// Provides the holdout experiment.
pub mod holdout;

/// Colored terminal output.
pub(crate) mod logger;

pub use holdout::{HoldoutExperiment, HoldoutReport};
