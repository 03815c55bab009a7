//! Constants shared across the crate.

/// The attribute name that holds the target class of an example.
pub const CLASS_KEY: &str = "Class";

/// The value that marks a missing attribute value.
pub const MISSING_VALUE: &str = "?";

/// Upper bound of the number of nodes visited by one pruning pass.
pub const DEFAULT_MAX_VISITS: usize = 100;

/// Default number of rounds of [`HoldoutExperiment`](crate::research::HoldoutExperiment).
pub const DEFAULT_ROUNDS: usize = 100;

/// Default seed for shuffling.
pub const DEFAULT_SEED: u64 = 1234;

/// Default column delimiter of [`SampleReader`](crate::SampleReader).
pub const DEFAULT_DELIMITER: char = ',';

pub(crate) const WIDTH: usize = 9;
pub(crate) const FULL_WIDTH: usize = 60;
pub(crate) const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
