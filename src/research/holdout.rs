use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{checkers, Id3, Pruner, Sample};
use crate::constants::{DEFAULT_ROUNDS, DEFAULT_SEED};
use super::logger;


/// A struct that compares pruned and unpruned ID3 trees
/// on random holdout splits of a sample.
///
/// Each round shuffles the sample and splits it into
/// `train_size` training examples,
/// `train_size / 3` validation examples,
/// and the remaining test examples.
/// Then
/// - a tree grown on the training examples and
///   pruned with the validation examples, and
/// - a tree grown on the training and validation examples
///   without pruning
///
/// are evaluated on the test examples.
///
/// # Example
/// ```no_run
/// use miniid3::prelude::*;
/// use miniid3::research::HoldoutExperiment;
///
/// let sample = SampleReader::new()
///     .file("/path/to/house-votes-84.data")
///     .read()
///     .unwrap();
/// let id3 = Id3Builder::new()
///     .default_label("democrat")
///     .build();
/// for size in [10, 20, 50, 100] {
///     let report = HoldoutExperiment::new(&sample)
///         .train_size(size)
///         .rounds(100)
///         .run(&id3);
///     println!("{}", report.to_json().unwrap());
/// }
/// ```
pub struct HoldoutExperiment<'a> {
    sample: &'a Sample,
    train_size: usize,
    rounds: usize,
    seed: u64,
    pruner: Pruner,
    verbose: bool,
}


impl<'a> HoldoutExperiment<'a> {
    /// Construct a new instance of `HoldoutExperiment`.
    /// By default, the training size is a half of the sample,
    /// the number of rounds is `100`, and the seed is `1234`.
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let train_size = sample.shape().0 / 2;
        Self {
            sample,
            train_size,
            rounds: DEFAULT_ROUNDS,
            seed: DEFAULT_SEED,
            pruner: Pruner::new(),
            verbose: false,
        }
    }


    /// Set the number of training examples per round.
    #[inline]
    pub fn train_size(mut self, size: usize) -> Self {
        self.train_size = size;
        self
    }


    /// Set the number of rounds.
    /// Default is `100`.
    #[inline]
    pub fn rounds(mut self, rounds: usize) -> Self {
        assert!(rounds > 0, "The number of rounds must be positive");
        self.rounds = rounds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default is `1234`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the pruner applied to the tree of each round.
    #[inline]
    pub fn pruner(mut self, pruner: Pruner) -> Self {
        self.pruner = pruner;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `HoldoutExperiment` prints its settings
    /// and the accuracies of each round.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Run the experiment with the given learner.
    ///
    /// # Panics
    /// Panics if the split leaves no validation or test example.
    pub fn run(&self, id3: &Id3) -> HoldoutReport {
        let n_examples = self.sample.shape().0;
        checkers::holdout_size(self.train_size, n_examples);

        let valid_size = self.train_size / 3;
        let test_size = n_examples - self.train_size - valid_size;

        if self.verbose {
            let sections = [
                ("Learner", id3.name().to_string(), id3.info()),
                ("Pruner", "Reduced error".to_string(), self.pruner.info()),
                ("Split", format!("{n_examples} examples"), Vec::from([
                    ("Train", format!("{}", self.train_size)),
                    ("Validation", format!("{valid_size}")),
                    ("Test", format!("{test_size}")),
                ])),
                ("Rounds", format!("{}", self.rounds), Vec::new()),
            ];
            logger::print_stats(&sections);
            logger::print_log_header();
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut ix = (0..n_examples).collect::<Vec<_>>();

        let mut with_pruning = Vec::with_capacity(self.rounds);
        let mut without_pruning = Vec::with_capacity(self.rounds);
        for round in 1..=self.rounds {
            ix.shuffle(&mut rng);
            let (train_ix, rest) = ix.split_at(self.train_size);
            let (valid_ix, test_ix) = rest.split_at(valid_size);

            let mut train = self.sample.select(train_ix);
            let valid = self.sample.select(valid_ix);
            let test = self.sample.select(test_ix);

            let mut tree = id3.fit(&mut train);
            self.pruner.prune(&mut tree, &valid);
            let pruned = tree.score(&test);

            let mut merged = train;
            merged.extend(valid);
            let unpruned = id3.fit(&mut merged).score(&test);

            if self.verbose {
                logger::print_round(round, pruned, unpruned);
            }
            with_pruning.push(pruned);
            without_pruning.push(unpruned);
        }

        let report = HoldoutReport {
            train_size: self.train_size,
            valid_size,
            test_size,
            with_pruning,
            without_pruning,
        };
        if self.verbose {
            logger::print_summary(
                report.train_size,
                report.mean_with_pruning(),
                report.mean_without_pruning(),
            );
        }
        report
    }
}


/// The test accuracies recorded by [`HoldoutExperiment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldoutReport {
    /// Number of training examples per round.
    pub train_size: usize,
    /// Number of validation examples per round.
    pub valid_size: usize,
    /// Number of test examples per round.
    pub test_size: usize,
    /// Test accuracy of the pruned tree per round.
    pub with_pruning: Vec<f64>,
    /// Test accuracy of the unpruned tree per round.
    pub without_pruning: Vec<f64>,
}


impl HoldoutReport {
    /// Returns the number of rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.with_pruning.len()
    }


    /// Returns the average test accuracy of the pruned trees.
    #[inline]
    pub fn mean_with_pruning(&self) -> f64 {
        mean(&self.with_pruning)
    }


    /// Returns the average test accuracy of the unpruned trees.
    #[inline]
    pub fn mean_without_pruning(&self) -> f64 {
        mean(&self.without_pruning)
    }


    /// Serialize this report to a JSON string.
    #[inline]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}


#[inline]
fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() { return 0f64; }
    xs.iter().sum::<f64>() / xs.len() as f64
}
