//! Reduced-error pruning with a validation set.
use colored::Colorize;

use crate::{checkers, Example};
use crate::constants::DEFAULT_MAX_VISITS;
use super::id3_classifier::Id3Classifier;

use std::fmt;
use std::collections::VecDeque;


/// The pruning strategies of [`Pruner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneStrategy {
    /// Visit the nodes in breadth-first order,
    /// collapse the first node whose removal
    /// strictly improves the validation accuracy, and stop.
    /// At most one node is collapsed.
    #[default]
    FirstImprovement,
    /// Repeat `FirstImprovement` passes
    /// until a pass collapses no node.
    UntilConvergence,
}


impl fmt::Display for PruneStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstImprovement => "First improvement",
            Self::UntilConvergence => "Until convergence",
        };
        write!(f, "{name}")
    }
}


/// Reduced-error pruning.
///
/// For each visited branch, the pruner compares the accuracy of
/// the whole tree on the validation set
/// with the accuracy of the same tree
/// in which the branch predicts its majority class.
/// The hypothetical accuracy is measured without modifying the tree;
/// the branch is collapsed only if the accuracy strictly improves.
///
/// # Example
/// ```
/// use miniid3::prelude::*;
///
/// let mut train = vec![
///     Example::from([("a", 0), ("b", 1), ("Class", 1)]),
///     Example::from([("a", 0), ("b", 0), ("Class", 0)]),
///     Example::from([("a", 1), ("b", 1), ("Class", 0)]),
/// ];
/// let valid = vec![
///     Example::from([("a", 0), ("b", 0), ("Class", 1)]),
/// ];
/// let mut tree = Id3Builder::new().build().fit(&mut train);
///
/// let n_collapsed = Pruner::new()
///     .strategy(PruneStrategy::FirstImprovement)
///     .prune(&mut tree, &valid);
/// assert!(n_collapsed <= 1);
/// ```
#[derive(Debug, Clone)]
pub struct Pruner {
    strategy: PruneStrategy,
    max_visits: usize,
    verbose: bool,
}


impl Pruner {
    /// Construct a new instance of [`Pruner`].
    /// By default, [`Pruner`] sets the parameters as follows;
    /// ```text
    /// strategy: PruneStrategy::FirstImprovement,
    /// max_visits: DEFAULT_MAX_VISITS == 100,
    /// verbose: false,
    /// ```
    pub fn new() -> Self {
        Self {
            strategy: PruneStrategy::default(),
            max_visits: DEFAULT_MAX_VISITS,
            verbose: false,
        }
    }


    /// Set the pruning strategy.
    #[inline]
    pub fn strategy(mut self, strategy: PruneStrategy) -> Self {
        self.strategy = strategy;
        self
    }


    /// Set the maximal number of nodes visited by one pass.
    /// Default is `100`.
    #[inline]
    pub fn max_visits(mut self, max_visits: usize) -> Self {
        assert!(max_visits > 0, "Pruner must visit at least one node");
        self.max_visits = max_visits;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `Pruner` prints each collapsed node.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the parameters of this pruner.
    pub fn info(&self) -> Vec<(&str, String)> {
        Vec::from([
            ("Strategy", format!("{}", self.strategy)),
            ("Max visits", format!("{}", self.max_visits)),
        ])
    }


    /// Prune `tree` in place against `validation`.
    /// Returns the number of collapsed nodes.
    ///
    /// # Panics
    /// Panics if `validation` is empty.
    pub fn prune(&self, tree: &mut Id3Classifier, validation: &[Example])
        -> usize
    {
        checkers::evaluation_set(validation);

        match self.strategy {
            PruneStrategy::FirstImprovement => {
                usize::from(self.prune_once(tree, validation))
            },
            PruneStrategy::UntilConvergence => {
                let mut n_collapsed = 0;
                while self.prune_once(tree, validation) {
                    n_collapsed += 1;
                }
                n_collapsed
            },
        }
    }


    /// Runs one breadth-first pass.
    /// Returns `true` if a node is collapsed.
    fn prune_once(&self, tree: &mut Id3Classifier, validation: &[Example])
        -> bool
    {
        let unpruned = tree.score(validation);

        // Each node is identified by the attribute values
        // on the path from the root.
        let mut queue = VecDeque::from([Vec::<String>::new()]);
        let mut n_visited = 0;
        while let Some(path) = queue.pop_front() {
            if n_visited >= self.max_visits { break; }
            n_visited += 1;

            let Some(node) = tree.root().find(&path) else { continue; };
            if node.is_leaf() { continue; }

            let pruned = tree.score_collapsed(validation, &path);
            if pruned > unpruned {
                if let Some(node) = tree.root_mut().find_mut(&path) {
                    node.collapse();
                }
                if self.verbose {
                    print_collapse(&path, unpruned, pruned);
                }
                return true;
            }

            for (value, _) in node.children() {
                let mut child = path.clone();
                child.push(value.to_string());
                queue.push_back(child);
            }
        }
        false
    }
}


impl Default for Pruner {
    fn default() -> Self {
        Self::new()
    }
}


#[inline]
fn print_collapse(path: &[String], unpruned: f64, pruned: f64) {
    let path = if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(" -> ")
    };
    println!(
        "{}    {}    {}",
        "  [PRUNE]".bold().red(),
        format!("[NODE {path}]").bold().green(),
        format!("[ACC. {unpruned:.4} -> {pruned:.4}]").bold().yellow(),
    );
}
