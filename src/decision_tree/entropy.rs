//! Entropy and information gain over categorical examples.
//!
//! The functions in this file assume that
//! every example has the class attribute.
//! An example without `attribute` is regarded as having
//! the missing-value sentinel `?` for it.
//! `Id3` fills absent attributes with its own sentinel before training,
//! so this fallback matters only for direct calls.
use std::collections::{BTreeMap, BTreeSet};

use crate::Example;
use crate::constants::MISSING_VALUE;


/// Number of examples per class label.
pub(crate) type ClassCounts<'a> = BTreeMap<&'a str, usize>;


/// Returns the value of `attribute` of `example`,
/// or `missing_value` if `example` has no such attribute.
#[inline(always)]
pub(crate) fn value_of<'a>(
    example: &'a Example,
    attribute: &str,
    missing_value: &'a str,
) -> &'a str
{
    example.get(attribute).unwrap_or(missing_value)
}


/// Counts the examples per class label.
pub(crate) fn class_counts<'a, E>(examples: &'a [E], class_key: &str)
    -> ClassCounts<'a>
    where E: AsRef<Example>
{
    let mut counts = ClassCounts::new();
    for example in examples {
        let label = value_of(example.as_ref(), class_key, MISSING_VALUE);
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}


/// Returns the Shannon entropy (in bits) of the given class counts.
/// Classes with zero count are skipped,
/// so the entropy of an empty set is `0`.
#[inline]
pub(crate) fn entropy_of(counts: &ClassCounts<'_>) -> f64 {
    let total = counts.values().sum::<usize>();
    if total == 0 { return 0f64; }
    let total = total as f64;

    counts.values()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Returns the entropy of the class distribution of `examples`.
///
/// # Example
/// ```
/// use miniid3::{Example, entropy};
/// let examples = vec![
///     Example::from([("a", 0), ("Class", 0)]),
///     Example::from([("a", 1), ("Class", 1)]),
/// ];
/// assert_eq!(entropy(&examples, "Class"), 1.0);
/// ```
pub fn entropy<E>(examples: &[E], class_key: &str) -> f64
    where E: AsRef<Example>
{
    entropy_of(&class_counts(examples, class_key))
}


/// Returns the information gain of splitting `examples`
/// by the value of `attribute`.
pub fn gain<E>(examples: &[E], attribute: &str, class_key: &str) -> f64
    where E: AsRef<Example>
{
    let n_examples = examples.len();
    if n_examples == 0 { return 0f64; }

    // Class counts per attribute value.
    let mut groups: BTreeMap<&str, ClassCounts<'_>> = BTreeMap::new();
    for example in examples {
        let example = example.as_ref();
        let value = value_of(example, attribute, MISSING_VALUE);
        let label = value_of(example, class_key, MISSING_VALUE);
        *groups.entry(value)
            .or_default()
            .entry(label)
            .or_insert(0) += 1;
    }

    // The terms are summed in ascending order so that
    // two attributes inducing the same partition have the same gain.
    let mut terms = groups.values()
        .map(|counts| {
            let size = counts.values().sum::<usize>() as f64;
            (size / n_examples as f64) * entropy_of(counts)
        })
        .collect::<Vec<f64>>();
    terms.sort_by(f64::total_cmp);
    let remainder = terms.into_iter().sum::<f64>();

    entropy(examples, class_key) - remainder
}


/// Returns the most frequent class label of `examples`.
/// Ties are broken by the lexicographically smallest label.
/// Returns `None` for an empty set.
pub fn majority_class<'a, E>(examples: &'a [E], class_key: &str)
    -> Option<&'a str>
    where E: AsRef<Example>
{
    let mut best: Option<(&str, usize)> = None;
    // `ClassCounts` iterates labels in ascending order,
    // so only a strictly larger count replaces the current one.
    for (label, count) in class_counts(examples, class_key) {
        match best {
            Some((_, max)) if count <= max => {},
            _ => { best = Some((label, count)); },
        }
    }
    best.map(|(label, _)| label)
}


/// Returns the distinct values of `attribute` over `examples`.
pub(crate) fn distinct_values<'a, E>(examples: &'a [E], attribute: &str)
    -> BTreeSet<&'a str>
    where E: AsRef<Example>
{
    examples.iter()
        .map(|example| value_of(example.as_ref(), attribute, MISSING_VALUE))
        .collect()
}


/// Partitions `examples` by the value of `attribute`.
/// Only the observed values appear as keys.
pub(crate) fn partition<'a>(examples: &[&'a Example], attribute: &str)
    -> BTreeMap<&'a str, Vec<&'a Example>>
{
    let mut groups: BTreeMap<&str, Vec<&Example>> = BTreeMap::new();
    for &example in examples {
        groups.entry(value_of(example, attribute, MISSING_VALUE))
            .or_default()
            .push(example);
    }
    groups
}
