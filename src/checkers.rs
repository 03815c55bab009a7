//! This file defines some functions that checks some pre-conditions.
//! E.g., non-empty evaluation sets, the existence of the class attribute.

use crate::Example;


/// Check whether the evaluation set is non-empty.
/// Accuracy over zero examples is undefined.
#[inline(always)]
pub(crate) fn evaluation_set(examples: &[Example]) {
    assert!(
        !examples.is_empty(),
        "Accuracy is undefined for an empty set of examples"
    );
}


/// Check whether every example has the class attribute `class_key`.
#[inline(always)]
pub(crate) fn class_attribute(examples: &[Example], class_key: &str) {
    if let Some(i) = examples.iter().position(|ex| !ex.contains(class_key)) {
        panic!("Example #{i} has no class attribute named `{class_key}`");
    }
}


/// Check the training size of a holdout split.
#[inline(always)]
pub(crate) fn holdout_size(train_size: usize, n_examples: usize) {
    assert!(
        train_size >= 3,
        "Training size must be at least 3 to leave a validation example"
    );
    let used = train_size + train_size / 3;
    assert!(
        used < n_examples,
        "train size {train_size} leaves no test examples \
        (train + validation = {used}, sample size = {n_examples})"
    );
}
