//! The core trait of the classifiers in this crate.
use crate::{checkers, Example};


/// A trait that defines the prediction of a categorical classifier.
pub trait Classifier {
    /// Predicts the class label of the given example.
    /// Returns `None` if the classifier cannot label it.
    fn predict<'a>(&'a self, example: &Example) -> Option<&'a str>;


    /// Predicts the class labels of the given examples.
    fn predict_all<'a>(&'a self, examples: &[Example]) -> Vec<Option<&'a str>> {
        examples.iter()
            .map(|example| self.predict(example))
            .collect()
    }


    /// Returns the fraction of `examples` whose prediction equals
    /// the value of `class_key`.
    /// An unlabeled prediction counts as a mistake.
    ///
    /// # Panics
    /// Panics if `examples` is empty.
    fn accuracy(&self, examples: &[Example], class_key: &str) -> f64 {
        checkers::evaluation_set(examples);

        let n_correct = self.predict_all(examples)
            .into_iter()
            .zip(examples)
            .filter(|(prediction, example)| {
                let truth = example.get(class_key);
                truth.is_some() && *prediction == truth
            })
            .count();
        n_correct as f64 / examples.len() as f64
    }
}
