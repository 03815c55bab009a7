//! Exports the standard structs and traits.
//!
pub use crate::sample::{
    Example,
    Sample,
    SampleReader,
    Imputer,
};


pub use crate::classifier::Classifier;


pub use crate::decision_tree::{
    // Induction
    Id3,
    Id3Builder,
    AttributeOrder,


    // Classification
    Id3Classifier,
    Node,


    // Pruning
    Pruner,
    PruneStrategy,
};
