//! Struct `Sample` represents a batch of categorical examples.

// Provides example struct.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides a struct that reads a file.
pub(crate) mod sample_reader;
// Provides the missing value imputation.
pub(crate) mod imputer;


pub use example::Example;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
pub use imputer::Imputer;
