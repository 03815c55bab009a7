use polars::prelude::*;

use std::ops::Index;
use std::collections::BTreeSet;

use crate::constants::MISSING_VALUE;
use super::example::Example;


/// Struct `Sample` holds a batch of categorical examples
/// together with the name of the class attribute.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) names: Vec<String>,
    pub(super) class_key: String,
    pub(super) examples: Vec<Example>,
}


impl Sample {
    /// Construct a new `Sample` from the given examples.
    /// The attribute names are the union of the keys of `examples`
    /// (except `class_key`) in lexicographic order.
    pub fn new<S>(examples: Vec<Example>, class_key: S) -> Self
        where S: AsRef<str>
    {
        let class_key = class_key.as_ref().to_string();
        let names = examples.iter()
            .flat_map(|ex| ex.attributes())
            .filter(|&name| name != class_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { names, class_key, examples, }
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// Every column is cast to a string column,
    /// and null entries become the missing-value sentinel.
    /// The attribute names keep the column order of `data`.
    pub fn from_dataframe(data: &DataFrame, class_key: &str)
        -> PolarsResult<Self>
    {
        // Fails if the class column does not exist.
        data.column(class_key)?;

        let mut examples = vec![Example::new(); data.height()];
        let mut names = Vec::with_capacity(data.width());
        for series in data.get_columns() {
            let name = series.name().to_string();
            let column = series.cast(&DataType::Utf8)?;
            let column = column.utf8()?;

            examples.iter_mut()
                .zip(column.into_iter())
                .for_each(|(example, value)| {
                    example.insert(
                        name.as_str(), value.unwrap_or(MISSING_VALUE)
                    );
                });

            if name != class_key { names.push(name); }
        }

        let class_key = class_key.to_string();
        Ok(Self { names, class_key, examples, })
    }


    /// Replace the attribute names by the given order.
    /// The class key is dropped from `names`.
    ///
    /// The names are not used by [`Id3`](crate::Id3) on their own.
    /// To break ties in this order, pass
    /// `AttributeOrder::Given(sample.attribute_names().to_vec())`
    /// to [`Id3Builder::attribute_order`](crate::Id3Builder::attribute_order).
    pub fn with_attribute_names<T, S>(mut self, names: T) -> Self
        where T: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        self.names = names.into_iter()
            .map(|name| name.as_ref().to_string())
            .filter(|name| *name != self.class_key)
            .collect();
        self
    }


    /// Returns the pair of the number of examples and
    /// the number of attributes (except the class attribute).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.names.len())
    }


    /// Returns `true` if this sample has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }


    /// Returns the examples.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the mutable reference to the examples.
    #[inline]
    pub fn examples_mut(&mut self) -> &mut [Example] {
        &mut self.examples[..]
    }


    /// Consumes `self` and returns the examples.
    #[inline]
    pub fn into_examples(self) -> Vec<Example> {
        self.examples
    }


    /// Returns the attribute names except the class attribute.
    #[inline]
    pub fn attribute_names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the name of the class attribute.
    #[inline]
    pub fn class_key(&self) -> &str {
        &self.class_key
    }


    /// Returns the distinct class labels in lexicographic order.
    pub fn classes(&self) -> Vec<&str> {
        self.examples.iter()
            .filter_map(|ex| ex.get(&self.class_key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }


    /// Returns the copies of the examples at `indices`.
    #[inline]
    pub fn select(&self, indices: &[usize]) -> Vec<Example> {
        indices.iter()
            .map(|&i| self.examples[i].clone())
            .collect()
    }
}


impl Index<usize> for Sample {
    type Output = Example;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.examples[index]
    }
}
