use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::constants::{CLASS_KEY, DEFAULT_DELIMITER};
use super::example::Example;
use super::sample_struct::Sample;


/// Specifies the column that holds the class label.
#[derive(Debug, Clone)]
enum TargetColumn {
    Position(usize),
    Name(String),
}


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// Each line is one example, and each cell is a categorical value.
///
/// The class column is stored under [`CLASS_KEY`],
/// other columns are named by the header row
/// or, if there is no header, as `Feat. [1]`, `Feat. [2]`, ... .
/// Missing values are kept verbatim (e.g. `?`).
///
/// # Example
/// The following code reads the house-votes data,
/// whose first column is the class label.
/// ```no_run
/// use miniid3::SampleReader;
/// let filename = "/path/to/house-votes-84.data";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(false)
///     .target_column(0)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    delimiter: char,
    target: TargetColumn,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    /// By default, the file has no header,
    /// the delimiter is `,`, and the class label is the first column.
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            delimiter: DEFAULT_DELIMITER,
            target: TargetColumn::Position(0),
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column delimiter.
    /// Default is `,`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the position (0-indexed) of the class column.
    /// Default is `0`.
    pub fn target_column(mut self, column: usize) -> Self {
        self.target = TargetColumn::Position(column);
        self
    }


    /// Set the header name of the class column.
    /// This option requires `has_header(true)`.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = TargetColumn::Name(column.as_ref().to_string());
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Sample> {
        let file = self.file.as_ref()
            .expect("The file name is not set. Use `SampleReader::file`.");
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut header = None;
        if self.has_header {
            let line = lines.next()
                .ok_or_else(|| invalid_data("The file has no header row"))??;
            header = Some(self.split(&line));
        }

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }
            rows.push(self.split(&line));
        }

        // The first row (or the header) determines the number of columns.
        let width = rows.first()
            .or(header.as_ref())
            .map(Vec::len)
            .unwrap_or(0);
        if width == 0 {
            return Ok(Sample::new(Vec::new(), CLASS_KEY));
        }
        let (target, names) = self.column_names(header.as_deref(), width)?;

        let mut examples = Vec::with_capacity(rows.len());
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                let message = format!(
                    "Row {row} has {} columns, expected {width}",
                    cells.len()
                );
                return Err(invalid_data(message));
            }

            let mut example = Example::new();
            let mut name = names.iter();
            for (i, cell) in cells.into_iter().enumerate() {
                if i == target {
                    example.insert(CLASS_KEY, cell);
                } else if let Some(name) = name.next() {
                    example.insert(name.as_str(), cell);
                }
            }
            examples.push(example);
        }

        let sample = Sample::new(examples, CLASS_KEY)
            .with_attribute_names(names);
        Ok(sample)
    }


    #[inline]
    fn split(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter)
            .map(|cell| cell.trim().to_string())
            .collect()
    }


    /// Returns the position of the class column and
    /// the names of the other columns.
    fn column_names(&self, header: Option<&[String]>, width: usize)
        -> io::Result<(usize, Vec<String>)>
    {
        let target = match &self.target {
            TargetColumn::Position(i) => *i,
            TargetColumn::Name(name) => {
                header.and_then(|h| h.iter().position(|col| col == name))
                    .ok_or_else(|| {
                        invalid_data(format!("No column named `{name}`"))
                    })?
            },
        };

        if target >= width {
            let message = format!(
                "Class column {target} is out of range ({width} columns)"
            );
            return Err(invalid_data(message));
        }
        if let Some(n_header) = header.map(<[String]>::len) {
            if n_header != width {
                let message = format!(
                    "The header has {n_header} columns, expected {width}"
                );
                return Err(invalid_data(message));
            }
        }

        let names = match header {
            Some(header) => {
                header.iter()
                    .enumerate()
                    .filter(|&(i, _)| i != target)
                    .map(|(_, name)| name.clone())
                    .collect()
            },
            None => {
                (1..width).map(|i| format!("Feat. [{i}]"))
                    .collect()
            },
        };
        Ok((target, names))
    }
}


#[inline]
fn invalid_data<E>(error: E) -> io::Error
    where E: Into<Box<dyn std::error::Error + Send + Sync>>
{
    io::Error::new(io::ErrorKind::InvalidData, error)
}
