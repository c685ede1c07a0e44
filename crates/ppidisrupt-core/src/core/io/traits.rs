use super::source::{SourceError, open_source};
use std::error::Error;
use std::io::BufRead;
use std::path::Path;

/// Defines the interface for data sets parsed from line-oriented text files.
///
/// Implementors handle the format-specific parsing from any buffered reader;
/// opening the file, including transparent gzip decompression, is shared.
pub trait TabularSource: Sized {
    /// The error type for parsing and I/O operations.
    type Error: Error + From<SourceError>;

    /// Parses the data set from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to consume.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content cannot be parsed.
    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error>;

    /// Parses the data set from a file path, decompressing `.gz` files.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error> {
        let mut reader = open_source(path.as_ref())?;
        Self::read_from(&mut reader)
    }
}
