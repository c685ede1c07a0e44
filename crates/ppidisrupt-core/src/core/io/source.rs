use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

const GZIP_SUFFIX: &str = ".gz";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not open '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn is_gzip(path: &Path) -> bool {
    path.to_string_lossy().trim().ends_with(GZIP_SUFFIX)
}

/// Opens a line-oriented input, transparently decompressing `.gz` files.
///
/// Corrupt gzip streams are not detected here; they surface as read errors
/// while the returned reader is consumed.
pub fn open_source(path: &Path) -> Result<Box<dyn BufRead>, SourceError> {
    let file = File::open(path).map_err(|e| SourceError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
