use thiserror::Error;

use super::config::{ConfigError, StrategyParseError};
use crate::core::io::interfaces::InterfaceLoadError;
use crate::core::io::matrix::MatrixLoadError;
use crate::core::io::report::ReportError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid classifier: {0}")]
    Strategy(#[from] StrategyParseError),

    #[error(
        "Substitution matrix BLOSUM{number} is not built in and no matrix file was found (searched {searched:?})"
    )]
    MatrixNotFound { number: u32, searched: Vec<PathBuf> },

    #[error("Failed to load substitution matrix '{path}': {source}", path = path.display())]
    Matrix {
        path: PathBuf,
        #[source]
        source: MatrixLoadError,
    },

    #[error("Failed to load interface residues '{path}': {source}", path = path.display())]
    Interfaces {
        path: PathBuf,
        #[source]
        source: InterfaceLoadError,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] ReportError),
}
