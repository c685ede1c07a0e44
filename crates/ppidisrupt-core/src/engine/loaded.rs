//! The "continue in degraded mode" policy for input loading.
//!
//! Loaders in this pipeline never abort a run: when a source cannot be opened
//! or decoded the error is logged, an empty collection is substituted, and the
//! error is kept alongside the data. An empty network or mutation set is
//! therefore indistinguishable from a genuinely empty input unless the caller
//! inspects [`Loaded::error`]. Callers that prefer fail-fast semantics can use
//! [`Loaded::into_result`].

use crate::core::io::traits::TabularSource;
use std::fmt;
use std::path::Path;
use tracing::{debug, error};

#[derive(Debug)]
pub struct Loaded<T, E> {
    pub data: T,
    pub error: Option<E>,
}

impl<T, E> Loaded<T, E> {
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Fail-fast view: returns the absorbed error, if any, instead of the fallback data.
    pub fn into_result(self) -> Result<T, E> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.data),
        }
    }
}

impl<T: Default, E> Loaded<T, E> {
    pub fn degraded(error: E) -> Self {
        Self {
            data: T::default(),
            error: Some(error),
        }
    }

    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::degraded(e),
        }
    }
}

/// Loads `path` with the format's reader, absorbing any failure into an empty value.
pub fn load_or_degrade<T>(path: &Path, what: &str) -> Loaded<T, T::Error>
where
    T: TabularSource + Default,
{
    load_or_degrade_with(path, what, |p| T::read_from_path(p))
}

/// Like [`load_or_degrade`], for loaders that need more than a path.
pub fn load_or_degrade_with<T, E, F>(path: &Path, what: &str, load: F) -> Loaded<T, E>
where
    T: Default,
    E: fmt::Display,
    F: FnOnce(&Path) -> Result<T, E>,
{
    debug!("Loading {} from {:?}", what, path);
    let loaded = Loaded::from_result(load(path));
    if let Some(e) = &loaded.error {
        error!("Error while reading {} file: {}", what, e);
    }
    loaded
}
