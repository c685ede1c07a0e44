//! Provides input/output functionality for the pipeline's text formats.
//!
//! Every input is a line-oriented text file that may be gzip-compressed; the
//! [`source`] module selects the decoder from the file suffix and the
//! [`traits::TabularSource`] trait gives each format a uniform `read_from` /
//! `read_from_path` interface. The [`report`] module writes the flat
//! tab-separated disruption report.

pub mod annotations;
pub mod interfaces;
pub mod matrix;
pub mod mutations;
pub mod network;
pub mod report;
pub mod source;
pub mod traits;
