//! # PPI-Disrupt Core Library
//!
//! Predicts, for a set of point mutations, which protein-protein interactions
//! in a reference interaction network each mutation is likely to disrupt.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`InteractionNetwork`,
//!   `MutationSet`, `ClassificationResult`), file I/O with transparent gzip
//!   support, and the scoring policies (substitution matrices, hydropathy).
//!
//! - **[`engine`]: The Logic Core.** Run configuration, the best-effort loading
//!   policy, the mutation resolver seam and the classifier itself.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a
//!   single `classify::run` call that goes from input files to a written report.

pub mod core;
pub mod engine;
pub mod workflows;
