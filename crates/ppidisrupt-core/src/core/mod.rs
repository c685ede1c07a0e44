//! # Core Module
//!
//! This module provides the stateless building blocks of the disruption
//! pipeline: the data models, the file formats they are read from and written
//! to, and the scoring policies that decide individual interactions.
//!
//! ## Architecture
//!
//! - **Data Representation** ([`models`]) - Identifiers, amino acids, mutations,
//!   the interaction network and classification results
//! - **File I/O** ([`io`]) - Gzip-aware readers for edge lists, mutation lists,
//!   annotation and interface tables and substitution matrices, plus the report writer
//! - **Scoring** ([`scoring`]) - Substitution matrices, hydropathy and the
//!   pluggable [`scoring::policy::InteractionScorer`] contract

pub mod io;
pub mod models;
pub mod scoring;
