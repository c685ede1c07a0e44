//! # Scoring Module
//!
//! Policies that turn a resolved mutation and one of its protein's interaction
//! partners into a disrupted / not-disrupted decision.
//!
//! - [`matrix`] - Amino-acid substitution matrices (BLOSUM62 built in)
//! - [`hydrophobicity`] - Kyte-Doolittle hydropathy scale
//! - [`strategy`] - The closed set of substitution scoring strategies
//! - [`policy`] - The [`policy::InteractionScorer`] contract and the
//!   interface-aware policy used by the command-line pipeline

pub mod hydrophobicity;
pub mod matrix;
pub mod policy;
pub mod strategy;
