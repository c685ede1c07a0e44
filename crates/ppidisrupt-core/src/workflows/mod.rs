//! # Workflows Module
//!
//! High-level entry points that run the complete pipeline: build the scoring
//! policy, load the network and mutation list, classify, and write the report.
//!
//! - **Classification Workflow** ([`classify`]) - The end-to-end run, with a
//!   summary of what was loaded, skipped and absorbed along the way.

pub mod classify;
