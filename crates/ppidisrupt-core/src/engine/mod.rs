//! # Engine Module
//!
//! The stateful layer between the stateless [`crate::core`] building blocks and
//! the end-to-end [`crate::workflows`].
//!
//! ## Overview
//!
//! The engine owns everything that happens between "the inputs are on disk" and
//! "every (mutation, partner) pair has a call": validated run configuration,
//! the best-effort loading policy, mutation resolution and the classifier loop.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters, strategy names and the config builder
//! - **Error Handling** ([`error`]) - Fatal, startup-time errors
//! - **Degraded Loading** ([`loaded`]) - Data-plus-absorbed-error results for loaders
//! - **Mutation Resolution** ([`resolver`]) - The seam mapping identifiers to proteins
//! - **Classification** ([`classifier`]) - Per-partner disruption calls, optionally parallel
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events

pub mod classifier;
pub mod config;
pub mod error;
pub mod loaded;
pub mod progress;
pub mod resolver;
