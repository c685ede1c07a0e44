//! # Core Models Module
//!
//! This module contains the data structures used to describe interaction networks
//! and the mutations classified against them.
//!
//! ## Key Components
//!
//! - [`ids`] - String-backed identifiers for proteins and dbSNP-style mutations
//! - [`amino_acid`] - The twenty standard amino acids and their one/three-letter codes
//! - [`mutation`] - Point mutations resolved to their owning protein and residue change
//! - [`network`] - The undirected protein-protein interaction network
//! - [`classification`] - Per-mutation, per-partner disruption calls
//!
//! ## Usage
//!
//! ```ignore
//! use ppidisrupt::core::models::{ids::ProteinId, network::InteractionNetwork};
//!
//! let mut network = InteractionNetwork::new();
//! network.add_interaction(ProteinId::new("P04637"), ProteinId::new("Q00987"));
//! assert!(network.interacts("Q00987", "P04637"));
//! ```

pub mod amino_acid;
pub mod classification;
pub mod ids;
pub mod mutation;
pub mod network;
