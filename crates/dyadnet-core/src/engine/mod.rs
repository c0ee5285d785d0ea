//! The model state engine.
//!
//! This module provides:
//! - **errors**: Error types for model operations
//! - **matrix**: Dense matrix used at the bulk-exchange boundary
//! - **graph**: Relational graph store and shared-partner statistics
//! - **attribute**: Per-actor scalar covariate vectors
//! - **neighborhood**: Visibility sets and the overlap relation
//! - **model**: Composite models the sampler operates on

pub mod attribute;
pub mod errors;
pub mod graph;
pub mod matrix;
pub mod model;
pub mod neighborhood;
