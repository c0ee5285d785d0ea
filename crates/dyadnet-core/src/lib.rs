//! # Dyadnet Core
//!
//! Computational core for statistical network-model fitting: a mutable
//! relational graph over a fixed actor set, per-actor covariates, a
//! neighborhood/overlap visibility structure, and a registry of pluggable
//! effect functions used to score configurations during estimation.
//!
//! The sampler that drives edge toggles and accumulates scores lives
//! outside this crate; it owns a [`ResponseModel`], proposes changes, and
//! looks scoring functions up by name in the [`EffectRegistry`].
//!
//! Everything except the registry is single-threaded by contract: no
//! internal locking, no isolation across multi-step mutations. Callers that
//! share a model across threads serialize access externally.

pub mod effects;
pub mod engine;

// Re-export commonly used types
pub use effects::{register_builtins, EffectEntry, EffectFn, EffectRegistry};
pub use engine::attribute::{ActorAttribute, AttributeKind};
pub use engine::errors::ModelError;
pub use engine::graph::{ActorId, RelationGraph, SharedPartnerKind};
pub use engine::matrix::DenseMatrix;
pub use engine::model::{DyadModel, ResponseModel};
pub use engine::neighborhood::{ActorSetMap, Neighborhood};
