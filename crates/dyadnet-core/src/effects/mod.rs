//! Named, pluggable effect (statistic) functions.
//!
//! An effect contributes one number for a dyad/configuration during model
//! scoring. External code extends the statistic set by implementing
//! [`EffectFn`] and registering it under a unique name; the sampler looks
//! effects up by name at scoring time and never sees the implementations.
//!
//! The registry is the one component of this crate built for concurrent use:
//! every operation holds a single exclusive lock for its whole duration, so
//! registration and lookup are safe from multiple threads at the cost of
//! serializing registry traffic. It is strictly additive — there is no
//! removal and no versioning for the process lifetime. Registration order
//! relative to other startup work is unspecified, so nothing may assume a
//! name is present before it is explicitly queried.

mod builtin;

pub use builtin::register_builtins;

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use rustc_hash::FxHashMap;

use crate::engine::errors::ModelError;
use crate::engine::graph::ActorId;
use crate::engine::matrix::DenseMatrix;
use crate::engine::model::ResponseModel;

/// The scoring contract every registered effect conforms to.
///
/// Arguments are the composite model, the ordered dyad, a dense covariate
/// matrix, a scale, a free-form term tag, and the directedness flag; the
/// return value is that effect's contribution for the dyad. The registry
/// does not interpret or validate the returned number — interpretation
/// belongs to the sampler.
pub trait EffectFn: Send + Sync + 'static {
    fn eval(
        &self,
        model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        covariates: &DenseMatrix,
        scale: f64,
        term: &str,
        directed: bool,
    ) -> f64;
}

/// Plain functions and closures with the contract signature register
/// directly.
impl<F> EffectFn for F
where
    F: Fn(&ResponseModel, ActorId, ActorId, &DenseMatrix, f64, &str, bool) -> f64
        + Send
        + Sync
        + 'static,
{
    fn eval(
        &self,
        model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        covariates: &DenseMatrix,
        scale: f64,
        term: &str,
        directed: bool,
    ) -> f64 {
        self(model, from, to, covariates, scale, term, directed)
    }
}

/// Metadata attached to each registered effect.
#[derive(Clone)]
pub struct EffectEntry {
    /// The scoring function itself.
    pub func: Arc<dyn EffectFn>,
    /// Short display name used in fitted-model summaries.
    pub short_name: String,
    /// Default/baseline value for the effect's statistic.
    pub default_value: f64,
}

/// An append-mostly table of named effects, independent of any model
/// instance.
///
/// A fresh registry can be constructed per test run;
/// [`global`](EffectRegistry::global) exposes the process-wide instance that
/// plugin registration targets at startup. Pass whichever registry is in play
/// by reference so the dependency stays visible.
#[derive(Default)]
pub struct EffectRegistry {
    inner: Mutex<FxHashMap<String, EffectEntry>>,
}

static GLOBAL_REGISTRY: OnceLock<EffectRegistry> = OnceLock::new();

impl EffectRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static EffectRegistry {
        GLOBAL_REGISTRY.get_or_init(EffectRegistry::new)
    }

    fn table(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, EffectEntry>> {
        // A panicking registrant must not take every later registration
        // down with it; the table itself is always left consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `func` under `name`, returning whether insertion happened.
    ///
    /// On collision the original entry is kept unchanged, a diagnostic is
    /// emitted, and `false` is returned — registration never aborts the
    /// process.
    pub fn register(
        &self,
        name: &str,
        func: Arc<dyn EffectFn>,
        short_name: &str,
        default_value: f64,
    ) -> bool {
        let mut table = self.table();
        if table.contains_key(name) {
            tracing::warn!(name, "duplicate effect name ignored");
            return false;
        }
        table.insert(
            name.to_string(),
            EffectEntry {
                func,
                short_name: short_name.to_string(),
                default_value,
            },
        );
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table().contains_key(name)
    }

    /// Looks up the scoring function registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn EffectFn>, ModelError> {
        self.table()
            .get(name)
            .map(|entry| Arc::clone(&entry.func))
            .ok_or_else(|| ModelError::UnknownEffect(name.to_string()))
    }

    /// Returns the full metadata registered under `name`.
    pub fn describe(&self, name: &str) -> Result<EffectEntry, ModelError> {
        self.table()
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::UnknownEffect(name.to_string()))
    }

    /// Snapshot of the registered names, sorted for deterministic output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Snapshot of every entry's metadata, in name order.
    pub fn entries(&self) -> Vec<EffectEntry> {
        let table = self.table();
        let mut items: Vec<(&String, &EffectEntry)> = table.iter().collect();
        items.sort_unstable_by(|a, b| a.0.cmp(b.0));
        items.into_iter().map(|(_, e)| e.clone()).collect()
    }
}
