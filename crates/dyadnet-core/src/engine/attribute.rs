//! Per-actor scalar covariate vector.
//!
//! An attribute holds one scale-multiplied `f64` per actor together with a
//! declared distribution tag. The tag is descriptive only — no distributional
//! validation of the values is performed beyond the legacy bounds check in
//! [`is_within_bounds`](ActorAttribute::is_within_bounds).

use crate::engine::errors::ModelError;
use crate::engine::graph::ActorId;

/// Declared distribution family of an attribute.
///
/// Only these three families are implemented. Construction from an
/// unrecognized tag is not an error: it degrades to `Binomial` with a
/// diagnostic, and the model keeps running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeKind {
    #[default]
    Binomial,
    Poisson,
    Normal,
}

impl AttributeKind {
    /// Parses a tag, falling back to `Binomial` with a warning for anything
    /// outside the implemented set.
    pub fn parse_or_default(tag: &str) -> Self {
        match tag {
            "binomial" => Self::Binomial,
            "poisson" => Self::Poisson,
            "normal" => Self::Normal,
            other => {
                tracing::warn!(
                    tag = other,
                    "unknown attribute kind, assuming binomial (only binomial, poisson, and normal are implemented)"
                );
                Self::Binomial
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binomial => "binomial",
            Self::Poisson => "poisson",
            Self::Normal => "normal",
        }
    }
}

/// A scalar covariate over actors `1..=N`.
///
/// Stored values are scale-multiplied; the semantic value an effect sees is
/// `stored / scale`. `scale` is expected to be positive; the setters write
/// raw stored values and bypass it.
#[derive(Debug, Clone)]
pub struct ActorAttribute {
    n_actors: u32,
    values: Vec<f64>,
    scale: f64,
    kind: AttributeKind,
}

impl ActorAttribute {
    /// Creates a zero-filled attribute.
    pub fn zeros(n_actors: u32, kind: &str, scale: f64) -> Self {
        Self {
            n_actors,
            values: vec![0.0; n_actors as usize],
            scale,
            kind: AttributeKind::parse_or_default(kind),
        }
    }

    /// Creates an attribute from a supplied vector of stored values.
    pub fn from_values(
        n_actors: u32,
        values: Vec<f64>,
        kind: &str,
        scale: f64,
    ) -> Result<Self, ModelError> {
        if values.len() != n_actors as usize {
            return Err(ModelError::DimensionMismatch {
                expected: n_actors as usize,
                found: values.len(),
            });
        }
        Ok(Self {
            n_actors,
            values,
            scale,
            kind: AttributeKind::parse_or_default(kind),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The raw stored vector.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn check_actor(&self, actor: ActorId) -> Result<(), ModelError> {
        if actor.0 >= 1 && actor.0 <= self.n_actors {
            Ok(())
        } else {
            Err(ModelError::ActorOutOfRange {
                actor: actor.0,
                n: self.n_actors,
            })
        }
    }

    /// The semantic value for `actor`: `stored / scale`.
    ///
    /// Out-of-range actors fail fast, uniformly with graph and neighborhood
    /// access.
    pub fn value(&self, actor: ActorId) -> Result<f64, ModelError> {
        self.check_actor(actor)?;
        Ok(self.values[actor.index()] / self.scale)
    }

    /// Sets the stored value for `actor` to zero.
    pub fn set_zero(&mut self, actor: ActorId) -> Result<(), ModelError> {
        self.set_value(actor, 0.0)
    }

    /// Sets the stored value for `actor` to one.
    pub fn set_one(&mut self, actor: ActorId) -> Result<(), ModelError> {
        self.set_value(actor, 1.0)
    }

    /// Writes a raw stored value, bypassing the scale.
    pub fn set_value(&mut self, actor: ActorId, value: f64) -> Result<(), ModelError> {
        self.check_actor(actor)?;
        self.values[actor.index()] = value;
        Ok(())
    }

    /// Replaces the whole stored vector.
    pub fn replace_all(&mut self, values: Vec<f64>) -> Result<(), ModelError> {
        if values.len() != self.n_actors as usize {
            return Err(ModelError::DimensionMismatch {
                expected: self.n_actors as usize,
                found: values.len(),
            });
        }
        self.values = values;
        Ok(())
    }

    /// Legacy sanity check inherited from categorical-attribute use: no raw
    /// stored value should exceed the number of actors when read as a count.
    /// Violations are reported, never auto-corrected.
    pub fn is_within_bounds(&self) -> bool {
        let limit = self.n_actors as f64;
        self.values.iter().all(|&v| v <= limit)
    }
}
