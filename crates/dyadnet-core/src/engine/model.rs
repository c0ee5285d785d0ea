//! Composite models operated on by an external sampler.
//!
//! [`DyadModel`] aggregates one graph, one attribute, and one neighborhood
//! structure, all dimensioned by the same actor count. [`ResponseModel`]
//! adds a second ("response") attribute by holding a `DyadModel` as a field
//! and delegating — composition rather than subtyping, so every base
//! behavior is reused without an inheritance relationship.
//!
//! Duplication is value-copy: `Clone` deep-copies all owned parts, and two
//! clones never share state.

use std::fmt;

use crate::engine::attribute::ActorAttribute;
use crate::engine::errors::ModelError;
use crate::engine::graph::{ActorId, RelationGraph};
use crate::engine::matrix::DenseMatrix;
use crate::engine::neighborhood::{ActorSetMap, Neighborhood};

/// One graph, one attribute, one neighborhood structure.
#[derive(Debug, Clone)]
pub struct DyadModel {
    n_actors: u32,
    graph: RelationGraph,
    attribute: ActorAttribute,
    neighborhood: Neighborhood,
}

impl DyadModel {
    /// Creates an empty model: no edges, zero-filled attribute, empty
    /// neighborhoods.
    pub fn new(n_actors: u32, directed: bool, kind: &str, scale: f64) -> Self {
        Self {
            n_actors,
            graph: RelationGraph::new(n_actors, directed),
            attribute: ActorAttribute::zeros(n_actors, kind, scale),
            neighborhood: Neighborhood::new(n_actors),
        }
    }

    /// Empty graph and attribute, neighborhood and overlap bulk-loaded from
    /// a matrix pair.
    pub fn with_neighborhood_matrices(
        n_actors: u32,
        directed: bool,
        nbhd: &DenseMatrix,
        overlap_pairs: &DenseMatrix,
        kind: &str,
        scale: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            n_actors,
            graph: RelationGraph::new(n_actors, directed),
            attribute: ActorAttribute::zeros(n_actors, kind, scale),
            neighborhood: Neighborhood::from_matrices(n_actors, nbhd, overlap_pairs)?,
        })
    }

    /// Empty graph and attribute, neighborhood and overlap supplied directly
    /// as sets plus the overlap mirror.
    pub fn with_neighborhood_sets(
        n_actors: u32,
        directed: bool,
        neighborhood: ActorSetMap,
        overlap: ActorSetMap,
        overlap_mat: DenseMatrix,
        kind: &str,
        scale: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            n_actors,
            graph: RelationGraph::new(n_actors, directed),
            attribute: ActorAttribute::zeros(n_actors, kind, scale),
            neighborhood: Neighborhood::from_sets(n_actors, neighborhood, overlap, overlap_mat)?,
        })
    }

    /// Full construction from dense forms: adjacency matrix, attribute
    /// vector, and the neighborhood/overlap matrix pair.
    pub fn from_matrices(
        n_actors: u32,
        directed: bool,
        adjacency: &DenseMatrix,
        values: Vec<f64>,
        nbhd: &DenseMatrix,
        overlap_pairs: &DenseMatrix,
        kind: &str,
        scale: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            n_actors,
            graph: RelationGraph::from_matrix(n_actors, directed, adjacency)?,
            attribute: ActorAttribute::from_values(n_actors, values, kind, scale)?,
            neighborhood: Neighborhood::from_matrices(n_actors, nbhd, overlap_pairs)?,
        })
    }

    pub fn n_actors(&self) -> u32 {
        self.n_actors
    }

    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut RelationGraph {
        &mut self.graph
    }

    pub fn attribute(&self) -> &ActorAttribute {
        &self.attribute
    }

    pub fn attribute_mut(&mut self) -> &mut ActorAttribute {
        &mut self.attribute
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    pub fn neighborhood_mut(&mut self) -> &mut Neighborhood {
        &mut self.neighborhood
    }

    /// Replaces every actor's neighborhood set.
    pub fn assign_neighborhood(&mut self, map: ActorSetMap) -> Result<(), ModelError> {
        self.neighborhood.assign(map)
    }

    /// Replaces one actor's neighborhood set.
    pub fn change_neighborhood(
        &mut self,
        actor: ActorId,
        new_set: rustc_hash::FxHashSet<ActorId>,
    ) -> Result<(), ModelError> {
        self.neighborhood.change(actor, new_set)
    }

    /// True iff every actor sees the full actor set.
    pub fn is_neighborhood_full(&self) -> bool {
        self.neighborhood.is_full()
    }

    /// Membership test on `neighborhood[from]`.
    pub fn neighborhood_contains(&self, from: ActorId, to: ActorId) -> Result<bool, ModelError> {
        self.neighborhood.contains(from, to)
    }

    /// Symmetric membership test on the overlap relation.
    pub fn overlap_contains(&self, from: ActorId, to: ActorId) -> Result<bool, ModelError> {
        self.neighborhood.overlap_contains(from, to)
    }

    /// Bulk-resets attribute values and adjacency in one call, leaving the
    /// neighborhood structure untouched. This is the per-proposal reset path
    /// a sampler uses between configurations.
    pub fn set_state(&mut self, values: Vec<f64>, adjacency: &DenseMatrix) -> Result<(), ModelError> {
        self.attribute.replace_all(values)?;
        self.graph.load_from_matrix(adjacency)
    }
}

/// Human-readable dump of the model's dense snapshots. Not a stable format.
impl fmt::Display for DyadModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network")?;
        write!(f, "{}", self.graph.to_matrix())?;
        writeln!(f, "Attribute")?;
        for v in self.attribute.values() {
            writeln!(f, "{:8.4}", v)?;
        }
        writeln!(f, "Neighborhood")?;
        write!(f, "{}", self.neighborhood.to_matrix())
    }
}

/// A [`DyadModel`] plus a second, response attribute.
///
/// This is the unit effect functions score: the graph and the explanatory
/// attribute come from the base model, the response attribute rides
/// alongside.
#[derive(Debug, Clone)]
pub struct ResponseModel {
    base: DyadModel,
    response: ActorAttribute,
}

impl ResponseModel {
    /// Creates an empty model with both attributes zero-filled.
    pub fn new(
        n_actors: u32,
        directed: bool,
        kind_x: &str,
        kind_y: &str,
        scale_x: f64,
        scale_y: f64,
    ) -> Self {
        Self {
            base: DyadModel::new(n_actors, directed, kind_x, scale_x),
            response: ActorAttribute::zeros(n_actors, kind_y, scale_y),
        }
    }

    /// Empty model with the neighborhood pair bulk-loaded from matrices.
    pub fn with_neighborhood_matrices(
        n_actors: u32,
        directed: bool,
        nbhd: &DenseMatrix,
        overlap_pairs: &DenseMatrix,
        kind_x: &str,
        kind_y: &str,
        scale_x: f64,
        scale_y: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            base: DyadModel::with_neighborhood_matrices(
                n_actors,
                directed,
                nbhd,
                overlap_pairs,
                kind_x,
                scale_x,
            )?,
            response: ActorAttribute::zeros(n_actors, kind_y, scale_y),
        })
    }

    /// Empty model with the neighborhood supplied directly as sets.
    pub fn with_neighborhood_sets(
        n_actors: u32,
        directed: bool,
        neighborhood: ActorSetMap,
        overlap: ActorSetMap,
        overlap_mat: DenseMatrix,
        kind_x: &str,
        kind_y: &str,
        scale_x: f64,
        scale_y: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            base: DyadModel::with_neighborhood_sets(
                n_actors,
                directed,
                neighborhood,
                overlap,
                overlap_mat,
                kind_x,
                scale_x,
            )?,
            response: ActorAttribute::zeros(n_actors, kind_y, scale_y),
        })
    }

    /// Full construction from dense forms for both attributes, the
    /// adjacency, and the neighborhood pair.
    pub fn from_matrices(
        n_actors: u32,
        directed: bool,
        values_x: Vec<f64>,
        values_y: Vec<f64>,
        adjacency: &DenseMatrix,
        nbhd: &DenseMatrix,
        overlap_pairs: &DenseMatrix,
        kind_x: &str,
        kind_y: &str,
        scale_x: f64,
        scale_y: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            base: DyadModel::from_matrices(
                n_actors,
                directed,
                adjacency,
                values_x,
                nbhd,
                overlap_pairs,
                kind_x,
                scale_x,
            )?,
            response: ActorAttribute::from_values(n_actors, values_y, kind_y, scale_y)?,
        })
    }

    pub fn base(&self) -> &DyadModel {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut DyadModel {
        &mut self.base
    }

    pub fn n_actors(&self) -> u32 {
        self.base.n_actors()
    }

    pub fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    pub fn graph(&self) -> &RelationGraph {
        self.base.graph()
    }

    pub fn graph_mut(&mut self) -> &mut RelationGraph {
        self.base.graph_mut()
    }

    /// The explanatory attribute of the base model.
    pub fn attribute(&self) -> &ActorAttribute {
        self.base.attribute()
    }

    pub fn attribute_mut(&mut self) -> &mut ActorAttribute {
        self.base.attribute_mut()
    }

    /// The response attribute.
    pub fn response(&self) -> &ActorAttribute {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut ActorAttribute {
        &mut self.response
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        self.base.neighborhood()
    }

    pub fn neighborhood_mut(&mut self) -> &mut Neighborhood {
        self.base.neighborhood_mut()
    }

    pub fn is_neighborhood_full(&self) -> bool {
        self.base.is_neighborhood_full()
    }

    /// Bulk-resets both attribute vectors and the adjacency in one call.
    pub fn set_state(
        &mut self,
        values_x: Vec<f64>,
        values_y: Vec<f64>,
        adjacency: &DenseMatrix,
    ) -> Result<(), ModelError> {
        self.response.replace_all(values_y)?;
        self.base.set_state(values_x, adjacency)
    }
}

impl fmt::Display for ResponseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X Attribute")?;
        for v in self.base.attribute().values() {
            writeln!(f, "{:8.4}", v)?;
        }
        writeln!(f, "Y Attribute")?;
        for v in self.response.values() {
            writeln!(f, "{:8.4}", v)?;
        }
        writeln!(f, "Z Network")?;
        write!(f, "{}", self.base.graph().to_matrix())?;
        writeln!(f, "Neighborhood")?;
        write!(f, "{}", self.base.neighborhood().to_matrix())
    }
}
