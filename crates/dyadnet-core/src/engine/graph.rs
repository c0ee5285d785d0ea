//! Relational graph over a fixed actor set.
//!
//! This module implements the incremental graph store and the shared-partner
//! statistics built on top of it:
//!
//! - **ActorId**: 1-based actor identifier, the key space shared by every
//!   structure in a model
//! - **RelationGraph**: directed or undirected relation stored as per-actor
//!   outgoing/incoming neighbor sets, with point mutation and dense-matrix
//!   bulk exchange
//! - **SharedPartnerKind**: the four direction-aware shared-partner
//!   definitions (OSP/ISP/OTP/ITP) used to quantify triadic closure
//!
//! ## Design
//!
//! The set representation is authoritative for mutation; [`to_matrix`]
//! produces a derived snapshot on demand, never the reverse. Sequences
//! derived from hash sets are sorted by actor id before being returned, so
//! results are deterministic even though the ordering carries no meaning.
//!
//! [`to_matrix`]: RelationGraph::to_matrix

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::errors::ModelError;
use crate::engine::matrix::DenseMatrix;

/// A 1-based actor identifier in `[1, N]`.
///
/// Implements `Ord` for stable, deterministic iteration. `index()` maps to
/// the 0-based row/column used at the dense-matrix boundary.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ActorId(pub u32);

impl ActorId {
    /// The 0-based matrix index for this actor. Only meaningful for ids ≥ 1.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the four shared-partner definitions to compute.
///
/// For an ordered pair `(from, to)`:
///
/// | Variant | Definition |
/// |---|---|
/// | `Osp` | `out[from] ∩ out[to]` |
/// | `Isp` | `in[from] ∩ in[to]` |
/// | `Otp` | `out[from] ∩ in[to]` |
/// | `Itp` | `in[from] ∩ out[to]` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharedPartnerKind {
    /// Outgoing shared partners.
    #[default]
    Osp,
    /// Incoming shared partners.
    Isp,
    /// Outgoing two-paths.
    Otp,
    /// Incoming two-paths.
    Itp,
}

impl SharedPartnerKind {
    /// Parses the wire form (`"OSP"`, `"ISP"`, `"OTP"`, `"ITP"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OSP" => Some(Self::Osp),
            "ISP" => Some(Self::Isp),
            "OTP" => Some(Self::Otp),
            "ITP" => Some(Self::Itp),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Osp => "OSP",
            Self::Isp => "ISP",
            Self::Otp => "OTP",
            Self::Itp => "ITP",
        }
    }
}

/// A directed or undirected relation over actors `1..=N`.
///
/// Both neighbor tables are allocated with one empty set per actor at
/// construction and never resized; `incoming` is populated only when the
/// graph is directed. Undirected graphs keep `out` symmetric
/// (`b ∈ out[a] ⇔ a ∈ out[b]`) and authoritative on its own.
#[derive(Debug, Clone)]
pub struct RelationGraph {
    n_actors: u32,
    directed: bool,
    out: FxHashMap<ActorId, FxHashSet<ActorId>>,
    incoming: FxHashMap<ActorId, FxHashSet<ActorId>>,
}

impl RelationGraph {
    /// Creates an empty graph over `n_actors` actors.
    pub fn new(n_actors: u32, directed: bool) -> Self {
        let mut out = FxHashMap::default();
        let mut incoming = FxHashMap::default();
        for i in 1..=n_actors {
            out.insert(ActorId(i), FxHashSet::default());
            incoming.insert(ActorId(i), FxHashSet::default());
        }
        Self {
            n_actors,
            directed,
            out,
            incoming,
        }
    }

    /// Creates a graph and bulk-loads it from a 0/1 adjacency matrix.
    ///
    /// `mat[i][j] = 1` becomes the edge `(i+1, j+1)`. For undirected graphs
    /// the matrix is expected to be symmetric; the insertion path mirrors
    /// every tie regardless, so a symmetric input loads consistently.
    pub fn from_matrix(n_actors: u32, directed: bool, mat: &DenseMatrix) -> Result<Self, ModelError> {
        let mut graph = Self::new(n_actors, directed);
        graph.load_from_matrix(mat)?;
        Ok(graph)
    }

    pub fn n_actors(&self) -> u32 {
        self.n_actors
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_set(&self, actor: ActorId) -> Result<&FxHashSet<ActorId>, ModelError> {
        self.out.get(&actor).ok_or(ModelError::ActorOutOfRange {
            actor: actor.0,
            n: self.n_actors,
        })
    }

    fn in_set(&self, actor: ActorId) -> Result<&FxHashSet<ActorId>, ModelError> {
        self.incoming.get(&actor).ok_or(ModelError::ActorOutOfRange {
            actor: actor.0,
            n: self.n_actors,
        })
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

    /// Actors that `actor` points to (or is tied to, if undirected).
    pub fn out_neighbors(&self, actor: ActorId) -> Result<&FxHashSet<ActorId>, ModelError> {
        self.out_set(actor)
    }

    /// Actors pointing to `actor`. Empty for every actor of an undirected
    /// graph, where `out` alone is authoritative.
    pub fn in_neighbors(&self, actor: ActorId) -> Result<&FxHashSet<ActorId>, ModelError> {
        self.in_set(actor)
    }

    /// Inserts the edge `(from, to)`. Inserting an existing edge is a no-op.
    pub fn add_edge(&mut self, from: ActorId, to: ActorId) -> Result<(), ModelError> {
        self.check_actor(from)?;
        self.check_actor(to)?;
        if let Some(set) = self.out.get_mut(&from) {
            set.insert(to);
        }
        if self.directed {
            if let Some(set) = self.incoming.get_mut(&to) {
                set.insert(from);
            }
        } else if let Some(set) = self.out.get_mut(&to) {
            set.insert(from);
        }
        Ok(())
    }

    /// Removes the edge `(from, to)`, mirroring the placement rules of
    /// [`add_edge`](Self::add_edge). Removing an absent edge is a no-op.
    pub fn delete_edge(&mut self, from: ActorId, to: ActorId) -> Result<(), ModelError> {
        self.check_actor(from)?;
        self.check_actor(to)?;
        if let Some(set) = self.out.get_mut(&from) {
            set.remove(&to);
        }
        if self.directed {
            if let Some(set) = self.incoming.get_mut(&to) {
                set.remove(&from);
            }
        } else if let Some(set) = self.out.get_mut(&to) {
            set.remove(&from);
        }
        Ok(())
    }

    /// Flips the state of the pair `(from, to)`: present edges are deleted,
    /// absent ones added. Applying it twice restores the prior state exactly.
    pub fn toggle_edge(&mut self, from: ActorId, to: ActorId) -> Result<(), ModelError> {
        if self.has_edge(from, to)? {
            self.delete_edge(from, to)
        } else {
            self.add_edge(from, to)
        }
    }

    /// Membership test on `out[from]`.
    pub fn has_edge(&self, from: ActorId, to: ActorId) -> Result<bool, ModelError> {
        self.check_actor(to)?;
        Ok(self.out_set(from)?.contains(&to))
    }

    /// The 1.0/0.0 form of [`has_edge`](Self::has_edge), consumed by effect
    /// functions that fold tie states into sums.
    pub fn edge_value(&self, from: ActorId, to: ActorId) -> Result<f64, ModelError> {
        Ok(if self.has_edge(from, to)? { 1.0 } else { 0.0 })
    }

    /// Sum of the out-set sizes over all actors.
    ///
    /// For undirected graphs every tie lives in both endpoint sets, so this
    /// counts each edge twice. That is the counting convention, not a bug.
    pub fn edge_count(&self) -> f64 {
        self.out.values().map(|s| s.len() as f64).sum()
    }

    /// Replaces the entire adjacency structure from a 0/1 matrix.
    ///
    /// This is the same bulk path the matrix constructor uses; a load
    /// followed by [`to_matrix`](Self::to_matrix) reproduces the input for
    /// any valid 0/1 matrix (symmetric when undirected).
    pub fn load_from_matrix(&mut self, mat: &DenseMatrix) -> Result<(), ModelError> {
        let n = self.n_actors as usize;
        if mat.rows() != n || mat.cols() != n {
            return Err(ModelError::DimensionMismatch {
                expected: n * n,
                found: mat.rows() * mat.cols(),
            });
        }
        for set in self.out.values_mut() {
            set.clear();
        }
        for set in self.incoming.values_mut() {
            set.clear();
        }
        for i in 0..n {
            for j in 0..n {
                if mat.get(i, j) == 1.0 {
                    self.add_edge(ActorId(i as u32 + 1), ActorId(j as u32 + 1))?;
                }
            }
        }
        Ok(())
    }

    /// Produces the dense 0/1 snapshot of the adjacency structure.
    pub fn to_matrix(&self) -> DenseMatrix {
        let n = self.n_actors as usize;
        let mut mat = DenseMatrix::zeros(n, n);
        for (actor, set) in &self.out {
            for peer in set {
                mat.set(actor.index(), peer.index(), 1.0);
            }
        }
        mat
    }

    /// Computes the shared partners of `(from, to)` under `kind`, sorted by
    /// actor id. The ordering is deterministic but carries no meaning.
    ///
    /// On an undirected graph every variant degrades to
    /// [`SharedPartnerKind::Osp`]: the in-tables are never populated there,
    /// so the direction-sensitive definitions do not apply. This keeps one
    /// sampler code path valid for both graph kinds.
    pub fn shared_partners(
        &self,
        from: ActorId,
        to: ActorId,
        kind: SharedPartnerKind,
    ) -> Result<Vec<ActorId>, ModelError> {
        let kind = if self.directed {
            kind
        } else {
            SharedPartnerKind::Osp
        };
        let (left, right) = match kind {
            SharedPartnerKind::Osp => (self.out_set(from)?, self.out_set(to)?),
            SharedPartnerKind::Isp => (self.in_set(from)?, self.in_set(to)?),
            SharedPartnerKind::Otp => (self.out_set(from)?, self.in_set(to)?),
            SharedPartnerKind::Itp => (self.in_set(from)?, self.out_set(to)?),
        };
        let mut partners: Vec<ActorId> = left.intersection(right).copied().collect();
        partners.sort_unstable();
        Ok(partners)
    }
}
