//! Neighborhood and overlap visibility structure.
//!
//! Each actor carries a set of other actors "visible" to it when statistics
//! are computed; a model with every neighborhood equal to the full actor set
//! behaves like an unrestricted one. The derived overlap relation tracks
//! shared neighborhood membership per pair and is mirrored as a dense 2×K
//! coordinate list for bulk exchange with external numeric code.
//!
//! Both relations are keyed by the same 1-based actor space as the graph but
//! maintained independently of it. The set form is authoritative; the dense
//! forms are derived snapshots.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::errors::ModelError;
use crate::engine::graph::ActorId;
use crate::engine::matrix::DenseMatrix;

/// Per-actor actor set, the exchange form for bulk assignment.
pub type ActorSetMap = FxHashMap<ActorId, FxHashSet<ActorId>>;

/// Per-actor visibility sets plus the pairwise overlap relation.
///
/// The overlap relation is symmetric by convention:
/// [`overlap_contains`](Neighborhood::overlap_contains) reports true when
/// either endpoint records the other.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    n_actors: u32,
    neighborhood: ActorSetMap,
    overlap: ActorSetMap,
    overlap_mat: DenseMatrix,
}

impl Neighborhood {
    /// Creates the structure with one empty set per actor and an empty
    /// overlap mirror.
    pub fn new(n_actors: u32) -> Self {
        let mut neighborhood = ActorSetMap::default();
        let mut overlap = ActorSetMap::default();
        for i in 1..=n_actors {
            neighborhood.insert(ActorId(i), FxHashSet::default());
            overlap.insert(ActorId(i), FxHashSet::default());
        }
        Self {
            n_actors,
            neighborhood,
            overlap,
            overlap_mat: DenseMatrix::zeros(2, 0),
        }
    }

    /// Creates the structure and bulk-loads neighborhood and overlap from a
    /// matrix pair in one operation.
    ///
    /// `nbhd` is an N×N 0/1 matrix read row-wise
    /// (`neighborhood[i+1] = {j+1 : nbhd[i][j] = 1}`); `overlap_pairs` is a
    /// 2×K coordinate list of 1-based actor pairs, kept verbatim as the
    /// dense mirror.
    pub fn from_matrices(
        n_actors: u32,
        nbhd: &DenseMatrix,
        overlap_pairs: &DenseMatrix,
    ) -> Result<Self, ModelError> {
        let mut this = Self::new(n_actors);
        this.load_pair_from_matrices(nbhd, overlap_pairs)?;
        Ok(this)
    }

    /// Creates the structure from already-built sets and an overlap mirror.
    ///
    /// The caller supplies all three pieces consistently; ids are still
    /// range-checked.
    pub fn from_sets(
        n_actors: u32,
        neighborhood: ActorSetMap,
        overlap: ActorSetMap,
        overlap_mat: DenseMatrix,
    ) -> Result<Self, ModelError> {
        let mut this = Self::new(n_actors);
        this.assign(neighborhood)?;
        check_set_map(&overlap, n_actors)?;
        this.overlap = overlap;
        this.overlap_mat = overlap_mat;
        Ok(this)
    }

    pub fn n_actors(&self) -> u32 {
        self.n_actors
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

    /// Replaces every actor's neighborhood set.
    pub fn assign(&mut self, neighborhood: ActorSetMap) -> Result<(), ModelError> {
        check_set_map(&neighborhood, self.n_actors)?;
        self.neighborhood = neighborhood;
        Ok(())
    }

    /// Replaces one actor's neighborhood set.
    pub fn change(&mut self, actor: ActorId, new_set: FxHashSet<ActorId>) -> Result<(), ModelError> {
        self.check_actor(actor)?;
        for member in &new_set {
            self.check_actor(*member)?;
        }
        self.neighborhood.insert(actor, new_set);
        Ok(())
    }

    /// Rebuilds every actor's neighborhood from an N×N 0/1 matrix, leaving
    /// the overlap relation untouched.
    pub fn load_from_matrix(&mut self, mat: &DenseMatrix) -> Result<(), ModelError> {
        let n = self.n_actors as usize;
        if mat.rows() != n || mat.cols() != n {
            return Err(ModelError::DimensionMismatch {
                expected: n * n,
                found: mat.rows() * mat.cols(),
            });
        }
        for i in 0..n {
            let set: FxHashSet<ActorId> = mat
                .row(i)
                .iter()
                .enumerate()
                .filter(|(_, &v)| v == 1.0)
                .map(|(j, _)| ActorId(j as u32 + 1))
                .collect();
            self.neighborhood.insert(ActorId(i as u32 + 1), set);
        }
        Ok(())
    }

    /// Bulk-loads neighborhood and overlap together from a matrix pair.
    ///
    /// Populating both from the same call is what keeps the set form and the
    /// mirror consistent; see [`from_matrices`](Self::from_matrices) for the
    /// encoding.
    pub fn load_pair_from_matrices(
        &mut self,
        nbhd: &DenseMatrix,
        overlap_pairs: &DenseMatrix,
    ) -> Result<(), ModelError> {
        self.load_from_matrix(nbhd)?;
        if overlap_pairs.rows() != 2 {
            return Err(ModelError::DimensionMismatch {
                expected: 2,
                found: overlap_pairs.rows(),
            });
        }
        for set in self.overlap.values_mut() {
            set.clear();
        }
        for k in 0..overlap_pairs.cols() {
            let from = ActorId(overlap_pairs.get(0, k) as u32);
            let to = ActorId(overlap_pairs.get(1, k) as u32);
            self.check_actor(from)?;
            self.check_actor(to)?;
            if let Some(set) = self.overlap.get_mut(&from) {
                set.insert(to);
            }
        }
        self.overlap_mat = overlap_pairs.clone();
        Ok(())
    }

    /// Resets every neighborhood set to empty.
    pub fn clear(&mut self) {
        for set in self.neighborhood.values_mut() {
            set.clear();
        }
    }

    /// True iff every actor's neighborhood has cardinality exactly N, i.e.
    /// every actor sees the full actor set.
    pub fn is_full(&self) -> bool {
        self.neighborhood
            .values()
            .all(|set| set.len() == self.n_actors as usize)
    }

    /// Membership test on `neighborhood[from]`.
    pub fn contains(&self, from: ActorId, to: ActorId) -> Result<bool, ModelError> {
        self.check_actor(to)?;
        self.neighborhood
            .get(&from)
            .map(|set| set.contains(&to))
            .ok_or(ModelError::ActorOutOfRange {
                actor: from.0,
                n: self.n_actors,
            })
    }

    /// True when either endpoint records the other in its overlap set.
    pub fn overlap_contains(&self, from: ActorId, to: ActorId) -> Result<bool, ModelError> {
        let forward = self
            .overlap
            .get(&from)
            .ok_or(ModelError::ActorOutOfRange {
                actor: from.0,
                n: self.n_actors,
            })?
            .contains(&to);
        let backward = self
            .overlap
            .get(&to)
            .ok_or(ModelError::ActorOutOfRange {
                actor: to.0,
                n: self.n_actors,
            })?
            .contains(&from);
        Ok(forward || backward)
    }

    /// One actor's neighborhood set.
    pub fn neighborhood_of(&self, actor: ActorId) -> Result<&FxHashSet<ActorId>, ModelError> {
        self.neighborhood.get(&actor).ok_or(ModelError::ActorOutOfRange {
            actor: actor.0,
            n: self.n_actors,
        })
    }

    /// Dense 0/1 snapshot of the neighborhood sets.
    pub fn to_matrix(&self) -> DenseMatrix {
        let n = self.n_actors as usize;
        let mut mat = DenseMatrix::zeros(n, n);
        for (actor, set) in &self.neighborhood {
            for peer in set {
                mat.set(actor.index(), peer.index(), 1.0);
            }
        }
        mat
    }

    /// The 2×K coordinate mirror of the overlap relation.
    pub fn overlap_matrix(&self) -> &DenseMatrix {
        &self.overlap_mat
    }
}

fn check_set_map(map: &ActorSetMap, n_actors: u32) -> Result<(), ModelError> {
    for (actor, set) in map {
        for id in std::iter::once(actor).chain(set.iter()) {
            if id.0 < 1 || id.0 > n_actors {
                return Err(ModelError::ActorOutOfRange {
                    actor: id.0,
                    n: n_actors,
                });
            }
        }
    }
    Ok(())
}
