//! Property tests for graph store invariants and matrix round-trips.

use dyadnet_core::{ActorId, DenseMatrix, Neighborhood, RelationGraph, SharedPartnerKind};
use proptest::prelude::*;

/// A small actor count plus a batch of dyads drawn from its id range.
fn actors_and_dyads() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (2u32..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((1..=n, 1..=n), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn toggle_twice_restores_the_graph((n, dyads) in actors_and_dyads(), directed: bool, from in 1u32..12, to in 1u32..12) {
        prop_assume!(from <= n && to <= n);
        let mut g = RelationGraph::new(n, directed);
        for (a, b) in &dyads {
            g.add_edge(ActorId(*a), ActorId(*b)).unwrap();
        }
        let before_edge = g.has_edge(ActorId(from), ActorId(to)).unwrap();
        let before_count = g.edge_count();

        g.toggle_edge(ActorId(from), ActorId(to)).unwrap();
        g.toggle_edge(ActorId(from), ActorId(to)).unwrap();

        prop_assert_eq!(g.has_edge(ActorId(from), ActorId(to)).unwrap(), before_edge);
        prop_assert_eq!(g.edge_count(), before_count);
    }

    #[test]
    fn directed_edges_mirror_into_the_in_table((n, dyads) in actors_and_dyads()) {
        let mut g = RelationGraph::new(n, true);
        for (a, b) in &dyads {
            g.add_edge(ActorId(*a), ActorId(*b)).unwrap();
        }
        for a in 1..=n {
            for b in 1..=n {
                let forward = g.has_edge(ActorId(a), ActorId(b)).unwrap();
                let mirrored = g.in_neighbors(ActorId(b)).unwrap().contains(&ActorId(a));
                prop_assert_eq!(forward, mirrored);
            }
        }
    }

    #[test]
    fn undirected_edges_are_symmetric((n, dyads) in actors_and_dyads()) {
        let mut g = RelationGraph::new(n, false);
        for (a, b) in &dyads {
            g.add_edge(ActorId(*a), ActorId(*b)).unwrap();
        }
        for a in 1..=n {
            for b in 1..=n {
                prop_assert_eq!(
                    g.has_edge(ActorId(a), ActorId(b)).unwrap(),
                    g.has_edge(ActorId(b), ActorId(a)).unwrap()
                );
            }
        }
    }

    #[test]
    fn matrix_load_round_trips((n, dyads) in actors_and_dyads()) {
        let mut mat = DenseMatrix::zeros(n as usize, n as usize);
        for (a, b) in &dyads {
            mat.set(*a as usize - 1, *b as usize - 1, 1.0);
        }
        let g = RelationGraph::from_matrix(n, true, &mat).unwrap();
        prop_assert_eq!(g.to_matrix(), mat);
    }

    #[test]
    fn osp_is_symmetric_and_within_out_sets((n, dyads) in actors_and_dyads(), a in 1u32..12, b in 1u32..12) {
        prop_assume!(a <= n && b <= n);
        let mut g = RelationGraph::new(n, true);
        for (x, y) in &dyads {
            g.add_edge(ActorId(*x), ActorId(*y)).unwrap();
        }
        let ab = g.shared_partners(ActorId(a), ActorId(b), SharedPartnerKind::Osp).unwrap();
        let ba = g.shared_partners(ActorId(b), ActorId(a), SharedPartnerKind::Osp).unwrap();
        prop_assert_eq!(&ab, &ba);
        let out_a = g.out_neighbors(ActorId(a)).unwrap();
        for partner in &ab {
            prop_assert!(out_a.contains(partner));
        }
    }

    #[test]
    fn neighborhood_is_full_iff_every_set_is_complete(n in 2u32..10, hole in 1u32..10) {
        prop_assume!(hole <= n);
        let mut nbhd = Neighborhood::new(n);
        // Fill every actor with the complete set.
        for a in 1..=n {
            nbhd.change(ActorId(a), (1..=n).map(ActorId).collect()).unwrap();
        }
        prop_assert!(nbhd.is_full());
        // Punch one hole and fullness is gone.
        let mut subset: std::collections::HashSet<ActorId> = (1..=n).map(ActorId).collect();
        subset.remove(&ActorId(hole));
        nbhd.change(ActorId(1), subset.into_iter().collect()).unwrap();
        prop_assert!(!nbhd.is_full());
    }
}
