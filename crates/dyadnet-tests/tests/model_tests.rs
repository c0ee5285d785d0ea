//! Integration tests driving the composite models through the public API,
//! the way an estimation loop would.

use dyadnet_core::{
    register_builtins, ActorId, ActorSetMap, DenseMatrix, DyadModel, EffectRegistry, ModelError,
    ResponseModel, SharedPartnerKind,
};

fn adjacency_3() -> DenseMatrix {
    // 1 -> 2, 2 -> 3
    let mut mat = DenseMatrix::zeros(3, 3);
    mat.set(0, 1, 1.0);
    mat.set(1, 2, 1.0);
    mat
}

fn full_neighborhood_3() -> DenseMatrix {
    let mut mat = DenseMatrix::zeros(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            mat.set(i, j, 1.0);
        }
    }
    mat
}

#[test]
fn model_builds_from_dense_forms() {
    let overlap = DenseMatrix::from_rows(2, 1, vec![1.0, 2.0]).unwrap();
    let model = ResponseModel::from_matrices(
        3,
        true,
        vec![1.0, 0.0, 1.0],
        vec![2.0, 2.0, 0.0],
        &adjacency_3(),
        &full_neighborhood_3(),
        &overlap,
        "binomial",
        "poisson",
        1.0,
        2.0,
    )
    .unwrap();

    assert!(model.graph().has_edge(ActorId(1), ActorId(2)).unwrap());
    assert!(model.is_neighborhood_full());
    assert_eq!(model.attribute().value(ActorId(1)).unwrap(), 1.0);
    assert_eq!(model.response().value(ActorId(1)).unwrap(), 1.0);
    assert!(model
        .neighborhood()
        .overlap_contains(ActorId(2), ActorId(1))
        .unwrap());
}

#[test]
fn sampler_style_toggle_and_score_loop() {
    let registry = EffectRegistry::new();
    register_builtins(&registry);

    let mut model = ResponseModel::new(3, true, "binomial", "binomial", 1.0, 1.0);
    let covariates = DenseMatrix::zeros(3, 3);

    // Propose 1 -> 2, 2 -> 3, score the (1, 3) dyad, then retract.
    model.graph_mut().add_edge(ActorId(1), ActorId(2)).unwrap();
    model.graph_mut().add_edge(ActorId(2), ActorId(3)).unwrap();

    let otp = registry.lookup("esp_otp").unwrap();
    let score = otp.eval(&model, ActorId(1), ActorId(3), &covariates, 1.0, "", true);
    assert_eq!(score, 1.0);

    model.graph_mut().toggle_edge(ActorId(2), ActorId(3)).unwrap();
    let score = otp.eval(&model, ActorId(1), ActorId(3), &covariates, 1.0, "", true);
    assert_eq!(score, 0.0);
}

#[test]
fn neighborhood_restricts_visibility_independently_of_ties() {
    let mut model = DyadModel::new(3, false, "binomial", 1.0);
    model.graph_mut().add_edge(ActorId(1), ActorId(2)).unwrap();

    // The tie exists, but 2 is not visible to 1 until the neighborhood says so.
    assert!(model.graph().has_edge(ActorId(1), ActorId(2)).unwrap());
    assert!(!model.neighborhood_contains(ActorId(1), ActorId(2)).unwrap());

    let mut map = ActorSetMap::default();
    map.insert(ActorId(1), [ActorId(2)].into_iter().collect());
    model.assign_neighborhood(map).unwrap();
    assert!(model.neighborhood_contains(ActorId(1), ActorId(2)).unwrap());
    assert!(!model.is_neighborhood_full());
}

#[test]
fn shared_partner_queries_work_through_the_model() {
    let overlap = DenseMatrix::zeros(2, 0);
    let model = DyadModel::from_matrices(
        3,
        true,
        &adjacency_3(),
        vec![0.0; 3],
        &full_neighborhood_3(),
        &overlap,
        "binomial",
        1.0,
    )
    .unwrap();

    let partners = model
        .graph()
        .shared_partners(ActorId(1), ActorId(3), SharedPartnerKind::Otp)
        .unwrap();
    assert_eq!(partners, vec![ActorId(2)]);
}

#[test]
fn errors_propagate_through_delegation() {
    let mut model = ResponseModel::new(2, true, "binomial", "binomial", 1.0, 1.0);
    assert!(matches!(
        model.graph_mut().add_edge(ActorId(1), ActorId(5)),
        Err(ModelError::ActorOutOfRange { actor: 5, n: 2 })
    ));
    assert!(model.response().value(ActorId(3)).is_err());
    assert!(model
        .neighborhood()
        .contains(ActorId(1), ActorId(9))
        .is_err());
}

#[test]
fn clones_evolve_independently() {
    let mut model = ResponseModel::new(2, false, "binomial", "binomial", 1.0, 1.0);
    let snapshot = model.clone();

    model.graph_mut().add_edge(ActorId(1), ActorId(2)).unwrap();
    model.response_mut().set_one(ActorId(2)).unwrap();

    assert_eq!(snapshot.graph().edge_count(), 0.0);
    assert_eq!(snapshot.response().value(ActorId(2)).unwrap(), 0.0);
    assert_eq!(model.graph().edge_count(), 2.0);
}

#[test]
fn set_state_is_the_bulk_reset_path() {
    let mut model = ResponseModel::new(3, true, "binomial", "binomial", 1.0, 1.0);
    model.graph_mut().add_edge(ActorId(3), ActorId(1)).unwrap();

    model
        .set_state(vec![1.0, 1.0, 0.0], vec![0.0, 0.0, 1.0], &adjacency_3())
        .unwrap();

    // The old tie is gone, the loaded ones are in.
    assert!(!model.graph().has_edge(ActorId(3), ActorId(1)).unwrap());
    assert!(model.graph().has_edge(ActorId(1), ActorId(2)).unwrap());
    assert_eq!(model.attribute().value(ActorId(2)).unwrap(), 1.0);
    assert_eq!(model.response().value(ActorId(3)).unwrap(), 1.0);

    // Wrong-length vectors are a structural error.
    assert!(matches!(
        model.set_state(vec![1.0], vec![0.0, 0.0, 1.0], &adjacency_3()),
        Err(ModelError::DimensionMismatch { .. })
    ));
}
