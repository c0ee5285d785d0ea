//! Built-in effects registered through the public contract.
//!
//! These cover the standard change statistics a sampler starts from: tie
//! volume, reciprocity, the four shared-partner counts, attribute sums, and
//! a dyadic covariate read. Each one goes through [`EffectFn`] and the
//! registry exactly like third-party code would.

use std::sync::Arc;

use crate::effects::{EffectFn, EffectRegistry};
use crate::engine::graph::{ActorId, SharedPartnerKind};
use crate::engine::matrix::DenseMatrix;
use crate::engine::model::ResponseModel;

/// Total tie volume of the network (undirected graphs count each tie twice
/// by the store's convention).
struct Edges;

impl EffectFn for Edges {
    fn eval(
        &self,
        model: &ResponseModel,
        _from: ActorId,
        _to: ActorId,
        _covariates: &DenseMatrix,
        _scale: f64,
        _term: &str,
        _directed: bool,
    ) -> f64 {
        model.graph().edge_count()
    }
}

/// Reciprocation indicator for the dyad: 1.0 when the reverse tie exists.
/// Zero on undirected graphs, where reciprocity is not a statistic.
struct Mutual;

impl EffectFn for Mutual {
    fn eval(
        &self,
        model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        _covariates: &DenseMatrix,
        _scale: f64,
        _term: &str,
        directed: bool,
    ) -> f64 {
        if !directed {
            return 0.0;
        }
        model.graph().edge_value(to, from).unwrap_or(0.0)
    }
}

/// Number of shared partners of the dyad under one fixed variant.
struct SharedPartnerCount(SharedPartnerKind);

impl EffectFn for SharedPartnerCount {
    fn eval(
        &self,
        model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        _covariates: &DenseMatrix,
        _scale: f64,
        term: &str,
        _directed: bool,
    ) -> f64 {
        // The term tag may override the variant; unspecified means OSP,
        // which is also what the constructed kind defaults to.
        let kind = SharedPartnerKind::parse(term).unwrap_or(self.0);
        model
            .graph()
            .shared_partners(from, to, kind)
            .map_or(0.0, |partners| partners.len() as f64)
    }
}

/// Sum of the explanatory attribute over the dyad's endpoints.
struct AttrSum;

impl EffectFn for AttrSum {
    fn eval(
        &self,
        model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        _covariates: &DenseMatrix,
        _scale: f64,
        _term: &str,
        _directed: bool,
    ) -> f64 {
        let x = model.attribute();
        x.value(from).unwrap_or(0.0) + x.value(to).unwrap_or(0.0)
    }
}

/// Sum of the response attribute over the dyad's endpoints.
struct ResponseSum;

impl EffectFn for ResponseSum {
    fn eval(
        &self,
        model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        _covariates: &DenseMatrix,
        _scale: f64,
        _term: &str,
        _directed: bool,
    ) -> f64 {
        let y = model.response();
        y.value(from).unwrap_or(0.0) + y.value(to).unwrap_or(0.0)
    }
}

/// Scaled dyadic covariate read from the supplied matrix.
struct Covariate;

impl EffectFn for Covariate {
    fn eval(
        &self,
        _model: &ResponseModel,
        from: ActorId,
        to: ActorId,
        covariates: &DenseMatrix,
        scale: f64,
        _term: &str,
        _directed: bool,
    ) -> f64 {
        let (i, j) = (from.index(), to.index());
        if i < covariates.rows() && j < covariates.cols() {
            covariates.get(i, j) / scale
        } else {
            0.0
        }
    }
}

/// Installs the built-in effects into `registry`.
///
/// Uses the same first-wins registration path as external plugins, so
/// calling this twice (or after a name was claimed elsewhere) just leaves
/// the prior entries in place.
pub fn register_builtins(registry: &EffectRegistry) {
    registry.register("edges", Arc::new(Edges), "e", 0.0);
    registry.register("mutual", Arc::new(Mutual), "mut", 0.0);
    registry.register(
        "esp_osp",
        Arc::new(SharedPartnerCount(SharedPartnerKind::Osp)),
        "osp",
        0.0,
    );
    registry.register(
        "esp_isp",
        Arc::new(SharedPartnerCount(SharedPartnerKind::Isp)),
        "isp",
        0.0,
    );
    registry.register(
        "esp_otp",
        Arc::new(SharedPartnerCount(SharedPartnerKind::Otp)),
        "otp",
        0.0,
    );
    registry.register(
        "esp_itp",
        Arc::new(SharedPartnerCount(SharedPartnerKind::Itp)),
        "itp",
        0.0,
    );
    registry.register("attr_sum", Arc::new(AttrSum), "xsum", 0.0);
    registry.register("resp_sum", Arc::new(ResponseSum), "ysum", 0.0);
    registry.register("covariate", Arc::new(Covariate), "cov", 0.0);
}
