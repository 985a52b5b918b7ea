// src/models/model.rs
use crate::error::LcResult;
use crate::rng::RandomStream;

/// Common contract of every light-curve model. Returned sequences are copies;
/// mutating them never affects the model.
pub trait LightCurve {
    fn times(&self) -> Vec<f64>;
    fn fluxes(&self) -> LcResult<Vec<f64>>;
    fn size(&self) -> usize;
}

/// A deterministic flux law: flux at `t` is a pure function of `t` and the
/// shape's fixed parameters. `Sync` because evaluation fans out over epochs.
pub trait DeterministicFlux: Sync {
    fn label(&self) -> &'static str;
    fn flux_at(&self, t: f64) -> f64;
}

/// A stochastic realization algorithm. `times` is strictly increasing (exact
/// duplicates are collapsed upstream); all draws must come from `stream`.
pub trait StochasticProcess {
    fn label(&self) -> &'static str;
    fn realize(&self, times: &[f64], stream: &mut RandomStream) -> LcResult<Vec<f64>>;
}
