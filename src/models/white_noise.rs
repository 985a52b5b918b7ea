// src/models/white_noise.rs
use super::model::StochasticProcess;
use crate::error::{validation::*, LcResult};
use crate::rng::RandomStream;

/// Uncorrelated lognormal noise: flux_i = exp(σ z_i) with z_i ~ N(0,1) drawn
/// independently per epoch. Median flux is 1.
pub struct WhiteNoise {
    pub sigma: f64,
}

impl WhiteNoise {
    pub fn new(sigma: f64) -> LcResult<Self> {
        validate_positive("sigma", sigma)?;
        Ok(WhiteNoise { sigma })
    }
}

impl StochasticProcess for WhiteNoise {
    fn label(&self) -> &'static str {
        "white noise"
    }

    fn realize(&self, times: &[f64], stream: &mut RandomStream) -> LcResult<Vec<f64>> {
        Ok(times
            .iter()
            .map(|_| (self.sigma * stream.draw_normal()).exp())
            .collect())
    }
}
