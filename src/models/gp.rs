// src/models/gp.rs
//! Gaussian-Process Light Curve
//!
//! # Mathematical Framework
//!
//! The log flux is a zero-mean Gaussian process with squared-exponential
//! covariance:
//!
//! ```text
//! K(t_i, t_j) = σ² exp(-(t_i - t_j)² / (2τ²))
//! ```
//!
//! A realization over n epochs draws z ~ N(0, I) and computes x = L z where
//! K = L Lᵀ is the Cholesky factorization. Fluxes are exp(x), so the median
//! flux is 1.
//!
//! The factorization requires K to be positive-definite. A small nugget is
//! added to the diagonal; epochs closer than the floating-point resolution
//! of the kernel would still defeat it, which is why the realization only
//! ever sees strictly increasing epochs (exact duplicates are collapsed by
//! the model layer — duplicate rows make K singular).

use super::model::StochasticProcess;
use crate::error::{validation::*, LcError, LcResult};
use crate::rng::RandomStream;
use nalgebra::{DMatrix, DVector};

/// Relative diagonal jitter keeping the kernel factorizable. Must dominate
/// the Cholesky rounding error (~n·ε·‖K‖) for densely sampled cadences.
const NUGGET_SCALE: f64 = 1.0e-8;

/// Squared-exponential Gaussian process in log flux. Median flux is 1.
pub struct SimpleGp {
    pub sigma: f64,
    pub tau: f64,
}

impl SimpleGp {
    pub fn new(sigma: f64, tau: f64) -> LcResult<Self> {
        validate_positive("sigma", sigma)?;
        validate_positive("tau", tau)?;
        Ok(SimpleGp { sigma, tau })
    }
}

impl StochasticProcess for SimpleGp {
    fn label(&self) -> &'static str {
        "Gaussian process"
    }

    fn realize(&self, times: &[f64], stream: &mut RandomStream) -> LcResult<Vec<f64>> {
        let n = times.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let variance = self.sigma * self.sigma;
        let nugget = NUGGET_SCALE * variance;
        let kernel = DMatrix::from_fn(n, n, |i, j| {
            let d = times[i] - times[j];
            let k = variance * (-(d * d) / (2.0 * self.tau * self.tau)).exp();
            if i == j {
                k + nugget
            } else {
                k
            }
        });

        let cholesky = kernel.cholesky().ok_or_else(|| LcError::NumericalInstability {
            method: "SimpleGp::realize".to_string(),
            reason: "kernel matrix is not positive-definite".to_string(),
        })?;

        let draws = DVector::from_fn(n, |_, _| stream.draw_normal());
        let log_flux = cholesky.l() * draws;

        Ok(log_flux.iter().map(|&x| x.exp()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SimContext;
    use crate::models::model::LightCurve;
    use crate::models::stochastic::StochasticModel;

    #[test]
    fn test_parameter_validation() {
        assert!(SimpleGp::new(0.3, 2.0).is_ok());
        assert!(SimpleGp::new(0.0, 2.0).is_err());
        assert!(SimpleGp::new(0.3, 0.0).is_err());
    }

    #[test]
    fn test_all_fluxes_positive_and_finite() {
        let context = SimContext::with_seed(42);
        let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.7).collect();
        let model =
            StochasticModel::new(&times, SimpleGp::new(0.4, 3.0).unwrap(), context).unwrap();

        let fluxes = model.fluxes().unwrap();
        assert_eq!(fluxes.len(), 200);
        for flux in fluxes {
            assert!(flux.is_finite());
            assert!(flux > 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_realization() {
        let times: Vec<f64> = (0..50).map(|i| i as f64).collect();

        let context1 = SimContext::with_seed(11);
        let model1 =
            StochasticModel::new(&times, SimpleGp::new(0.3, 2.0).unwrap(), context1).unwrap();

        let context2 = SimContext::with_seed(11);
        let model2 =
            StochasticModel::new(&times, SimpleGp::new(0.3, 2.0).unwrap(), context2).unwrap();

        assert_eq!(model1.fluxes().unwrap(), model2.fluxes().unwrap());
    }

    #[test]
    fn test_duplicate_epochs_resolved_upstream() {
        // Exact duplicates would make the kernel singular; the model layer
        // collapses them before the realization runs.
        let context = SimContext::with_seed(42);
        let model = StochasticModel::new(
            &[0.0, 1.0, 1.0, 2.0, 1.0],
            SimpleGp::new(0.3, 2.0).unwrap(),
            context,
        )
        .unwrap();

        let fluxes = model.fluxes().unwrap();
        assert_eq!(fluxes.len(), 5);
        assert_eq!(fluxes[1], fluxes[2]);
        assert_eq!(fluxes[1], fluxes[3]);
    }

    #[test]
    fn test_nearby_epochs_are_correlated() {
        let context = SimContext::with_seed(42);
        let dense: Vec<f64> = (0..300).map(|i| i as f64 * 0.01).collect();
        let model =
            StochasticModel::new(&dense, SimpleGp::new(0.5, 10.0).unwrap(), context).unwrap();
        let fluxes = model.fluxes().unwrap();

        let mean_abs_step = fluxes
            .windows(2)
            .map(|w| (w[1].ln() - w[0].ln()).abs())
            .sum::<f64>()
            / (fluxes.len() - 1) as f64;

        assert!(
            mean_abs_step < 0.05,
            "dense cadence steps too large: {}",
            mean_abs_step
        );
    }
}
