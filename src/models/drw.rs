// src/models/drw.rs
use super::model::StochasticProcess;
use crate::error::{validation::*, LcResult};
use crate::rng::RandomStream;

/// Damped random walk: an Ornstein-Uhlenbeck process in log flux,
/// exponentiated so the flux stays positive. Median flux is 1.
///
/// The log flux x(t) relaxes toward 0 on timescale τ with asymptotic
/// standard deviation σ. Between consecutive epochs the exact conditional
/// update is used rather than an Euler discretization:
///
/// ```text
/// x(t+Δt) = ρ x(t) + σ √(1 - ρ²) z,   ρ = exp(-Δt/τ),  z ~ N(0,1)
/// ```
///
/// with the first epoch drawn from the stationary distribution N(0, σ²).
pub struct DampedRandomWalk {
    pub sigma: f64,
    pub tau: f64,
}

impl DampedRandomWalk {
    pub fn new(sigma: f64, tau: f64) -> LcResult<Self> {
        validate_positive("sigma", sigma)?;
        validate_positive("tau", tau)?;
        Ok(DampedRandomWalk { sigma, tau })
    }
}

impl StochasticProcess for DampedRandomWalk {
    fn label(&self) -> &'static str {
        "damped random walk"
    }

    fn realize(&self, times: &[f64], stream: &mut RandomStream) -> LcResult<Vec<f64>> {
        if times.is_empty() {
            return Ok(Vec::new());
        }

        let mut fluxes = Vec::with_capacity(times.len());
        let mut x = self.sigma * stream.draw_normal();
        fluxes.push(x.exp());

        for window in times.windows(2) {
            let dt = window[1] - window[0];
            let rho = (-dt / self.tau).exp();
            x = rho * x + self.sigma * (1.0 - rho * rho).sqrt() * stream.draw_normal();
            fluxes.push(x.exp());
        }
        Ok(fluxes)
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
        assert!(DampedRandomWalk::new(0.3, 5.0).is_ok());
        assert!(DampedRandomWalk::new(0.0, 5.0).is_err());
        assert!(DampedRandomWalk::new(0.3, -5.0).is_err());
    }

    #[test]
    fn test_all_fluxes_positive_and_finite() {
        let context = SimContext::with_seed(42);
        let times: Vec<f64> = (0..2000).map(|i| i as f64 * 0.5).collect();
        let model =
            StochasticModel::new(&times, DampedRandomWalk::new(0.4, 10.0).unwrap(), context)
                .unwrap();

        for flux in model.fluxes().unwrap() {
            assert!(flux.is_finite());
            assert!(flux > 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_realization() {
        let times: Vec<f64> = (0..100).map(|i| i as f64).collect();

        let context1 = SimContext::with_seed(7);
        let model1 =
            StochasticModel::new(&times, DampedRandomWalk::new(0.3, 5.0).unwrap(), context1)
                .unwrap();

        let context2 = SimContext::with_seed(7);
        let model2 =
            StochasticModel::new(&times, DampedRandomWalk::new(0.3, 5.0).unwrap(), context2)
                .unwrap();

        assert_eq!(model1.fluxes().unwrap(), model2.fluxes().unwrap());
    }

    #[test]
    fn test_nearby_epochs_are_correlated() {
        // With Δt ≪ τ the process barely moves between epochs; with Δt ≫ τ
        // it decorrelates. Compare log-flux step sizes in both regimes.
        let context = SimContext::with_seed(42);
        let dense: Vec<f64> = (0..1000).map(|i| i as f64 * 0.01).collect();
        let model =
            StochasticModel::new(&dense, DampedRandomWalk::new(0.5, 50.0).unwrap(), context)
                .unwrap();
        let fluxes = model.fluxes().unwrap();

        let mean_abs_step = fluxes
            .windows(2)
            .map(|w| (w[1].ln() - w[0].ln()).abs())
            .sum::<f64>()
            / (fluxes.len() - 1) as f64;

        // Stationary draws would wander ~sigma apart; dense sampling must be
        // far tighter than that.
        assert!(
            mean_abs_step < 0.1,
            "dense cadence steps too large: {}",
            mean_abs_step
        );
    }

    #[test]
    fn test_log_flux_scale_near_sigma() {
        // Sample far apart relative to tau so the epochs are nearly
        // independent stationary draws.
        let context = SimContext::with_seed(42);
        let sparse: Vec<f64> = (0..4000).map(|i| i as f64 * 50.0).collect();
        let model =
            StochasticModel::new(&sparse, DampedRandomWalk::new(0.5, 2.0).unwrap(), context)
                .unwrap();
        let fluxes = model.fluxes().unwrap();

        let logs: Vec<f64> = fluxes.iter().map(|f| f.ln()).collect();
        let mean = logs.iter().sum::<f64>() / logs.len() as f64;
        let std = (logs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / logs.len() as f64)
            .sqrt();

        assert!(mean.abs() < 0.1, "log-flux mean {} too far from 0", mean);
        assert!(
            (std - 0.5).abs() < 0.1,
            "log-flux std {} too far from sigma",
            std
        );
    }
}
