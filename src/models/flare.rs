// src/models/flare.rs
use super::model::DeterministicFlux;
use crate::error::{validation::*, LcResult};

/// Flare light curve: quiescent flux 1 before the peak, then an exponential
/// decay back to quiescence:
///
/// ```text
/// flux(t) = 1                            t < t0
/// flux(t) = 1 + A exp(-(t - t0) / τ)     t ≥ t0
/// ```
///
/// Normalized so the modal flux equals 1 (most epochs sit at quiescence).
pub struct FlarePeak {
    pub amplitude: f64,
    pub peak_time: f64,
    pub fade_time: f64,
}

impl FlarePeak {
    pub fn new(amplitude: f64, peak_time: f64, fade_time: f64) -> LcResult<Self> {
        validate_positive("amplitude", amplitude)?;
        validate_finite("peak_time", peak_time)?;
        validate_positive("fade_time", fade_time)?;
        Ok(FlarePeak {
            amplitude,
            peak_time,
            fade_time,
        })
    }
}

impl DeterministicFlux for FlarePeak {
    fn label(&self) -> &'static str {
        "flare peak"
    }

    fn flux_at(&self, t: f64) -> f64 {
        if t < self.peak_time {
            1.0
        } else {
            1.0 + self.amplitude * (-(t - self.peak_time) / self.fade_time).exp()
        }
    }
}
