// src/models/sine.rs
use super::model::DeterministicFlux;
use crate::error::{validation::*, LcResult};
use std::f64::consts::PI;

/// Sinusoidal light curve: flux(t) = 1 + A sin(2π(t/P + φ)).
///
/// Normalized so the mean flux over whole periods equals 1. Amplitude is
/// capped at 1 to keep the flux non-negative.
pub struct SineWave {
    pub amplitude: f64,
    pub period: f64,
    pub phase: f64,
}

impl SineWave {
    pub fn new(amplitude: f64, period: f64, phase: f64) -> LcResult<Self> {
        validate_positive("amplitude", amplitude)?;
        validate_range("amplitude", amplitude, 0.0, 1.0)?;
        validate_positive("period", period)?;
        validate_range("phase", phase, 0.0, 1.0)?;
        Ok(SineWave {
            amplitude,
            period,
            phase,
        })
    }
}

impl DeterministicFlux for SineWave {
    fn label(&self) -> &'static str {
        "sine wave"
    }

    fn flux_at(&self, t: f64) -> f64 {
        1.0 + self.amplitude * (2.0 * PI * (t / self.period + self.phase)).sin()
    }
}
