// src/models/deterministic.rs
//! Deterministic Light-Curve Evaluation
//!
//! Flux at each epoch is a pure function of time and the shape's fixed
//! parameters. No caching is performed: recomputation is cheap, and
//! returning a fresh copy on every call avoids aliasing bugs. Epochs are
//! independent, so evaluation fans out in parallel with rayon.

use crate::error::{validation::validate_times, LcError, LcResult};
use crate::models::model::{DeterministicFlux, LightCurve};
use rayon::prelude::*;

/// A light curve fully determined by time and fixed parameters.
pub struct DeterministicModel<S: DeterministicFlux> {
    times: Vec<f64>,
    shape: S,
}

impl<S: DeterministicFlux> DeterministicModel<S> {
    /// Construct from observation times, preserved in caller order.
    pub fn new(times: &[f64], shape: S) -> LcResult<Self> {
        validate_times(times)?;
        Ok(Self {
            times: times.to_vec(),
            shape,
        })
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }
}

impl<S: DeterministicFlux> LightCurve for DeterministicModel<S> {
    fn times(&self) -> Vec<f64> {
        self.times.clone()
    }

    /// Evaluate the flux law at every epoch, recomputed from scratch on each
    /// call. Every value is checked against the light-curve postconditions
    /// (finite, non-negative); a violation is a defect in the shape and is
    /// surfaced as a fatal [`LcError::PostconditionViolation`].
    fn fluxes(&self) -> LcResult<Vec<f64>> {
        let fluxes: Vec<f64> = self
            .times
            .par_iter()
            .map(|&t| self.shape.flux_at(t))
            .collect();

        for (i, &flux) in fluxes.iter().enumerate() {
            if !flux.is_finite() || flux < 0.0 {
                return Err(LcError::PostconditionViolation {
                    model: self.shape.label().to_string(),
                    reason: format!(
                        "flux {} at t = {} must be finite and non-negative",
                        flux, self.times[i]
                    ),
                });
            }
        }
        Ok(fluxes)
    }

    fn size(&self) -> usize {
        self.times.len()
    }
}
