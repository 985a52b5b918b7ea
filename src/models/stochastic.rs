// src/models/stochastic.rs
//! Stochastic Light-Curve Realization
//!
//! # Realization Discipline
//!
//! A stochastic model's fluxes depend on a realization of the shared random
//! stream, computed **at most once** per instance:
//!
//! 1. The first `fluxes()` call checks out a private snapshot of the
//!    canonical stream from the [`SimContext`].
//! 2. The process realization draws exclusively from that snapshot over the
//!    model's unique epochs.
//! 3. Only after the realization passes every postcondition check is the
//!    snapshot committed back, advancing the canonical draw order by exactly
//!    the draws consumed. The result is cached and later calls return copies
//!    of it with no further randomness.
//!
//! A failure anywhere before the commit discards the snapshot and leaves both
//! the model (cache still unsolved) and the canonical stream exactly as
//! before the call, so the caller may retry.
//!
//! # Duplicate Epochs
//!
//! Construction sorts the cadence ascending and collapses exact duplicate
//! timestamps, so a repeated observation time resolves to one random outcome
//! rather than two independent ones.

use crate::context::SimContext;
use crate::error::{validation::validate_times, LcError, LcResult};
use crate::models::model::{LightCurve, StochasticProcess};
use std::cell::OnceCell;
use std::rc::Rc;

/// A light curve whose values depend on consumed random draws, realized
/// lazily through the checkout/commit protocol.
pub struct StochasticModel<P: StochasticProcess> {
    /// Sorted ascending; duplicates preserved.
    times: Vec<f64>,
    /// Strictly increasing; what the process realizes over.
    unique_times: Vec<f64>,
    /// times[i] == unique_times[unique_index[i]]
    unique_index: Vec<usize>,
    process: P,
    context: Rc<SimContext>,
    /// Single-assignment: populated by the first successful realization,
    /// never overwritten.
    cache: OnceCell<Vec<f64>>,
}

impl<P: StochasticProcess> StochasticModel<P> {
    /// Construct from observation times, sorted ascending at construction.
    pub fn new(times: &[f64], process: P, context: Rc<SimContext>) -> LcResult<Self> {
        validate_times(times)?;

        let mut sorted = times.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut unique_times: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut unique_index: Vec<usize> = Vec::with_capacity(sorted.len());
        for &t in &sorted {
            if unique_times.last() != Some(&t) {
                unique_times.push(t);
            }
            unique_index.push(unique_times.len() - 1);
        }

        Ok(Self {
            times: sorted,
            unique_times,
            unique_index,
            process,
            context,
            cache: OnceCell::new(),
        })
    }

    pub fn process(&self) -> &P {
        &self.process
    }

    /// Run the checkout/compute/commit protocol once.
    fn realize_once(&self) -> LcResult<Vec<f64>> {
        // Checkout: a private, disposable snapshot of the canonical stream.
        let mut stream = self.context.checkout();

        let unique = self.process.realize(&self.unique_times, &mut stream)?;

        if unique.len() != self.unique_times.len() {
            return Err(LcError::PostconditionViolation {
                model: self.process.label().to_string(),
                reason: format!(
                    "realization produced {} samples for {} epochs",
                    unique.len(),
                    self.unique_times.len()
                ),
            });
        }
        for (i, &flux) in unique.iter().enumerate() {
            if !flux.is_finite() || flux < 0.0 {
                return Err(LcError::PostconditionViolation {
                    model: self.process.label().to_string(),
                    reason: format!(
                        "flux {} at t = {} must be finite and non-negative",
                        flux, self.unique_times[i]
                    ),
                });
            }
        }

        // Expand back over duplicate epochs: one timestamp, one outcome.
        let fluxes: Vec<f64> = self.unique_index.iter().map(|&k| unique[k]).collect();

        // Commit: publish the advanced stream state only now that the
        // realization has passed every check.
        self.context.commit(stream);
        Ok(fluxes)
    }
}

impl<P: StochasticProcess> LightCurve for StochasticModel<P> {
    fn times(&self) -> Vec<f64> {
        self.times.clone()
    }

    /// Return the cached realization, computing it on the first call.
    fn fluxes(&self) -> LcResult<Vec<f64>> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached.clone());
        }
        let fluxes = self.realize_once()?;
        let _ = self.cache.set(fluxes.clone());
        Ok(fluxes)
    }

    fn size(&self) -> usize {
        self.times.len()
    }
}
