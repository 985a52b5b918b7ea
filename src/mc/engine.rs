// src/mc/engine.rs
//! Ensemble Simulation Engine
//!
//! Runs repeated realizations of a light-curve model over one observation
//! cadence and aggregates per-epoch summary statistics across the ensemble.
//!
//! Realizations run strictly sequentially: stochastic models share one
//! canonical random stream, and the checkout/commit protocol is not safe for
//! concurrent callers. Parallelism enters only afterwards, when the summary
//! statistics fan out over epochs.

use crate::error::{validation::validate_realizations, LcError, LcResult};
use crate::models::model::LightCurve;
use bitflags::bitflags;
use ndarray::Array2;
use rayon::prelude::*;
use statrs::statistics::{Data, OrderStatistics};

bitflags! {
    /// Which per-epoch statistics to compute across the ensemble.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SummaryConfig: u32 {
        const NONE   = 0;
        const MEAN   = 1 << 0;
        const MEDIAN = 1 << 1;
        const STDDEV = 1 << 2;
    }
}

/// Configuration for one ensemble run.
#[derive(Debug, Clone)]
pub struct EnsembleConfig {
    pub realizations: usize,
    pub summaries: SummaryConfig,
}

impl EnsembleConfig {
    /// Validate the ensemble configuration
    pub fn validate(&self) -> LcResult<()> {
        validate_realizations(self.realizations)
    }
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        EnsembleConfig {
            realizations: 1000,
            summaries: SummaryConfig::MEAN | SummaryConfig::STDDEV,
        }
    }
}

/// The realized ensemble: one shared cadence plus a realizations × epochs
/// flux matrix.
pub struct Ensemble {
    times: Vec<f64>,
    fluxes: Array2<f64>,
}

/// Per-epoch statistics across an ensemble; a field is `None` when its flag
/// was not requested.
#[derive(Debug, Clone)]
pub struct EnsembleSummary {
    pub mean: Option<Vec<f64>>,
    pub median: Option<Vec<f64>>,
    pub stddev: Option<Vec<f64>>,
}

/// Simulate an ensemble of light-curve realizations.
///
/// `build` is called once per realization index and must return a fresh
/// model over the same cadence (a stochastic model caches its realization,
/// so reusing one instance would replay a single outcome).
///
/// # Errors
///
/// Returns `LcError` for an invalid configuration, any model construction
/// or realization failure, or a cadence mismatch between realizations.
pub fn simulate_ensemble<M, F>(cfg: &EnsembleConfig, mut build: F) -> LcResult<Ensemble>
where
    M: LightCurve,
    F: FnMut(usize) -> LcResult<M>,
{
    cfg.validate()?;
    let n_realizations = cfg.realizations;

    let mut times: Vec<f64> = Vec::new();
    let mut flat: Vec<f64> = Vec::new();

    for i in 0..n_realizations {
        let model = build(i)?;
        let fluxes = model.fluxes()?;

        if i == 0 {
            times = model.times();
            flat.reserve(times.len() * n_realizations);
        } else if model.times() != times {
            return Err(LcError::SimulationError {
                realizations: n_realizations,
                reason: format!("realization {} uses a different cadence", i),
            });
        }
        flat.extend_from_slice(&fluxes);
    }

    let n_epochs = times.len();
    let fluxes = Array2::from_shape_vec((n_realizations, n_epochs), flat).map_err(|e| {
        LcError::SimulationError {
            realizations: n_realizations,
            reason: e.to_string(),
        }
    })?;

    Ok(Ensemble { times, fluxes })
}

impl Ensemble {
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn fluxes(&self) -> &Array2<f64> {
        &self.fluxes
    }

    pub fn realizations(&self) -> usize {
        self.fluxes.nrows()
    }

    pub fn epochs(&self) -> usize {
        self.fluxes.ncols()
    }

    /// Compute the requested per-epoch statistics across realizations.
    ///
    /// Standard deviations are population (divide by n) so a one-realization
    /// ensemble reports 0 rather than NaN.
    pub fn summarize(&self, flags: SummaryConfig) -> EnsembleSummary {
        let n = self.realizations() as f64;
        let columns: Vec<Vec<f64>> = (0..self.epochs())
            .map(|j| self.fluxes.column(j).to_vec())
            .collect();

        let mean = flags.contains(SummaryConfig::MEAN).then(|| {
            columns
                .par_iter()
                .map(|c| c.iter().sum::<f64>() / n)
                .collect::<Vec<f64>>()
        });

        let median = flags.contains(SummaryConfig::MEDIAN).then(|| {
            columns
                .par_iter()
                .map(|c| {
                    let mut data = Data::new(c.clone());
                    data.median()
                })
                .collect::<Vec<f64>>()
        });

        let stddev = flags.contains(SummaryConfig::STDDEV).then(|| {
            columns
                .par_iter()
                .map(|c| {
                    let mean_c = c.iter().sum::<f64>() / n;
                    let variance = c.iter().map(|&f| (f - mean_c).powi(2)).sum::<f64>() / n;
                    variance.sqrt()
                })
                .collect::<Vec<f64>>()
        });

        EnsembleSummary {
            mean,
            median,
            stddev,
        }
    }
}
