// src/mc/mod.rs
pub mod engine;

pub use engine::{simulate_ensemble, Ensemble, EnsembleConfig, EnsembleSummary, SummaryConfig};
