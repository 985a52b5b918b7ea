//! # lightcurve-mc: Monte Carlo Simulation of Astronomical Light Curves
//!
//! A Rust library for generating synthetic light curves — brightness time
//! series of astronomical sources — over arbitrary observation cadences,
//! with deterministic shapes and stochastic processes driven by a shared,
//! reproducible random stream.
//!
//! ## Key Features
//!
//! - **Reproducible Randomness**: A fixed seed plus a fixed model
//!   construction/request order replays bit-identical realizations
//! - **Transactional Streams**: Realizations draw from a private snapshot of
//!   the canonical stream and commit it only on success, so failures never
//!   perturb the global draw order
//! - **At-Most-Once Realization**: Stochastic models compute once and cache;
//!   deterministic models recompute cheaply on every call
//! - **Shape Catalog**: Sinusoid, flare, white noise, damped random walk,
//!   and squared-exponential Gaussian process
//! - **Ensemble Driver**: Repeated realizations with per-epoch summary
//!   statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use lightcurve_mc::context::SimContext;
//! use lightcurve_mc::models::{DampedRandomWalk, LightCurve, StochasticModel};
//!
//! // One canonical stream shared by every stochastic model
//! let context = SimContext::with_seed(42);
//!
//! let times = vec![0.0, 1.5, 3.0, 4.5, 6.0];
//! let process = DampedRandomWalk::new(0.3, 2.0).expect("valid parameters");
//! let curve = StochasticModel::new(&times, process, context).expect("valid cadence");
//!
//! // Realized once, cached thereafter
//! let fluxes = curve.fluxes().expect("realization succeeds");
//! assert_eq!(fluxes.len(), curve.size());
//! assert!(fluxes.iter().all(|&f| f >= 0.0));
//! ```
//!
//! ## Evaluation Disciplines
//!
//! Every model exposes the same contract (times, fluxes, size) through the
//! [`models::LightCurve`] capability, with exactly two evaluation
//! disciplines behind it: pure function sampling
//! ([`models::DeterministicModel`]) and stochastic-process realization
//! ([`models::StochasticModel`]) against the checkout/commit protocol of
//! [`context::SimContext`].

// Module declarations
pub mod context;
pub mod error;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{LcError, LcResult};
