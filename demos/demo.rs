// demos/demo.rs
//! End-to-end tour: build a deterministic curve, realize a stochastic
//! ensemble against one shared stream, and write the results to CSV.

use lightcurve_mc::context::SimContext;
use lightcurve_mc::mc::{simulate_ensemble, EnsembleConfig, SummaryConfig};
use lightcurve_mc::models::{
    DampedRandomWalk, DeterministicModel, LightCurve, SineWave, StochasticModel,
};
use lightcurve_mc::output;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Nightly cadence: 200 epochs, half a day apart.
    let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();

    // A deterministic sinusoid, recomputed on every request.
    let sine = DeterministicModel::new(&times, SineWave::new(0.5, 12.0, 0.0)?)?;
    let sine_fluxes = sine.fluxes()?;
    println!(
        "Sine curve: {} epochs, first fluxes = {:.4}, {:.4}, {:.4}",
        sine.size(),
        sine_fluxes[0],
        sine_fluxes[1],
        sine_fluxes[2]
    );
    output::write_curve_to_csv("sine_curve.csv", &times, &sine_fluxes)?;

    // A damped-random-walk ensemble sharing one canonical stream. Each
    // realization checks out, draws, and commits in sequence, so rerunning
    // this demo reproduces the same ensemble bit for bit.
    let context = SimContext::with_seed(42);
    let cfg = EnsembleConfig {
        realizations: 500,
        summaries: SummaryConfig::MEAN | SummaryConfig::MEDIAN | SummaryConfig::STDDEV,
    };

    let ensemble = simulate_ensemble(&cfg, |_| {
        StochasticModel::new(&times, DampedRandomWalk::new(0.3, 10.0)?, Rc::clone(&context))
    })?;
    let summary = ensemble.summarize(cfg.summaries);

    if let (Some(median), Some(stddev)) = (&summary.median, &summary.stddev) {
        println!(
            "DRW ensemble: {} realizations x {} epochs, median flux[0] = {:.4}, stddev[0] = {:.4}",
            ensemble.realizations(),
            ensemble.epochs(),
            median[0],
            stddev[0]
        );
    }

    output::write_summary_to_csv("drw_ensemble_summary.csv", ensemble.times(), &summary)?;
    println!("Wrote sine_curve.csv and drw_ensemble_summary.csv");

    Ok(())
}
