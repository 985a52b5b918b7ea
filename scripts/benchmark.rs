// scripts/benchmark.rs
use lightcurve_mc::context::SimContext;
use lightcurve_mc::mc::{simulate_ensemble, EnsembleConfig, SummaryConfig};
use lightcurve_mc::models::{DampedRandomWalk, DeterministicModel, SimpleGp, SineWave, StochasticModel};
use std::fs::File;
use std::io::Write;
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    epochs: usize,
    realizations: usize,
    time_ms: f64,
    throughput_samples_per_sec: f64,
}

fn cadence(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 0.1).collect()
}

fn bench<F>(name: &str, epochs: usize, realizations: usize, run: F) -> BenchmarkResult
where
    F: FnOnce(),
{
    let start = Instant::now();
    run();
    let time_ms = start.elapsed().as_secs_f64() * 1000.0;
    let samples = (epochs * realizations) as f64;

    BenchmarkResult {
        name: name.to_string(),
        epochs,
        realizations,
        time_ms,
        throughput_samples_per_sec: samples / (time_ms / 1000.0),
    }
}

fn run_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let cfg = EnsembleConfig {
        realizations: 1000,
        summaries: SummaryConfig::MEAN | SummaryConfig::MEDIAN | SummaryConfig::STDDEV,
    };

    for &epochs in &[100usize, 500, 1000] {
        let times = cadence(epochs);

        println!("Benchmarking sine ensemble over {} epochs...", epochs);
        results.push(bench("SineWave ensemble", epochs, cfg.realizations, || {
            let ensemble = simulate_ensemble(&cfg, |_| {
                DeterministicModel::new(&times, SineWave::new(0.5, 3.0, 0.25)?)
            })
            .expect("Valid configuration");
            ensemble.summarize(cfg.summaries);
        }));

        println!("Benchmarking damped-random-walk ensemble over {} epochs...", epochs);
        let context = SimContext::with_seed(42);
        results.push(bench(
            "DampedRandomWalk ensemble",
            epochs,
            cfg.realizations,
            || {
                let ensemble = simulate_ensemble(&cfg, |_| {
                    StochasticModel::new(
                        &times,
                        DampedRandomWalk::new(0.3, 5.0)?,
                        Rc::clone(&context),
                    )
                })
                .expect("Valid configuration");
                ensemble.summarize(cfg.summaries);
            },
        ));
    }

    // The GP realization is O(n³) per instance, so keep the cadence short.
    let gp_cfg = EnsembleConfig {
        realizations: 100,
        summaries: SummaryConfig::MEDIAN,
    };
    for &epochs in &[50usize, 100, 200] {
        let times = cadence(epochs);
        println!("Benchmarking Gaussian-process ensemble over {} epochs...", epochs);
        let context = SimContext::with_seed(42);
        results.push(bench("SimpleGp ensemble", epochs, gp_cfg.realizations, || {
            let ensemble = simulate_ensemble(&gp_cfg, |_| {
                StochasticModel::new(&times, SimpleGp::new(0.4, 2.0)?, Rc::clone(&context))
            })
            .expect("Valid configuration");
            ensemble.summarize(gp_cfg.summaries);
        }));
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    writeln!(file, "# CPU Cores: {}", num_cpus::get()).unwrap();
    writeln!(file, "# Rayon Threads: {}", rayon::current_num_threads()).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    writeln!(
        file,
        "Benchmark,Epochs,Realizations,Time_ms,Throughput_samples_per_sec"
    )
    .unwrap();
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0}",
            result.name,
            result.epochs,
            result.realizations,
            result.time_ms,
            result.throughput_samples_per_sec
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("lightcurve-mc Benchmark Suite");
    println!("=============================\n");
    println!("CPU Cores: {}", num_cpus::get());
    println!("Rayon Threads: {}\n", rayon::current_num_threads());

    let results = run_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<30} {:>8} {:>14} {:>12} {:>14}",
        "Benchmark", "Epochs", "Realizations", "Time (ms)", "Samples/sec"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<30} {:>8} {:>14} {:>12.2} {:>14.0}",
            result.name,
            result.epochs,
            result.realizations,
            result.time_ms,
            result.throughput_samples_per_sec
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &filename);
}
