//! Comparison sweep example.
//!
//! Runs every algorithm over sizes 50..1000 for integers and floats and
//! prints one table per element type plus the per-algorithm time series.
//!
//! Usage: `cargo run --release --example compare_sweep [seed]`

use sortviz_bench::{run_sweep, ElementKind, SweepConfig};

fn main() {
    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok());
    let config = SweepConfig {
        seed,
        ..SweepConfig::default()
    };

    let report = match run_sweep(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("sweep failed: {e}");
            std::process::exit(1);
        }
    };

    println!("=== sortviz comparison sweep (seed {}) ===", report.seed);
    for kind in [ElementKind::Int, ElementKind::Float] {
        println!("\n[{kind}]");
        println!(
            "{:<10} {:>6} {:>10} {:>10} {:>10} {:>6}",
            "algorithm", "size", "time(s)", "ops", "swaps", "depth"
        );
        for m in report.results(kind) {
            println!("{m}");
        }
    }

    println!("\nTime series (int, microseconds):");
    for (algo, points) in report.by_algorithm(ElementKind::Int) {
        let series: Vec<String> = points
            .iter()
            .map(|m| format!("{}:{}", m.input_size(), m.elapsed().as_micros()))
            .collect();
        println!("  {:<10} {}", algo.name(), series.join("  "));
    }
}
