//! Step-through example.
//!
//! Parses a comma-separated list of numbers, records a trace and walks it
//! forward with a cursor, printing each step and marking highlighted
//! positions. Finishes with the metrics record for the same input and a
//! cross-check that both engines agree.
//!
//! Usage: `cargo run --example step_through -- [algorithm] ["5, 3, 8, 1"]`

use sortviz_core::{parse_values, Algorithm, SortOperation};
use sortviz_metrics::run_metrics;
use sortviz_trace::{check_agreement, run_trace, TraceCursor};

fn render(step: &SortOperation<f64>) -> String {
    step.array
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if step.is_highlighted(i) {
                format!("[{v}]")
            } else {
                format!(" {v} ")
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

fn main() {
    let mut args = std::env::args().skip(1);
    let algorithm = match args.next().map(|s| s.parse::<Algorithm>()) {
        Some(Ok(algorithm)) => algorithm,
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        None => Algorithm::BubbleSort,
    };
    let text = args.next().unwrap_or_else(|| "5, 3, 8, 1".to_string());

    let values: Vec<f64> = parse_values(&text);
    if values.is_empty() {
        println!("no numbers in {text:?}; nothing to sort");
        return;
    }

    let trace = run_trace(algorithm, &values);
    let mut cursor = TraceCursor::new(&trace);
    println!("=== {algorithm}: {} steps ===", trace.len());
    loop {
        let step = cursor.current();
        println!(
            "{:>4}  {:<40} {}",
            cursor.position(),
            render(step),
            step.description
        );
        if !cursor.advance() {
            break;
        }
    }

    let metrics = run_metrics(algorithm, &values);
    println!("\n{metrics}");
    match check_agreement(&metrics, &trace) {
        Ok(()) => println!("trace and metrics agree"),
        Err(e) => println!("DISAGREEMENT: {e}"),
    }
}
