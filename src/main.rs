use std::env;

use glucose_trend_sim::invariants;
use glucose_trend_sim::simulator;

fn main() {
    let args: Vec<String> = env::args().collect();

    let max_steps: usize = parse_flag(&args, "--max-steps").unwrap_or(20);
    let max_samples: usize = parse_flag(&args, "--max-samples").unwrap_or(10000);
    let seed: u64 = parse_flag(&args, "--seed").unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    println!("Glucose Trend Simulator");
    println!("=======================");
    println!();
    println!(
        "Running {} traces of {} steps each (seed: {})",
        max_samples, max_steps, seed
    );
    if verbose {
        println!("Verbose mode: showing first trace\n");
    }

    println!("Checking invariants:");
    for (name, _) in invariants::ALL_INVARIANTS {
        println!("  - {}", name);
    }

    let result = simulator::run_simulation(max_steps, max_samples, seed, verbose);
    println!("{}", result);
}

/// Look up `flag` (as `--flag value` or `--flag=value`) and parse its value.
/// An unparseable value is reported and treated as absent, so the caller's
/// default applies.
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let mut found: Option<&str> = None;
    for (i, arg) in args.iter().enumerate() {
        if let Some(rest) = arg.strip_prefix(flag) {
            if let Some(value) = rest.strip_prefix('=') {
                found = Some(value);
                break;
            }
            if rest.is_empty() {
                found = args.get(i + 1).map(String::as_str);
                break;
            }
        }
    }

    let raw = found?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("warning: ignoring bad value {:?} for {}, using default", raw, flag);
            None
        }
    }
}
