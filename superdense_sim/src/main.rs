//! Superdense Coding Demo
//!
//! Runs the protocol for a two-bit message and prints the simulation report
//! as JSON.
//!
//! Usage: superdense <message> [--eve] [--shots N] [--seed S]
//!   message   one of 00, 01, 10, 11
//!   --eve     simulate the eavesdropped channel as well
//!   --shots   measurement shots per run (default 1024)
//!   --seed    fix the random seed for reproducible output

use std::env;
use std::process;

use superdense_sim::{simulate, SimulationConfig};

fn main() {
    env_logger::init();

    if let Err(message) = run() {
        eprintln!("error: {message}");
        eprintln!("usage: superdense <00|01|10|11> [--eve] [--shots N] [--seed S]");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let message = args.next().ok_or("missing message argument")?;

    let mut include_eve = false;
    let mut config = SimulationConfig::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--eve" => include_eve = true,
            "--shots" => {
                let value = args.next().ok_or("--shots requires a value")?;
                let shots: usize = value
                    .parse()
                    .map_err(|_| format!("invalid shot count {value:?}"))?;
                config = config.with_shots(shots);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                let seed: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid seed {value:?}"))?;
                config = config.with_seed(seed);
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }

    let report = simulate(&message, include_eve, &config).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
