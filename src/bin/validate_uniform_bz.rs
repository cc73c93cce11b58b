// SPDX-License-Identifier: AGPL-3.0-only

//! Cyclotron closure validation — particle pusher in a uniform B_z.
//!
//! A particle starting at x=5.05 with v=(0, 2, 0) in Bz=1, q/m=1 gyrates;
//! after exactly 8 gyroperiods the analytic solution returns it to its
//! initial state. The terminal x, vx, vy, vz of the simulated trajectory
//! are each held against that ideal within an absolute tolerance.
//!
//! Dataset: `--data=PATH` (default `datasets/uniform_bz.json`) with step
//! series `x`, `vx`, `vy`, `vz`. Artifacts under `--plots-dir` (default
//! `plots/`), suppressed by `--no-artifacts`.
//!
//! Exit code 0 = all checks pass, 1 = any failure, 2 = harness error.

use std::path::Path;
use std::process;

use picvalid::data::{load_sample, parse_cli_str};
use picvalid::provenance::{self, UNIFORM_BZ_BASELINES};
use picvalid::scenario::{run_scenario, ScenarioSpec};
use picvalid::sink::{CsvSink, DiagnosticSink, NullSink};

fn main() {
    let spec = ScenarioSpec::uniform_bz();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Uniform B_z Validation — cyclotron closure                  ║");
    println!("║  terminal state vs analytic gyration, t = 8 gyroperiods      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    provenance::print_baselines(&[
        &UNIFORM_BZ_BASELINES[0],
        &UNIFORM_BZ_BASELINES[1],
        &UNIFORM_BZ_BASELINES[2],
        &UNIFORM_BZ_BASELINES[3],
    ]);

    let args: Vec<String> = std::env::args().collect();
    let data_path = parse_cli_str(&args, "--data", "datasets/uniform_bz.json");
    let plots_dir = parse_cli_str(&args, "--plots-dir", "plots");
    let no_artifacts = args.iter().any(|a| a == "--no-artifacts");

    println!("  Dataset: {data_path}");
    let sample = match load_sample(Path::new(&data_path)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(2);
        }
    };

    let mut csv = CsvSink::new(&plots_dir);
    let mut null = NullSink;
    let sink: &mut dyn DiagnosticSink = if no_artifacts { &mut null } else { &mut csv };

    match run_scenario(&spec, &sample, sink) {
        Ok(verdict) => verdict.finish(),
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(2);
        }
    }
}
