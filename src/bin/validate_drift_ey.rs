// SPDX-License-Identifier: AGPL-3.0-only

//! E×B drift validation — particle pusher in uniform Ey and Bz.
//!
//! A particle starting at rest at x=50 in Ey=0.1, Bz=1, q/m=1 drifts at
//! `v_d = Ey/Bz` along x while its velocity closes each gyroperiod. After
//! 10 gyroperiods the analytic endpoint is x₀ + v_d·t with the velocity
//! back at zero. Terminal x, vx, vy, vz are each held against that ideal.
//!
//! Dataset: `--data=PATH` (default `datasets/drift_ey.json`) with step
//! series `x`, `vx`, `vy`, `vz`. Artifacts under `--plots-dir` (default
//! `plots/`), suppressed by `--no-artifacts`.
//!
//! Exit code 0 = all checks pass, 1 = any failure, 2 = harness error.

use std::path::Path;
use std::process;

use picvalid::data::{load_sample, parse_cli_str};
use picvalid::provenance::{self, DRIFT_EY_BASELINES};
use picvalid::scenario::{run_scenario, ScenarioSpec};
use picvalid::sink::{CsvSink, DiagnosticSink, NullSink};

fn main() {
    let spec = ScenarioSpec::drift_ey();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  E×B Drift Validation — uniform Ey, Bz                       ║");
    println!("║  terminal state vs drift endpoint, t = 10 gyroperiods        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    provenance::print_baselines(&[
        &DRIFT_EY_BASELINES[0],
        &DRIFT_EY_BASELINES[1],
        &DRIFT_EY_BASELINES[2],
        &DRIFT_EY_BASELINES[3],
    ]);

    let args: Vec<String> = std::env::args().collect();
    let data_path = parse_cli_str(&args, "--data", "datasets/drift_ey.json");
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
