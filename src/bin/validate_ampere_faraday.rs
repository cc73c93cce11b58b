// SPDX-License-Identifier: AGPL-3.0-only

//! Ampère/Faraday consistency validation.
//!
//! The simulator seeds `B_z = sin(2π(x−x₀)/L)` on a periodic domain and
//! computes `j_y = (∇×B)_y`. The analytic oracle is the exact curl
//! `−(2π/L)·cos(2π(x−x₀)/L)`, evaluated pointwise over the dataset's own
//! grid; the check is the maximum absolute deviation over the whole
//! profile.
//!
//! Dataset: `--data=PATH` (default `datasets/sin_bz.json`) with arrays
//! `x`, `bz`, `jy`. Artifacts: `{scenario}.csv` under `--plots-dir`
//! (default `plots/`), suppressed by `--no-artifacts`.
//!
//! Exit code 0 = check passes, 1 = tolerance failure, 2 = harness error.

use std::path::Path;
use std::process;

use picvalid::data::{load_sample, parse_cli_str};
use picvalid::provenance::{self, AMPERE_JY_PEAK};
use picvalid::scenario::{run_scenario, ScenarioSpec};
use picvalid::sink::{CsvSink, DiagnosticSink, NullSink};

fn main() {
    let spec = ScenarioSpec::ampere_faraday();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Ampère/Faraday Consistency Validation                       ║");
    println!("║  j_y vs exact curl of sinusoidal B_z                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    provenance::print_baselines(&[&AMPERE_JY_PEAK]);

    let args: Vec<String> = std::env::args().collect();
    let data_path = parse_cli_str(&args, "--data", "datasets/sin_bz.json");
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
