// SPDX-License-Identifier: AGPL-3.0-only

//! Meta-validator: runs every registry scenario with a dataset present.
//!
//! Datasets are looked up as `{data-dir}/{tag}.json`; scenarios without one
//! are SKIPped. Scenarios share no state, so they are evaluated in parallel;
//! reports are printed in registry order afterwards.
//!
//! | Tag | Checks |
//! |-----|--------|
//! | `ampere_faraday` | j_y profile vs exact curl |
//! | `uniform_bz` | terminal state vs cyclotron closure |
//! | `drift_ey` | terminal state vs E×B drift endpoint |
//!
//! Exit code 0 only if no executed scenario failed or errored.

use std::path::Path;
use std::process;

use rayon::prelude::*;

use picvalid::data::{load_sample, parse_cli_str};
use picvalid::scenario::{run_scenario, ScenarioSpec};
use picvalid::sink::{CsvSink, DiagnosticSink, NullSink};

enum Outcome {
    Pass(String),
    Fail(String),
    Skip,
    Error(String),
}

fn evaluate(spec: &ScenarioSpec, data_dir: &Path, plots_dir: &str, no_artifacts: bool) -> Outcome {
    let path = data_dir.join(format!("{}.json", spec.tag));
    if !path.is_file() {
        return Outcome::Skip;
    }
    let sample = match load_sample(&path) {
        Ok(s) => s,
        Err(e) => return Outcome::Error(e.to_string()),
    };
    // Per-scenario sink instances: nothing shared across the parallel runs.
    let mut csv = CsvSink::new(plots_dir);
    let mut null = NullSink;
    let sink: &mut dyn DiagnosticSink = if no_artifacts { &mut null } else { &mut csv };
    match run_scenario(spec, &sample, sink) {
        Ok(verdict) if verdict.all_passed() => Outcome::Pass(verdict.render()),
        Ok(verdict) => Outcome::Fail(verdict.render()),
        Err(e) => Outcome::Error(e.to_string()),
    }
}

fn main() {
    println!("═══════════════════════════════════════════════════════════");
    println!("  picvalid — All Scenarios");
    println!("  analytic reference vs simulator output");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let args: Vec<String> = std::env::args().collect();
    let data_dir = parse_cli_str(&args, "--data-dir", "datasets");
    let plots_dir = parse_cli_str(&args, "--plots-dir", "plots");
    let no_artifacts = args.iter().any(|a| a == "--no-artifacts");

    let specs = ScenarioSpec::registry();
    let data_dir = Path::new(&data_dir);

    let outcomes: Vec<(&'static str, &'static str, Outcome)> = specs
        .par_iter()
        .map(|spec| {
            (
                spec.tag,
                spec.title,
                evaluate(spec, data_dir, &plots_dir, no_artifacts),
            )
        })
        .collect();

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut skipped = 0usize;
    let mut errored = 0usize;
    let mut failures: Vec<&str> = Vec::new();

    for (tag, title, outcome) in &outcomes {
        match outcome {
            Outcome::Pass(report) => {
                println!("  PASS  {title}");
                print!("{report}");
                println!();
                passed += 1;
            }
            Outcome::Fail(report) => {
                println!("  FAIL  {title}");
                print!("{report}");
                println!();
                failed += 1;
                failures.push(*tag);
            }
            Outcome::Skip => {
                println!("  SKIP  {title} (no dataset {tag}.json)");
                skipped += 1;
            }
            Outcome::Error(msg) => {
                println!("  ERROR {title}: {msg}");
                errored += 1;
                failures.push(*tag);
            }
        }
    }

    println!("═══════════════════════════════════════════════════════════");
    println!("  TOTAL: {passed} passed, {failed} failed, {errored} errored, {skipped} skipped");
    if !failures.is_empty() {
        println!("  FAILURES: {}", failures.join(", "));
    }

    if failed == 0 && errored == 0 {
        println!("  ALL EXECUTED SCENARIOS PASSED");
        process::exit(0);
    } else {
        println!("  SOME SCENARIOS FAILED");
        process::exit(1);
    }
}
