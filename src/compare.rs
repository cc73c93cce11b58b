// SPDX-License-Identifier: AGPL-3.0-only

//! Tolerance comparison and verdict aggregation.
//!
//! One comparison, one verdict: every check reduces a (simulated, ideal,
//! tolerance) triple to a signed deviation and a boolean, deterministically.
//! There is no retry and no statistical smoothing anywhere in this module.
//!
//! Tolerances are ABSOLUTE and applied with a strict `<`; see
//! [`within_tolerance`] for the exact rule. A failed check is a normal
//! outcome carried in the [`Verdict`], never an error.

use crate::error::HarnessError;
use std::fmt;

/// Which deviation statistic a check records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviationMetric {
    /// Signed difference of two terminal scalars.
    FinalValue,
    /// Maximum absolute pointwise deviation over a whole profile; the check
    /// records the signed delta at the worst grid point.
    MaxAbsProfile,
}

impl fmt::Display for DeviationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FinalValue => write!(f, "final"),
            Self::MaxAbsProfile => write!(f, "profile max"),
        }
    }
}

/// A single comparison with result tracking.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label (the tracked quantity, e.g. "x" or "j_y")
    pub label: String,
    /// Simulated value (terminal scalar, or profile value at the worst point)
    pub simulated: f64,
    /// Analytic ideal at the same point
    pub ideal: f64,
    /// Signed deviation `simulated − ideal`
    pub delta: f64,
    /// Absolute tolerance the deviation was held against
    pub tolerance: f64,
    /// Whether this check passed
    pub passed: bool,
    /// Deviation statistic used
    pub metric: DeviationMetric,
}

/// The absolute-tolerance pass rule: `delta == 0 || |delta| < tolerance`.
///
/// Strict `<`, so a nonzero deviation exactly equal to the tolerance fails.
/// A deviation of exactly zero passes at any tolerance ≥ 0, including zero —
/// self-comparison is always a pass.
#[must_use]
pub fn within_tolerance(delta: f64, tolerance: f64) -> bool {
    delta == 0.0 || delta.abs() < tolerance
}

/// Compare a simulated terminal scalar against its analytic ideal.
#[must_use]
pub fn scalar_check(label: &str, simulated: f64, ideal: f64, tolerance: f64) -> Check {
    let delta = simulated - ideal;
    Check {
        label: label.to_string(),
        simulated,
        ideal,
        delta,
        tolerance,
        passed: within_tolerance(delta, tolerance),
        metric: DeviationMetric::FinalValue,
    }
}

/// Compare a simulated profile against its analytic prediction pointwise.
///
/// The summary statistic is the maximum absolute deviation over the whole
/// sequence; the returned check records the signed delta (and both values)
/// at the worst grid point.
///
/// # Errors
///
/// `StructuralMismatch` if the sequences differ in length or are empty.
pub fn profile_check(
    label: &str,
    simulated: &[f64],
    analytic: &[f64],
    tolerance: f64,
) -> Result<Check, HarnessError> {
    if simulated.len() != analytic.len() {
        return Err(HarnessError::StructuralMismatch(format!(
            "{label}: simulated has {} points, analytic has {}",
            simulated.len(),
            analytic.len()
        )));
    }
    if simulated.is_empty() {
        return Err(HarnessError::StructuralMismatch(format!(
            "{label}: cannot compare empty sequences"
        )));
    }
    let mut worst = 0usize;
    let mut worst_abs = -1.0f64;
    for (i, (&s, &a)) in simulated.iter().zip(analytic.iter()).enumerate() {
        let abs = (s - a).abs();
        if abs > worst_abs {
            worst_abs = abs;
            worst = i;
        }
    }
    let delta = simulated[worst] - analytic[worst];
    Ok(Check {
        label: label.to_string(),
        simulated: simulated[worst],
        ideal: analytic[worst],
        delta,
        tolerance,
        passed: within_tolerance(delta, tolerance),
        metric: DeviationMetric::MaxAbsProfile,
    })
}

/// Accumulated checks for one scenario, with the aggregate verdict.
///
/// Aggregate pass = logical AND over all checks. Every component's signed
/// delta is surfaced in the summary regardless of the aggregate outcome, so
/// a failing scenario still shows which physical quantity diverged.
#[derive(Debug, Default)]
#[must_use]
pub struct Verdict {
    /// Scenario tag this verdict belongs to
    pub scenario: String,
    /// All checks performed, in invocation order
    pub checks: Vec<Check>,
}

impl Verdict {
    /// Create an empty verdict for a named scenario.
    pub fn new(scenario: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            checks: Vec::new(),
        }
    }

    /// Add a terminal-scalar check.
    pub fn check_scalar(&mut self, label: &str, simulated: f64, ideal: f64, tolerance: f64) {
        self.checks.push(scalar_check(label, simulated, ideal, tolerance));
    }

    /// Add a profile check.
    ///
    /// # Errors
    ///
    /// `StructuralMismatch` if the sequences differ in length or are empty.
    pub fn check_profile(
        &mut self,
        label: &str,
        simulated: &[f64],
        analytic: &[f64],
        tolerance: f64,
    ) -> Result<(), HarnessError> {
        self.checks
            .push(profile_check(label, simulated, analytic, tolerance)?);
        Ok(())
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed (vacuously true for an empty verdict).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Process exit code this verdict maps to: 0 all pass, 1 any failure.
    ///
    /// Kept separate from the report text so CI wiring is testable on its
    /// own.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Format the summary block.
    #[must_use]
    pub fn render(&self) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.scenario,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: simulated={:.6e}, ideal={:.6e}, Δ={:+.6e}, tol={:.2e} ({})",
                check.label, check.simulated, check.ideal, check.delta, check.tolerance,
                check.metric
            );
        }
        if self.all_passed() {
            let _ = writeln!(s, "PASS");
        } else {
            let failed: Vec<&str> = self
                .checks
                .iter()
                .filter(|c| !c.passed)
                .map(|c| c.label.as_str())
                .collect();
            let _ = writeln!(s, "FAIL: {}", failed.join(", "));
        }
        s
    }

    /// Print the summary block to stdout.
    pub fn print_summary(&self) {
        println!();
        print!("{}", self.render());
    }

    /// Print the summary and exit with the verdict's code.
    pub fn finish(&self) -> ! {
        self.print_summary();
        std::process::exit(self.exit_code());
    }
}
