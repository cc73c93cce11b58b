// SPDX-License-Identifier: AGPL-3.0-only

//! Scenario registry and runner.
//!
//! A scenario is one named physical test case: the field identifiers its
//! dataset must carry, the analytic model that predicts its outcome, and the
//! tolerance the comparison is held to. The registry makes the supported
//! scenarios enumerable and testable independent of any driver binary.
//!
//! | Tag | Kind | Checks |
//! |-----|------|--------|
//! | `ampere_faraday` | field profile | `jy` vs curl of the seeded B_z |
//! | `uniform_bz` | final state | x, vx, vy, vz vs cyclotron closure |
//! | `drift_ey` | final state | x, vx, vy, vz vs E×B drift endpoint |
//!
//! Each invocation is stateless and independent; scenarios may run in any
//! order or in parallel (filesystem side effects go through the injected
//! sink and never feed back into a verdict).

use crate::analytic::{FieldProfile, ParticleState};
use crate::compare::Verdict;
use crate::data::SimulationSample;
use crate::error::HarnessError;
use crate::provenance;
use crate::sink::{DiagnosticSink, Series};
use crate::tolerances;

/// What a scenario validates and which analytic family predicts it.
#[derive(Debug, Clone, Copy)]
pub enum ScenarioKind {
    /// Steady-state spatial solution: `observed_field` over `grid_field`
    /// against a closed-form profile.
    FieldProfile {
        /// Identifier of the spatial grid array
        grid_field: &'static str,
        /// Identifier of the validated field array
        observed_field: &'static str,
        /// Closed-form prediction
        profile: FieldProfile,
        /// Explicit domain bounds; `None` derives them from the grid
        /// endpoints, matching the simulator's periodic domain.
        bounds: Option<(f64, f64)>,
    },
    /// Trajectory endpoint: terminal x, vx, vy, vz against an ideal state.
    FinalState {
        /// Analytic endpoint the trajectory must land on
        ideal: ParticleState,
    },
}

/// One named, parameterized physical test case.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSpec {
    /// Registry tag; also the dataset stem and artifact name
    pub tag: &'static str,
    /// Human-readable title for banners
    pub title: &'static str,
    /// Field identifiers the dataset must provide, all of one length
    pub required_fields: &'static [&'static str],
    /// Analytic family and its parameters
    pub kind: ScenarioKind,
    /// Absolute tolerance for every check in this scenario
    pub tolerance: f64,
}

impl ScenarioSpec {
    /// Ampère/Faraday consistency: the field solver's `j_y = (∇×B)_y` for a
    /// seeded sinusoidal B_z, compared pointwise over the whole domain.
    #[must_use]
    pub fn ampere_faraday() -> Self {
        Self {
            tag: "ampere_faraday",
            title: "Ampère/Faraday consistency — sinusoidal B_z",
            required_fields: &["x", "bz", "jy"],
            kind: ScenarioKind::FieldProfile {
                grid_field: "x",
                observed_field: "jy",
                profile: FieldProfile::SinusoidalCurrent {
                    amplitude: provenance::AMPERE_BZ_AMPLITUDE,
                },
                bounds: None,
            },
            tolerance: tolerances::FIELD_PROFILE_MAX_ABS_DEV,
        }
    }

    /// Cyclotron closure in a uniform B_z: after an integer number of
    /// gyroperiods the particle returns to its initial state.
    #[must_use]
    pub fn uniform_bz() -> Self {
        Self {
            tag: "uniform_bz",
            title: "Uniform B_z — cyclotron closure",
            required_fields: &["x", "vx", "vy", "vz"],
            kind: ScenarioKind::FinalState {
                ideal: provenance::UNIFORM_BZ_IDEAL_STATE,
            },
            tolerance: tolerances::FINAL_STATE_ABS,
        }
    }

    /// E×B drift in uniform Ey and Bz: the guiding center advances by
    /// `(Ey/Bz)·t` while the velocity closes each gyroperiod.
    #[must_use]
    pub fn drift_ey() -> Self {
        Self {
            tag: "drift_ey",
            title: "E×B drift — uniform Ey, Bz",
            required_fields: &["x", "vx", "vy", "vz"],
            kind: ScenarioKind::FinalState {
                ideal: provenance::DRIFT_EY_IDEAL_STATE,
            },
            tolerance: tolerances::FINAL_STATE_ABS,
        }
    }

    /// Every supported scenario, in registry order.
    #[must_use]
    pub fn registry() -> Vec<Self> {
        vec![Self::ampere_faraday(), Self::uniform_bz(), Self::drift_ey()]
    }

    /// Look a scenario up by tag.
    #[must_use]
    pub fn by_tag(tag: &str) -> Option<Self> {
        Self::registry().into_iter().find(|s| s.tag == tag)
    }
}

/// Run one scenario against an already-loaded sample.
///
/// Sequencing: structural validation first (no partial verdict on a broken
/// dataset), then the analytic reference, then one comparison per tracked
/// quantity, then diagnostics. A sink failure is reported on stderr and
/// never affects the verdict.
///
/// # Errors
///
/// `DataAccess` for a missing identifier, `StructuralMismatch` for
/// inconsistent or empty arrays, `InvalidParameter` if the analytic model
/// rejects the scenario parameters.
pub fn run_scenario(
    spec: &ScenarioSpec,
    sample: &SimulationSample,
    sink: &mut dyn DiagnosticSink,
) -> Result<Verdict, HarnessError> {
    let n = sample.require(spec.required_fields)?;
    let mut verdict = Verdict::new(spec.tag);

    match spec.kind {
        ScenarioKind::FieldProfile {
            grid_field,
            observed_field,
            profile,
            bounds,
        } => {
            let grid = sample.field(grid_field)?;
            if n == 0 {
                return Err(HarnessError::InvalidParameter(format!(
                    "scenario '{}' requires a non-empty spatial grid",
                    spec.tag
                )));
            }
            let (x_start, x_end) = bounds.unwrap_or((grid[0], grid[n - 1]));
            let analytic = profile.evaluate(grid, x_start, x_end)?;
            let observed = sample.field(observed_field)?;
            verdict.check_profile(observed_field, observed, &analytic, spec.tolerance)?;

            let mut series = Vec::with_capacity(spec.required_fields.len() + 1);
            for &name in spec.required_fields {
                series.push(Series {
                    name,
                    values: sample.field(name)?,
                });
            }
            let predicted_name = format!("{observed_field}_pred");
            series.push(Series {
                name: &predicted_name,
                values: &analytic,
            });
            emit_or_warn(sink, spec.tag, &series);
        }
        ScenarioKind::FinalState { ideal } => {
            for (name, ideal_component) in ideal.components() {
                let simulated = sample.final_value(name)?;
                verdict.check_scalar(name, simulated, ideal_component, spec.tolerance);
            }

            let mut series = Vec::with_capacity(spec.required_fields.len());
            for &name in spec.required_fields {
                series.push(Series {
                    name,
                    values: sample.field(name)?,
                });
            }
            emit_or_warn(sink, spec.tag, &series);
        }
    }

    Ok(verdict)
}

fn emit_or_warn(sink: &mut dyn DiagnosticSink, tag: &str, series: &[Series<'_>]) {
    if let Err(e) = sink.emit(tag, series) {
        eprintln!("  WARNING: diagnostic artifact for '{tag}' not written: {e}");
    }
}
