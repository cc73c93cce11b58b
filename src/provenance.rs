// SPDX-License-Identifier: AGPL-3.0-only

//! Analytic baselines behind every hardcoded expected value.
//!
//! Every ideal value a validation binary checks against traces back to a
//! closed-form derivation with named parameters. This module centralizes
//! that metadata so the binaries carry machine-readable provenance and the
//! scenario registry has a single source of truth for its literals.
//!
//! The literals are frozen here rather than recomputed at scenario-build
//! time; `analytic` re-derives them and the tests in this module assert the
//! two agree, so the constants cannot drift from the physics.

use crate::analytic::ParticleState;

/// A single baseline record tying a hardcoded ideal value to its
/// closed-form origin.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticBaseline {
    /// Human-readable label (e.g. "uniform_bz ideal final x")
    pub label: &'static str,
    /// Closed-form expression the value comes from
    pub formula: &'static str,
    /// Parameter values substituted into the formula
    pub parameters: &'static str,
    /// The ideal value itself
    pub value: f64,
    /// Unit or description of the value (simulation units throughout)
    pub unit: &'static str,
}

/// Print baseline records in the standard pre-run block.
pub fn print_baselines(baselines: &[&AnalyticBaseline]) {
    println!("  ── Analytic baselines ──");
    for b in baselines {
        println!("    {}: {} [{}]", b.label, b.value, b.unit);
        println!("      {} with {}", b.formula, b.parameters);
    }
    println!();
}

// ═══════════════════════════════════════════════════════════════════
// Ampère/Faraday consistency — sinusoidal B_z, predicted j_y
// ═══════════════════════════════════════════════════════════════════

/// Seeded field amplitude for the Ampère/Faraday case.
pub const AMPERE_BZ_AMPLITUDE: f64 = 1.0;

/// Peak |j_y| on the production domain (L = 100).
///
/// The curl of `B_z = sin(2π(x−x₀)/L)` has amplitude `2π/L`; this is the
/// scale the profile tolerance is calibrated against, not a checked value.
pub const AMPERE_JY_PEAK: AnalyticBaseline = AnalyticBaseline {
    label: "ampere_faraday peak |j_y|",
    formula: "|j_y|_max = A·2π/L",
    parameters: "A=1, L=100",
    value: 0.06283185307179587,
    unit: "current density",
};

// ═══════════════════════════════════════════════════════════════════
// Uniform B_z — cyclotron closure
// ═══════════════════════════════════════════════════════════════════

/// Cyclotron test configuration: the particle starts at x=5.05 with
/// v = (0, 2, 0) in `Bz = 1`, `q/m = 1`, and is integrated for exactly
/// 8 gyroperiods (t = 16π). Closure returns it to the initial state.
pub const UNIFORM_BZ_IDEAL_STATE: ParticleState = ParticleState {
    x: 5.05,
    vx: 0.0,
    vy: 2.0,
    vz: 0.0,
};

/// Elapsed simulated time for the cyclotron case: 8 gyroperiods at ω = 1.
pub const UNIFORM_BZ_ELAPSED: f64 = 16.0 * std::f64::consts::PI;

/// Per-component baselines for the cyclotron closure endpoint.
pub const UNIFORM_BZ_BASELINES: [AnalyticBaseline; 4] = [
    AnalyticBaseline {
        label: "uniform_bz ideal final x",
        formula: "x(nT) = x₀ (cyclotron closure)",
        parameters: "x₀=5.05, Bz=1, q/m=1, t=8T",
        value: 5.05,
        unit: "position",
    },
    AnalyticBaseline {
        label: "uniform_bz ideal final vx",
        formula: "vx(nT) = vx₀",
        parameters: "vx₀=0, t=8T",
        value: 0.0,
        unit: "velocity",
    },
    AnalyticBaseline {
        label: "uniform_bz ideal final vy",
        formula: "vy(nT) = vy₀",
        parameters: "vy₀=2, t=8T",
        value: 2.0,
        unit: "velocity",
    },
    AnalyticBaseline {
        label: "uniform_bz ideal final vz",
        formula: "vz(t) = vz₀ (constant of the motion)",
        parameters: "vz₀=0",
        value: 0.0,
        unit: "velocity",
    },
];

// ═══════════════════════════════════════════════════════════════════
// E×B drift — uniform Ey and Bz
// ═══════════════════════════════════════════════════════════════════

/// Drift test configuration: the particle starts at rest at x=50 in
/// `Ey = 0.1`, `Bz = 1`, `q/m = 1`, integrated for 10 gyroperiods
/// (t = 20π). The endpoint is x₀ + (Ey/Bz)·t with the velocity back at
/// its initial value.
pub const DRIFT_EY_IDEAL_STATE: ParticleState = ParticleState {
    x: 56.283185307179586,
    vx: 0.0,
    vy: 0.0,
    vz: 0.0,
};

/// Elapsed simulated time for the drift case: 10 gyroperiods at ω = 1.
pub const DRIFT_EY_ELAPSED: f64 = 20.0 * std::f64::consts::PI;

/// Drift field strengths.
pub const DRIFT_EY_FIELD: f64 = 0.1;
/// Uniform magnetic field for both particle cases.
pub const DRIFT_BZ_FIELD: f64 = 1.0;

/// Per-component baselines for the E×B drift endpoint.
pub const DRIFT_EY_BASELINES: [AnalyticBaseline; 4] = [
    AnalyticBaseline {
        label: "drift_ey ideal final x",
        formula: "x(nT) = x₀ + (Ey/Bz)·t",
        parameters: "x₀=50, Ey=0.1, Bz=1, t=20π",
        value: 56.283185307179586,
        unit: "position",
    },
    AnalyticBaseline {
        label: "drift_ey ideal final vx",
        formula: "vx(nT) = vx₀",
        parameters: "vx₀=0, t=10T",
        value: 0.0,
        unit: "velocity",
    },
    AnalyticBaseline {
        label: "drift_ey ideal final vy",
        formula: "vy(nT) = vy₀",
        parameters: "vy₀=0, t=10T",
        value: 0.0,
        unit: "velocity",
    },
    AnalyticBaseline {
        label: "drift_ey ideal final vz",
        formula: "vz(t) = vz₀ (constant of the motion)",
        parameters: "vz₀=0",
        value: 0.0,
        unit: "velocity",
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analytic::{
        cyclotron_final_state, exb_drift_velocity, uniform_field_final_state,
    };
    use crate::tolerances::EXACT_F64;

    #[test]
    fn uniform_bz_literals_match_closed_form() {
        let f = cyclotron_final_state(
            UNIFORM_BZ_IDEAL_STATE,
            DRIFT_BZ_FIELD,
            1.0,
            UNIFORM_BZ_ELAPSED,
        )
        .unwrap();
        for ((_, ideal), (_, derived)) in UNIFORM_BZ_IDEAL_STATE
            .components()
            .iter()
            .zip(f.components().iter())
        {
            assert!(
                (ideal - derived).abs() < EXACT_F64,
                "literal {ideal} vs derived {derived}"
            );
        }
    }

    #[test]
    fn drift_ey_literals_match_closed_form() {
        let initial = ParticleState {
            x: 50.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
        };
        let f = uniform_field_final_state(
            initial,
            DRIFT_EY_FIELD,
            DRIFT_BZ_FIELD,
            1.0,
            DRIFT_EY_ELAPSED,
        )
        .unwrap();
        for ((_, ideal), (_, derived)) in DRIFT_EY_IDEAL_STATE
            .components()
            .iter()
            .zip(f.components().iter())
        {
            assert!(
                (ideal - derived).abs() < EXACT_F64,
                "literal {ideal} vs derived {derived}"
            );
        }
    }

    #[test]
    fn drift_x_is_x0_plus_vd_t() {
        let vd = exb_drift_velocity(DRIFT_EY_FIELD, DRIFT_BZ_FIELD).unwrap();
        let expected = 50.0 + vd * DRIFT_EY_ELAPSED;
        assert!((DRIFT_EY_IDEAL_STATE.x - expected).abs() < EXACT_F64);
    }

    #[test]
    fn baseline_arrays_match_state_literals() {
        for (baselines, state) in [
            (&UNIFORM_BZ_BASELINES, UNIFORM_BZ_IDEAL_STATE),
            (&DRIFT_EY_BASELINES, DRIFT_EY_IDEAL_STATE),
        ] {
            for (b, (_, v)) in baselines.iter().zip(state.components().iter()) {
                assert!(
                    (b.value - v).abs() < f64::EPSILON,
                    "{}: record {} vs state {v}",
                    b.label,
                    b.value
                );
            }
        }
    }

    #[test]
    fn baseline_records_have_content() {
        for b in UNIFORM_BZ_BASELINES
            .iter()
            .chain(DRIFT_EY_BASELINES.iter())
            .chain([AMPERE_JY_PEAK].iter())
        {
            assert!(!b.label.is_empty());
            assert!(!b.formula.is_empty());
            assert!(!b.parameters.is_empty());
            assert!(!b.unit.is_empty());
            assert!(b.value.is_finite());
        }
    }

    #[test]
    fn ampere_peak_is_two_pi_over_l() {
        let expected = AMPERE_BZ_AMPLITUDE * 2.0 * std::f64::consts::PI / 100.0;
        assert!((AMPERE_JY_PEAK.value - expected).abs() < 1e-15);
    }

    #[test]
    fn print_baselines_no_panic() {
        print_baselines(&[&AMPERE_JY_PEAK, &UNIFORM_BZ_BASELINES[0]]);
    }
}
