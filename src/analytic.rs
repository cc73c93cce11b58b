// SPDX-License-Identifier: AGPL-3.0-only

//! Closed-form reference solutions for the validation scenarios.
//!
//! Two analytic families:
//!
//! - **Field profiles** — steady-state spatial solutions evaluated pointwise
//!   over a caller-supplied grid ([`FieldProfile`]). These are the exact
//!   oracle: no approximation beyond f64 arithmetic.
//! - **Particle endpoints** — the exact solution of the Lorentz equation for
//!   uniform `B = Bz ẑ`, `E = Ey ŷ`
//!   ([`uniform_field_final_state`]): gyration of `v − v_d` at
//!   `ω = (q/m)·Bz` superposed on the E×B drift `v_d = Ey/Bz` along x.
//!
//! Nothing here depends on simulator output. Evaluation is deterministic:
//! identical parameters produce bit-identical results.

use crate::error::HarnessError;
use std::f64::consts::PI;

/// A closed-form periodic field profile over a 1D domain `[x_start, x_end]`.
///
/// `L = x_end − x_start` is the period; profiles are periodic so they match
/// the simulator's periodic boundary condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldProfile {
    /// `B_z(x) = A·sin(2π(x−x₀)/L)` — the seeded magnetic field.
    SinusoidalBz {
        /// Field amplitude A
        amplitude: f64,
    },
    /// `j_y(x) = −A·(2π/L)·cos(2π(x−x₀)/L)` — the curl of [`SinusoidalBz`]
    /// (normalized Ampère's law, `j = ∇×B`), the consistency oracle for the
    /// field solver.
    ///
    /// [`SinusoidalBz`]: FieldProfile::SinusoidalBz
    SinusoidalCurrent {
        /// Amplitude A of the underlying B_z, not of j_y
        amplitude: f64,
    },
}

impl FieldProfile {
    /// Evaluate the profile pointwise over `grid`.
    ///
    /// The grid is an ordered ascending sequence of positions; resolution is
    /// the caller's choice. Returns one value per grid point.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the grid is empty or `x_end − x_start ≤ 0`.
    pub fn evaluate(
        &self,
        grid: &[f64],
        x_start: f64,
        x_end: f64,
    ) -> Result<Vec<f64>, HarnessError> {
        if grid.is_empty() {
            return Err(HarnessError::InvalidParameter(
                "field profile requires a non-empty spatial grid".into(),
            ));
        }
        let length = x_end - x_start;
        if length <= 0.0 {
            return Err(HarnessError::InvalidParameter(format!(
                "domain length must be positive, got {length} (x_start={x_start}, x_end={x_end})"
            )));
        }
        let k = 2.0 * PI / length;
        let values = match *self {
            Self::SinusoidalBz { amplitude } => grid
                .iter()
                .map(|&x| amplitude * (k * (x - x_start)).sin())
                .collect(),
            Self::SinusoidalCurrent { amplitude } => grid
                .iter()
                .map(|&x| -amplitude * k * (k * (x - x_start)).cos())
                .collect(),
        };
        Ok(values)
    }
}

/// Phase-space state of one test particle: 1D position, 3D velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    /// Position along x
    pub x: f64,
    /// Velocity components
    pub vx: f64,
    /// Velocity along y
    pub vy: f64,
    /// Velocity along z
    pub vz: f64,
}

impl ParticleState {
    /// Components in report order, paired with their field identifiers.
    #[must_use]
    pub fn components(&self) -> [(&'static str, f64); 4] {
        [("x", self.x), ("vx", self.vx), ("vy", self.vy), ("vz", self.vz)]
    }
}

/// Signed gyrofrequency `ω = (q/m)·Bz` (rad per unit time).
#[must_use]
pub fn gyrofrequency(q_over_m: f64, bz: f64) -> f64 {
    q_over_m * bz
}

/// Gyroperiod `T = 2π/|ω|`.
///
/// # Errors
///
/// `InvalidParameter` if the gyrofrequency is zero (unmagnetized particle
/// has no cyclotron period).
pub fn gyroperiod(q_over_m: f64, bz: f64) -> Result<f64, HarnessError> {
    let omega = gyrofrequency(q_over_m, bz);
    if omega == 0.0 {
        return Err(HarnessError::InvalidParameter(
            "gyroperiod undefined for zero gyrofrequency".into(),
        ));
    }
    Ok(2.0 * PI / omega.abs())
}

/// E×B drift speed along x for `E = Ey ŷ`, `B = Bz ẑ`: `v_d = Ey/Bz`.
///
/// # Errors
///
/// `InvalidParameter` if `Bz` is zero.
pub fn exb_drift_velocity(ey: f64, bz: f64) -> Result<f64, HarnessError> {
    if bz == 0.0 {
        return Err(HarnessError::InvalidParameter(
            "E×B drift undefined for zero Bz".into(),
        ));
    }
    Ok(ey / bz)
}

/// Exact particle state after `elapsed` time in uniform `B = Bz ẑ`,
/// `E = Ey ŷ`.
///
/// With `ω = (q/m)·Bz` and `v_d = Ey/Bz`, the in-plane velocity decomposes
/// into the drift plus a gyration of `u = vx − v_d`:
///
/// ```text
/// vx(t) = v_d + u₀·cos(ωt) + vy₀·sin(ωt)
/// vy(t) =       vy₀·cos(ωt) − u₀·sin(ωt)
/// x(t)  = x₀ + v_d·t + (u₀/ω)·sin(ωt) − (vy₀/ω)·(cos(ωt) − 1)
/// ```
///
/// `vz` is a constant of the motion. At an integer number of gyroperiods the
/// velocity returns to its initial value and the position has advanced by
/// exactly `v_d·t` — the closure property the particle scenarios test.
///
/// # Errors
///
/// `InvalidParameter` if the gyrofrequency `(q/m)·Bz` is zero.
pub fn uniform_field_final_state(
    initial: ParticleState,
    ey: f64,
    bz: f64,
    q_over_m: f64,
    elapsed: f64,
) -> Result<ParticleState, HarnessError> {
    let omega = gyrofrequency(q_over_m, bz);
    if omega == 0.0 {
        return Err(HarnessError::InvalidParameter(
            "uniform-field solution undefined for zero gyrofrequency".into(),
        ));
    }
    let v_drift = ey / bz;
    let (s, c) = (omega * elapsed).sin_cos();
    let u0 = initial.vx - v_drift;
    Ok(ParticleState {
        x: initial.x + v_drift * elapsed + (u0 / omega) * s - (initial.vy / omega) * (c - 1.0),
        vx: v_drift + u0 * c + initial.vy * s,
        vy: initial.vy * c - u0 * s,
        vz: initial.vz,
    })
}

/// Cyclotron-only endpoint: [`uniform_field_final_state`] with `Ey = 0`.
///
/// # Errors
///
/// `InvalidParameter` if the gyrofrequency is zero.
pub fn cyclotron_final_state(
    initial: ParticleState,
    bz: f64,
    q_over_m: f64,
    elapsed: f64,
) -> Result<ParticleState, HarnessError> {
    uniform_field_final_state(initial, 0.0, bz, q_over_m, elapsed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn grid(n: usize, x_start: f64, x_end: f64) -> Vec<f64> {
        let dx = (x_end - x_start) / (n - 1) as f64;
        (0..n).map(|i| x_start + i as f64 * dx).collect()
    }

    #[test]
    fn current_profile_at_domain_start() {
        // j_y(x_start) = −(2π/L)·cos(0) = −2π/L
        let g = grid(101, -10.0, 10.0);
        let profile = FieldProfile::SinusoidalCurrent { amplitude: 1.0 };
        let jy = profile.evaluate(&g, -10.0, 10.0).unwrap();
        let expected = -2.0 * PI / 20.0;
        assert!((jy[0] - expected).abs() < 1e-14, "got {}", jy[0]);
    }

    #[test]
    fn current_profile_at_quarter_period() {
        // x = x_start + L/4 → cos(π/2) → ~0
        let g = grid(101, -10.0, 10.0);
        let profile = FieldProfile::SinusoidalCurrent { amplitude: 1.0 };
        let jy = profile.evaluate(&g, -10.0, 10.0).unwrap();
        // 101 points over L=20 → index 25 sits at x = −5 = x_start + L/4
        assert!(jy[25].abs() < 1e-12, "got {}", jy[25]);
    }

    #[test]
    fn bz_profile_is_periodic() {
        let g = grid(101, 0.0, 100.0);
        let profile = FieldProfile::SinusoidalBz { amplitude: 1.0 };
        let bz = profile.evaluate(&g, 0.0, 100.0).unwrap();
        assert!(bz[0].abs() < 1e-12);
        assert!(bz[100].abs() < 1e-12, "sin(2π) at x_end");
        assert!((bz[25] - 1.0).abs() < 1e-12, "peak at L/4");
    }

    #[test]
    fn profile_rejects_empty_grid() {
        let profile = FieldProfile::SinusoidalCurrent { amplitude: 1.0 };
        let err = profile.evaluate(&[], 0.0, 10.0).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidParameter(_)));
    }

    #[test]
    fn profile_rejects_zero_length_domain() {
        let profile = FieldProfile::SinusoidalBz { amplitude: 1.0 };
        let err = profile.evaluate(&[0.0, 1.0], 5.0, 5.0).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidParameter(_)));
    }

    #[test]
    fn profile_evaluation_is_deterministic() {
        let g = grid(257, -10.0, 10.0);
        let profile = FieldProfile::SinusoidalCurrent { amplitude: 2.5 };
        let a = profile.evaluate(&g, -10.0, 10.0).unwrap();
        let b = profile.evaluate(&g, -10.0, 10.0).unwrap();
        // Bit-identical, not merely close.
        assert_eq!(a, b);
    }

    #[test]
    fn cyclotron_closes_after_whole_periods() {
        let initial = ParticleState {
            x: 5.05,
            vx: 0.0,
            vy: 2.0,
            vz: 0.0,
        };
        let t = 8.0 * gyroperiod(1.0, 1.0).unwrap();
        let f = cyclotron_final_state(initial, 1.0, 1.0, t).unwrap();
        assert!((f.x - initial.x).abs() < 1e-12);
        assert!(f.vx.abs() < 1e-12);
        assert!((f.vy - initial.vy).abs() < 1e-12);
        assert!(f.vz.abs() < 1e-12);
    }

    #[test]
    fn quarter_period_rotates_velocity() {
        // ω = 1: after T/4 the (vx, vy) pair rotates (0, 2) → (2, 0) and
        // x(T/4) = x₀ − (vy₀/ω)(cos(π/2) − 1) = x₀ + vy₀.
        let initial = ParticleState {
            x: 0.0,
            vx: 0.0,
            vy: 2.0,
            vz: 0.5,
        };
        let t = 0.25 * gyroperiod(1.0, 1.0).unwrap();
        let f = cyclotron_final_state(initial, 1.0, 1.0, t).unwrap();
        assert!((f.vx - 2.0).abs() < 1e-12);
        assert!(f.vy.abs() < 1e-12);
        assert!((f.x - 2.0).abs() < 1e-12);
        assert!((f.vz - 0.5).abs() < 1e-15, "vz is a constant of the motion");
    }

    #[test]
    fn drift_advances_position_by_vd_t() {
        let initial = ParticleState {
            x: 50.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
        };
        let t = 10.0 * gyroperiod(1.0, 1.0).unwrap();
        let f = uniform_field_final_state(initial, 0.1, 1.0, 1.0, t).unwrap();
        let vd = exb_drift_velocity(0.1, 1.0).unwrap();
        assert!((f.x - (50.0 + vd * t)).abs() < 1e-10);
        assert!(f.vx.abs() < 1e-12);
        assert!(f.vy.abs() < 1e-12);
    }

    #[test]
    fn zero_gyrofrequency_is_invalid() {
        let initial = ParticleState {
            x: 0.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
        };
        assert!(matches!(
            uniform_field_final_state(initial, 0.1, 0.0, 1.0, 1.0),
            Err(HarnessError::InvalidParameter(_))
        ));
        assert!(matches!(
            cyclotron_final_state(initial, 1.0, 0.0, 1.0),
            Err(HarnessError::InvalidParameter(_))
        ));
        assert!(gyroperiod(0.0, 1.0).is_err());
        assert!(exb_drift_velocity(1.0, 0.0).is_err());
    }

    #[test]
    fn endpoint_solution_is_deterministic() {
        let initial = ParticleState {
            x: 1.0,
            vx: 0.3,
            vy: -0.7,
            vz: 0.1,
        };
        let a = uniform_field_final_state(initial, 0.2, 1.5, 1.0, 12.34).unwrap();
        let b = uniform_field_final_state(initial, 0.2, 1.5, 1.0, 12.34).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn components_report_order() {
        let s = ParticleState {
            x: 1.0,
            vx: 2.0,
            vy: 3.0,
            vz: 4.0,
        };
        let c = s.components();
        assert_eq!(c[0], ("x", 1.0));
        assert_eq!(c[3], ("vz", 4.0));
    }
}
