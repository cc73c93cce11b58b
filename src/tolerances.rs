// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized validation tolerances with physical justification.
//!
//! Every threshold used by the comparator and the scenario registry is
//! defined here with its origin and rationale. No ad-hoc magic numbers at
//! call sites.
//!
//! All tolerances are ABSOLUTE thresholds on a deviation, applied with a
//! strict `<` (see [`crate::compare::within_tolerance`]). Absolute rather
//! than relative: the tracked quantities (positions, velocities, current
//! densities) are O(1)–O(10²) in simulation units and several pass through
//! zero, where a relative threshold is meaningless.

// ═══════════════════════════════════════════════════════════════════
// Machine-precision tolerances (IEEE 754 f64)
// ═══════════════════════════════════════════════════════════════════

/// Tolerance for operations that should be exact in f64 arithmetic.
///
/// The analytic reference model is closed-form, so re-evaluating it with
/// identical parameters must agree to rounding only. 1e-10 allows a few
/// digits of slack over ~1e-16 machine epsilon for composed `sin`/`cos`.
pub const EXACT_F64: f64 = 1e-10;

// ═══════════════════════════════════════════════════════════════════
// Field-profile tolerances
// ═══════════════════════════════════════════════════════════════════

/// Maximum absolute pointwise deviation of a simulated field profile from
/// its closed-form prediction.
///
/// The Ampère consistency case compares the discrete curl of
/// `B_z = sin(2π(x−x₀)/L)` against `−(2π/L)·cos(2π(x−x₀)/L)`. A centered
/// difference at spacing dx carries a relative truncation error of
/// `(k·dx)²/6` with `k = 2π/L`; on the production grid (L=100, dx=0.1) that
/// is ~7e-6 of a ~6.3e-2 amplitude, i.e. ~4e-7 absolute. 1e-3 keeps three
/// orders of margin for coarser grids while staying two orders below the
/// signal amplitude, so a wrong sign or a shifted phase cannot pass.
pub const FIELD_PROFILE_MAX_ABS_DEV: f64 = 1e-3;

// ═══════════════════════════════════════════════════════════════════
// Final-state tolerances
// ═══════════════════════════════════════════════════════════════════

/// Absolute tolerance on each terminal component (x, vx, vy, vz) of a
/// particle trajectory against its analytic endpoint.
///
/// The Boris pusher is second-order with a per-gyroperiod phase error of
/// `(ω·dt)²/12`; at `ω·dt = 0.1` over ~10 periods the accumulated endpoint
/// error is O(1e-3) of the gyroradius (here O(1)). 1e-2 absolute allows that
/// drift while rejecting any endpoint off by a step of the orbit.
pub const FINAL_STATE_ABS: f64 = 1e-2;
