// SPDX-License-Identifier: AGPL-3.0-only

//! picvalid — analytic validation harness for a 1D electromagnetic PIC
//! simulator.
//!
//! Consumes simulator output datasets (named numeric arrays), computes an
//! independent closed-form reference solution for each known physical
//! configuration, compares the two within documented tolerances, and
//! reports an explicit pass/fail verdict. One comparison, one verdict,
//! fully deterministic.
//!
//! ## Modules
//!   - `data` — named-array dataset loading (JSON)
//!   - `analytic` — closed-form reference solutions: field profiles and
//!     uniform-field particle endpoints
//!   - `compare` — tolerance comparison, `Check`/`Verdict` aggregation
//!   - `scenario` — scenario registry and runner
//!   - `sink` — injected diagnostic artifact sinks (CSV, null)
//!   - `tolerances` — every threshold, with justification
//!   - `provenance` — analytic baselines behind every hardcoded ideal
//!   - `error` — `HarnessError` taxonomy
//!
//! ## Validation binaries
//!   - `validate_ampere_faraday` — j_y profile vs curl of the seeded B_z
//!   - `validate_uniform_bz` — cyclotron closure in a uniform B_z
//!   - `validate_drift_ey` — E×B drift endpoint
//!   - `validate_all` — every registry scenario with a dataset present
//!
//! Exit code contract: 0 = all checks pass, 1 = any tolerance failure,
//! 2 = harness error (broken dataset or parameters).

pub mod analytic;
pub mod compare;
pub mod data;
pub mod error;
pub mod provenance;
pub mod scenario;
pub mod sink;
pub mod tolerances;
