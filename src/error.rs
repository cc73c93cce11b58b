// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for the validation harness.
//!
//! Replaces `Result<_, String>` in public APIs with a proper enum so callers
//! can pattern-match on failure modes (missing dataset, inconsistent arrays,
//! undefined analytic computation) rather than parsing opaque strings.
//!
//! A tolerance failure is NOT an error — it is a normal comparator outcome
//! carried in a [`Verdict`](crate::compare::Verdict). Every variant here
//! aborts one scenario before or during setup; none is retried.

use std::fmt;

/// Errors arising from dataset loading, structural validation, or the
/// analytic reference model.
#[derive(Debug)]
pub enum HarnessError {
    /// Dataset file missing, unreadable, or malformed, or a required field
    /// identifier absent from the loaded arrays.
    DataAccess(String),

    /// Loaded arrays have inconsistent lengths against each other or against
    /// the declared grid, or a series is empty where a terminal value is
    /// required.
    StructuralMismatch(String),

    /// Scenario parameters yield an undefined analytic computation
    /// (zero-length domain, empty grid, zero gyrofrequency).
    InvalidParameter(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataAccess(msg) => write!(f, "Data access failed: {msg}"),
            Self::StructuralMismatch(msg) => write!(f, "Structural mismatch: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "Invalid analytic parameter: {msg}"),
        }
    }
}

impl std::error::Error for HarnessError {}
