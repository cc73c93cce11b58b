// SPDX-License-Identifier: AGPL-3.0-only

//! Simulation output loading.
//!
//! A dataset is a JSON object of named numeric arrays, one per field or
//! trajectory identifier:
//!
//! ```json
//! { "x": [0.0, 0.1], "bz": [0.0, 0.006], "jy": [-0.063, -0.063] }
//! ```
//!
//! Uses streaming `from_reader` behind a `BufReader`; the file handle is
//! released when loading returns, before any comparison runs. The loaded
//! sample is immutable for the remainder of the scenario.

use crate::error::HarnessError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(flatten)]
    arrays: HashMap<String, Vec<f64>>,
}

/// Named numeric arrays produced by one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationSample {
    arrays: HashMap<String, Vec<f64>>,
}

impl SimulationSample {
    /// Wrap already-loaded arrays (test construction path).
    #[must_use]
    pub fn from_arrays(arrays: HashMap<String, Vec<f64>>) -> Self {
        Self { arrays }
    }

    /// Borrow the array for `name`.
    ///
    /// # Errors
    ///
    /// `DataAccess` if the identifier is absent.
    pub fn field(&self, name: &str) -> Result<&[f64], HarnessError> {
        self.arrays
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| HarnessError::DataAccess(format!("missing field identifier '{name}'")))
    }

    /// Terminal value of the series for `name`.
    ///
    /// # Errors
    ///
    /// `DataAccess` if the identifier is absent; `StructuralMismatch` if the
    /// series is empty.
    pub fn final_value(&self, name: &str) -> Result<f64, HarnessError> {
        self.field(name)?.last().copied().ok_or_else(|| {
            HarnessError::StructuralMismatch(format!("field '{name}' is empty"))
        })
    }

    /// Validate that every identifier in `names` is present and all share
    /// one length; returns that common length.
    ///
    /// # Errors
    ///
    /// `DataAccess` for a missing identifier, `StructuralMismatch` for
    /// inconsistent lengths. Runs before any comparison so a broken dataset
    /// never yields a partial verdict.
    pub fn require(&self, names: &[&str]) -> Result<usize, HarnessError> {
        let mut common: Option<(&str, usize)> = None;
        for &name in names {
            let len = self.field(name)?.len();
            match common {
                None => common = Some((name, len)),
                Some((first, expected)) if expected != len => {
                    return Err(HarnessError::StructuralMismatch(format!(
                        "field '{name}' has {len} points, '{first}' has {expected}"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(common.map_or(0, |(_, len)| len))
    }

    /// Identifiers present in this sample.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }
}

/// Load a dataset file into a [`SimulationSample`].
///
/// # Errors
///
/// `DataAccess` if the file cannot be opened or is not a JSON object of
/// numeric arrays.
pub fn load_sample(path: &Path) -> Result<SimulationSample, HarnessError> {
    let file = std::fs::File::open(path)
        .map_err(|e| HarnessError::DataAccess(format!("{}: {e}", path.display())))?;
    let reader = std::io::BufReader::new(file);
    let dataset: DatasetFile = serde_json::from_reader(reader)
        .map_err(|e| HarnessError::DataAccess(format!("{}: {e}", path.display())))?;
    Ok(SimulationSample::from_arrays(dataset.arrays))
}

/// Parse `--key=value` from CLI args as a string, returning `default` if
/// missing.
#[must_use]
pub fn parse_cli_str(args: &[String], key: &str, default: &str) -> String {
    let prefix = format!("{key}=");
    args.iter()
        .find_map(|a| a.strip_prefix(&prefix))
        .unwrap_or(default)
        .to_string()
}
