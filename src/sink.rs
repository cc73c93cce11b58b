// SPDX-License-Identifier: AGPL-3.0-only

//! Diagnostic artifact sinks.
//!
//! The scenario runner hands validated series (grid or step series, the
//! simulated fields, and the analytic prediction) to a [`DiagnosticSink`]
//! for human inspection. Sinks never feed back into the verdict: a failed
//! write is the caller's warning, not an error, and the validation core is
//! tested against [`NullSink`] with no filesystem at all.
//!
//! The sink is injected rather than discovered — no fixed output directory,
//! no process-wide state — so scenarios can run concurrently or in test
//! isolation without interference.

use std::io::Write;
use std::path::PathBuf;

/// One named series of a diagnostic artifact.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    /// Column name (field identifier, or e.g. "jy_pred")
    pub name: &'a str,
    /// Column values
    pub values: &'a [f64],
}

/// Capability interface for diagnostic output.
pub trait DiagnosticSink {
    /// Emit the series for one scenario.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures; callers treat them as warnings.
    fn emit(&mut self, scenario: &str, series: &[Series<'_>]) -> std::io::Result<()>;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _scenario: &str, _series: &[Series<'_>]) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes one CSV file per scenario under a configured directory.
///
/// The directory is created on first emit if absent. Rows are grid points or
/// time steps; the row index is the step number for trajectory series.
#[derive(Debug, Clone)]
pub struct CsvSink {
    out_dir: PathBuf,
}

impl CsvSink {
    /// A sink writing `{out_dir}/{scenario}.csv`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Path the artifact for `scenario` will be written to.
    #[must_use]
    pub fn artifact_path(&self, scenario: &str) -> PathBuf {
        self.out_dir.join(format!("{scenario}.csv"))
    }
}

impl DiagnosticSink for CsvSink {
    fn emit(&mut self, scenario: &str, series: &[Series<'_>]) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.artifact_path(scenario);
        let mut w = std::io::BufWriter::new(std::fs::File::create(&path)?);

        let header: Vec<&str> = series.iter().map(|s| s.name).collect();
        writeln!(w, "{}", header.join(","))?;

        let rows = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        for i in 0..rows {
            let mut line = String::new();
            for (j, s) in series.iter().enumerate() {
                if j > 0 {
                    line.push(',');
                }
                if let Some(v) = s.values.get(i) {
                    line.push_str(&format!("{v:e}"));
                }
            }
            writeln!(w, "{line}")?;
        }
        w.flush()
    }
}
