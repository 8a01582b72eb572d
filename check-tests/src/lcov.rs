//! LCOV tracefile parsing
//!
//! Only the line records matter here: `SF:` opens a source file, `DA:` gives
//! the hit count of one instrumented line and `end_of_record` closes the
//! file. Function, branch and summary records are skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{CoverageError, Result};

/// Line hits for one source file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileCoverage {
    pub path: PathBuf,
    /// Instrumented line number to hit count
    pub lines: BTreeMap<u32, u64>,
}

impl FileCoverage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: BTreeMap::new(),
        }
    }

    /// Instrumented lines that never ran, in order
    pub fn missing_lines(&self) -> Vec<u32> {
        self.lines
            .iter()
            .filter(|(_, hits)| **hits == 0)
            .map(|(line, _)| *line)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.lines.values().all(|hits| *hits > 0)
    }

    fn record(&mut self, line: u32, hits: u64) {
        *self.lines.entry(line).or_insert(0) += hits;
    }
}

/// Every source file in a tracefile. Files recorded more than once (one
/// record per test binary) are merged by summing their hit counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverageReport {
    files: BTreeMap<PathBuf, FileCoverage>,
}

impl CoverageReport {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CoverageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let report = Self::parse(&text)?;
        debug!(path = %path.display(), files = report.files.len(), "Loaded coverage report");
        Ok(report)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut report = Self::default();
        let mut current: Option<FileCoverage> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if let Some(path) = line.strip_prefix("SF:") {
                if current.is_some() {
                    return Err(CoverageError::parse(line_no, "SF before end_of_record"));
                }
                current = Some(FileCoverage::new(path));
            } else if let Some(entry) = line.strip_prefix("DA:") {
                let file = current
                    .as_mut()
                    .ok_or_else(|| CoverageError::parse(line_no, "DA outside a source file record"))?;
                let (number, hits) =
                    parse_line_hits(entry).map_err(|message| CoverageError::parse(line_no, message))?;
                file.record(number, hits);
            } else if line == "end_of_record" {
                let file = current
                    .take()
                    .ok_or_else(|| CoverageError::parse(line_no, "end_of_record without SF"))?;
                trace!(path = %file.path.display(), lines = file.lines.len(), "Parsed source file record");
                report.merge(file);
            }
        }

        if let Some(file) = current {
            return Err(CoverageError::parse(
                text.lines().count(),
                format!("unterminated record for {}", file.path.display()),
            ));
        }
        Ok(report)
    }

    fn merge(&mut self, file: FileCoverage) {
        match self.files.get_mut(&file.path) {
            Some(existing) => {
                for (line, hits) in file.lines {
                    existing.record(line, hits);
                }
            }
            None => {
                self.files.insert(file.path.clone(), file);
            }
        }
    }

    pub fn files(&self) -> impl Iterator<Item = &FileCoverage> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// `<line>,<hits>[,<checksum>]`
fn parse_line_hits(entry: &str) -> std::result::Result<(u32, u64), String> {
    let mut parts = entry.split(',');
    let line = parts
        .next()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(|| format!("bad line number in DA:{entry}"))?;
    // some tools write negative or fractional counts for unreliable lines
    let hits = parts
        .next()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| format!("bad hit count in DA:{entry}"))?;
    Ok((line, if hits > 0.0 { hits.ceil() as u64 } else { 0 }))
}
