//! Deciding whether all test code ran, and reporting the lines that did not

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};

use crate::error::Result;
use crate::lcov::{CoverageReport, FileCoverage};

pub const EXIT_TEST_CODE_NOT_EXECUTED: u8 = 1;
pub const EXIT_NO_TEST_FILES: u8 = 2;

/// Which source files count as test code.
///
/// Patterns are matched against paths relative to `root` when the recorded
/// path lies under it, and against the recorded path otherwise.
#[derive(Debug, Clone)]
pub struct TestFileFilter {
    include: GlobSet,
    root: Option<PathBuf>,
}

impl TestFileFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S], root: Option<&Path>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern.as_ref())?);
        }
        Ok(Self {
            include: builder.build()?,
            root: root.map(Path::to_path_buf),
        })
    }

    /// Path as shown in the report
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        self.root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
    }

    pub fn is_test_file(&self, path: &Path) -> bool {
        self.include.is_match(self.display_path(path))
    }
}

/// A test file with lines that never ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLines {
    pub path: PathBuf,
    /// Line ranges such as `3-5, 9`
    pub ranges: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every instrumented line of every test file ran
    Complete { files: usize },
    Incomplete(Vec<MissingLines>),
    /// The report has no test files at all, so test code was not measured
    NoTestFiles,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Complete { .. } => 0,
            Outcome::Incomplete(_) => EXIT_TEST_CODE_NOT_EXECUTED,
            Outcome::NoTestFiles => EXIT_NO_TEST_FILES,
        }
    }

    /// Human-readable report; nothing is written when all test code ran
    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Outcome::Complete { .. } => Ok(()),
            Outcome::Incomplete(missing) => {
                writeln!(out, "Some or all code lines in the following test modules are not being executed:")?;
                for file in missing {
                    writeln!(out, "{}\t{}", file.path.display(), file.ranges)?;
                }
                Ok(())
            }
            Outcome::NoTestFiles => writeln!(
                out,
                "Tests must have been run with coverage of the test code in order to check coverage."
            ),
        }
    }
}

pub fn check(report: &CoverageReport, filter: &TestFileFilter) -> Outcome {
    let test_files: Vec<&FileCoverage> = report.files().filter(|file| filter.is_test_file(&file.path)).collect();
    debug!(total = report.len(), tests = test_files.len(), "Selected test files from report");

    if test_files.is_empty() {
        return Outcome::NoTestFiles;
    }

    let missing: Vec<MissingLines> = test_files
        .iter()
        .filter(|file| !file.is_complete())
        .map(|file| MissingLines {
            path: filter.display_path(&file.path).to_path_buf(),
            ranges: missing_ranges(file),
        })
        .collect();

    if missing.is_empty() {
        info!(files = test_files.len(), "All test code was executed");
        Outcome::Complete {
            files: test_files.len(),
        }
    } else {
        info!(files = missing.len(), "Test code was not executed");
        Outcome::Incomplete(missing)
    }
}

/// Collapse the missed lines of a file into ranges.
///
/// A range runs across uninstrumented lines (blank lines, comments) and is
/// only broken by a line that executed.
pub fn missing_ranges(file: &FileCoverage) -> String {
    let mut ranges: Vec<(u32, u32)> = Vec::new();
    let mut open: Option<(u32, u32)> = None;

    for (&line, &hits) in &file.lines {
        if hits == 0 {
            open = Some(match open {
                Some((start, _)) => (start, line),
                None => (line, line),
            });
        } else if let Some(range) = open.take() {
            ranges.push(range);
        }
    }
    ranges.extend(open);

    ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
