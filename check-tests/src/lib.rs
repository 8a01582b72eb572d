//! Check that every line of test code ran.
//!
//! A test body that never executes passes silently, for example a test
//! gated behind a condition that is never true or a helper nothing calls.
//! Given an LCOV tracefile from a coverage run that instrumented the tests
//! themselves, [`check`] reports each test file with lines that never ran.

pub mod config;
pub mod error;
pub mod lcov;
pub mod report;
pub mod telemetry;

pub use config::{Config, LogFormat, LoggingConfig, ReportConfig};
pub use error::{CoverageError, Result};
pub use lcov::{CoverageReport, FileCoverage};
pub use report::{check, missing_ranges, MissingLines, Outcome, TestFileFilter};
