//! Report structures and output formatting

pub mod report;
pub mod formatter;

pub use formatter::{save_report_to_file, ReportGenerator};
pub use report::{CandidateScore, RunReport, RunStatus, ScoreReport};
