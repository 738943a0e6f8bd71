//! Batch scoring of many resumes against one position

pub mod run;

pub use run::{AnalysisRun, ResumeText};
