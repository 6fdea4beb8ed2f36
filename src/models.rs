// src/models.rs
pub mod analysis_report;
pub mod candidate;
pub mod shift;

pub use analysis_report::AnalysisReport;
pub use candidate::{BruteForceResult, CandidateResult};
pub use shift::Shift;
