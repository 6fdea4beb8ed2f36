// src/lib.rs
pub mod cli;
pub mod core;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;
pub mod utils;

pub use cli::{Args, Commands, run};
pub use crate::core::analyzer::analyze;
pub use crate::core::cipher::{Scorer, WordList, brute_force, decode, encode, shift_between};
pub use crate::core::config::{Config, load_config};
pub use models::{AnalysisReport, BruteForceResult, CandidateResult, Shift};
pub use storage::Store;
