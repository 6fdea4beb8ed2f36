// src/core.rs
pub mod analyzer;
pub mod cipher;
pub mod config;
