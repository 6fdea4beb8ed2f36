// src/models/candidate.rs
use crate::models::Shift;
use serde::Serialize;

/// One decryption attempt: the text produced by a shift and how English it looks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateResult {
    pub shift: Shift,
    pub text: String,
    pub score: f64,
}

/// Outcome of trying every shift against a ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BruteForceResult {
    pub best: CandidateResult,
    /// One candidate per shift, in ascending shift order.
    pub candidates: Vec<CandidateResult>,
}

impl BruteForceResult {
    #[inline]
    #[must_use]
    pub const fn best_shift(&self) -> Shift {
        self.best.shift
    }

    #[inline]
    #[must_use]
    pub fn best_text(&self) -> &str {
        &self.best.text
    }

    /// Candidates ordered by score, highest first. Equal scores keep shift order.
    #[inline]
    #[must_use]
    pub fn ranked(&self) -> Vec<&CandidateResult> {
        let mut ranked: Vec<&CandidateResult> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// `(shift, score)` pairs in shift order, for plotting.
    #[inline]
    #[must_use]
    pub fn scores(&self) -> Vec<(u8, f64)> {
        self.candidates
            .iter()
            .map(|c| (c.shift.value(), c.score))
            .collect()
    }
}
