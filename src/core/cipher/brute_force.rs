// src/core/cipher/brute_force.rs
use log::debug;

use crate::core::cipher::Scorer;
use crate::core::cipher::rotate;
use crate::models::{BruteForceResult, CandidateResult, Shift};

/// Tries every shift against `text` and keeps the best-scoring decryption.
///
/// Candidates are produced in ascending shift order and the running best is
/// only replaced by a strictly higher score, so on equal scores the lowest
/// shift wins. When nothing scores above zero (empty or letterless input)
/// shift 0 is returned.
#[inline]
pub fn brute_force<S: Scorer + ?Sized>(text: &str, scorer: &S) -> BruteForceResult {
    let candidates: Vec<CandidateResult> = Shift::all()
        .map(|shift| {
            let decrypted = rotate(text, shift.inverse());
            let score = scorer.score(&decrypted);
            CandidateResult {
                shift,
                text: decrypted,
                score,
            }
        })
        .collect();

    let best = candidates
        .iter()
        .reduce(|best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })
        .cloned()
        .unwrap_or_else(|| CandidateResult {
            shift: Shift::default(),
            text: text.to_owned(),
            score: 0.0,
        });

    debug!("Best shift {} with score {:.2}", best.shift, best.score);

    BruteForceResult { best, candidates }
}
