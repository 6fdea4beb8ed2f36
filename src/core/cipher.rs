// src/core/cipher.rs
pub mod brute_force;
pub mod scoring;

pub use brute_force::brute_force;
pub use scoring::{Scorer, WordList};

use crate::models::Shift;
use crate::models::shift::ALPHABET_LEN;

/// Rotates every ASCII letter of `text` by `shift`, preserving case.
///
/// Everything else (digits, punctuation, whitespace, non-ASCII letters) is
/// copied through untouched. Any shift is accepted and reduced modulo 26.
#[inline]
#[must_use]
pub fn encode(text: &str, shift: i64) -> String {
    rotate(text, Shift::new(shift))
}

/// Undoes [`encode`] with the same shift.
#[inline]
#[must_use]
pub fn decode(text: &str, shift: i64) -> String {
    rotate(text, Shift::new(shift).inverse())
}

/// Applies an already-normalized shift.
#[inline]
#[must_use]
pub fn rotate(text: &str, shift: Shift) -> String {
    text.chars().map(|ch| rotate_char(ch, shift)).collect()
}

fn rotate_char(ch: char, shift: Shift) -> char {
    let base = if ch.is_ascii_uppercase() {
        b'A'
    } else if ch.is_ascii_lowercase() {
        b'a'
    } else {
        return ch;
    };
    let offset = u8::try_from(ch).map_or(0, |byte| byte - base);
    char::from(base + (offset + shift.value()) % ALPHABET_LEN)
}

/// Works out which shift turns `original` into `encrypted`.
///
/// The candidate comes from the first position where both texts hold a
/// letter; it is then checked against the whole text. Returns `None` when the
/// letters disagree on case, when the candidate does not reproduce
/// `encrypted`, or when there are no aligned letters at all.
#[inline]
#[must_use]
pub fn shift_between(original: &str, encrypted: &str) -> Option<Shift> {
    let (orig_ch, enc_ch) = original
        .chars()
        .zip(encrypted.chars())
        .find(|(o, e)| o.is_ascii_alphabetic() && e.is_ascii_alphabetic())?;

    if orig_ch.is_ascii_uppercase() != enc_ch.is_ascii_uppercase() {
        return None;
    }

    let shift = Shift::new(i64::from(u32::from(enc_ch)) - i64::from(u32::from(orig_ch)));
    (rotate(original, shift) == encrypted).then_some(shift)
}
