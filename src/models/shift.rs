// src/models/shift.rs
use serde::Serialize;
use std::fmt;

/// Number of letters in each alphabet a shift rotates.
pub const ALPHABET_LEN: u8 = 26;

/// A Caesar rotation, always normalized into `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Shift(u8);

impl Shift {
    /// Normalizes any integer into the 26-letter range. Negative values wrap,
    /// so `Shift::new(-1)` is `Shift(25)`.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "rem_euclid result is within 0..26")]
    #[expect(clippy::cast_possible_truncation, reason = "rem_euclid result is within 0..26")]
    #[expect(clippy::cast_sign_loss, reason = "rem_euclid result is never negative")]
    pub const fn new(raw: i64) -> Self {
        Self(raw.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }

    /// Every shift in ascending order, starting at zero.
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN).map(Self)
    }
}

impl From<i64> for Shift {
    #[inline]
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Shift {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
