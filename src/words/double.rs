use super::*;

use crate::layout::{LSW, MSW};

impl DoubleWords {
  /// Split `value` into its two words.
  #[inline]
  pub const fn from_f64(value: f64) -> Self {
    // Group the native-endian bytes four at a time: the first group is whichever word comes
    // first in memory, and `u32::from_ne_bytes` reads it with the same byte order.
    let b = value.to_ne_bytes();
    Self([
      u32::from_ne_bytes([b[0], b[1], b[2], b[3]]),
      u32::from_ne_bytes([b[4], b[5], b[6], b[7]]),
    ])
  }

  /// Reassemble the `f64` these words make up.
  #[inline]
  pub const fn to_f64(self) -> f64 {
    let a = self.0[0].to_ne_bytes();
    let b = self.0[1].to_ne_bytes();
    f64::from_ne_bytes([a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3]])
  }

  /// Build a double from its most significant word `msw` and least significant word `lsw`.
  #[inline]
  pub const fn from_words(msw: u32, lsw: u32) -> Self {
    let mut words = [0; 2];
    words[MSW] = msw;
    words[LSW] = lsw;
    Self(words)
  }

  /// The most and least significant words, in that order.
  #[inline]
  pub const fn into_words(self) -> (u32, u32) {
    (self.msw(), self.lsw())
  }

  /// The words exactly as they are laid out in memory on this target: `[msw, lsw]` on big-endian
  /// and `[lsw, msw]` on little-endian.
  #[inline]
  pub const fn to_memory(self) -> [u32; 2] {
    self.0
  }

  /// The most significant (high) word: sign, exponent, and top 20 bits of mantissa.
  #[inline]
  pub const fn msw(self) -> u32 {
    self.0[MSW]
  }

  /// The least significant (low) word: bottom 32 bits of mantissa.
  #[inline]
  pub const fn lsw(self) -> u32 {
    self.0[LSW]
  }

  /// Overwrite the most significant word, leaving the other untouched.
  #[inline]
  pub const fn set_msw(&mut self, msw: u32) {
    self.0[MSW] = msw
  }

  /// Overwrite the least significant word, leaving the other untouched.
  #[inline]
  pub const fn set_lsw(&mut self, lsw: u32) {
    self.0[LSW] = lsw
  }

  /// As [`Self::set_msw`], but by value.
  #[inline]
  pub const fn with_msw(mut self, msw: u32) -> Self {
    self.set_msw(msw);
    self
  }

  /// As [`Self::set_lsw`], but by value.
  #[inline]
  pub const fn with_lsw(mut self, lsw: u32) -> Self {
    self.set_lsw(lsw);
    self
  }
}

impl From<f64> for DoubleWords {
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_f64(value)
  }
}

impl From<DoubleWords> for f64 {
  #[inline]
  fn from(words: DoubleWords) -> Self {
    words.to_f64()
  }
}
