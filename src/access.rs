//! The word accessors that fdlibm-style kernels are written against.
//!
//! These are thin, `const`, always-inlined wrappers around [`DoubleWords`] and [`FloatWord`]:
//! they take and return plain values, so the usual idiom of
//!
//! ```text
//! GET_HIGH_WORD(hx, x);
//! SET_LOW_WORD(x, 0);
//! ```
//!
//! becomes
//!
//! ```
//! # use fdlibm_words::{get_high_word, set_low_word};
//! # let mut x = 2.5f64;
//! let hx = get_high_word(x);
//! x = set_low_word(x, 0);
//! # assert_eq!(hx, 0x40040000);
//! ```
//!
//! or, mutating in place, with the [`WordsExt`] methods.
//!
//! All of them are total. Every bit pattern, including NaN payloads, is passed through untouched.

use crate::words::{DoubleWords, FloatWord};

/// The most and least significant words of `value`, in that order.
#[inline]
pub const fn extract_words(value: f64) -> (u32, u32) {
  DoubleWords::from_f64(value).into_words()
}

/// The most significant word of `value`.
#[inline]
pub const fn get_high_word(value: f64) -> u32 {
  DoubleWords::from_f64(value).msw()
}

/// The least significant word of `value`.
#[inline]
pub const fn get_low_word(value: f64) -> u32 {
  DoubleWords::from_f64(value).lsw()
}

/// The double whose most significant word is `high` and least significant word is `low`.
#[inline]
pub const fn insert_words(high: u32, low: u32) -> f64 {
  DoubleWords::from_words(high, low).to_f64()
}

/// `value` with its most significant word replaced by `high`.
#[inline]
pub const fn set_high_word(value: f64, high: u32) -> f64 {
  DoubleWords::from_f64(value).with_msw(high).to_f64()
}

/// `value` with its least significant word replaced by `low`.
#[inline]
pub const fn set_low_word(value: f64, low: u32) -> f64 {
  DoubleWords::from_f64(value).with_lsw(low).to_f64()
}

/// The word of `value`.
#[inline]
pub const fn get_float_word(value: f32) -> u32 {
  FloatWord::from_f32(value).to_bits()
}

/// The float whose word is `word`.
#[inline]
pub const fn set_float_word(word: u32) -> f32 {
  FloatWord::from_bits(word).to_f32()
}

/// Word access as methods on `f64`, with in-place setters.
///
/// ```
/// # use fdlibm_words::WordsExt;
/// let mut x = 1.0f64;
/// x.set_high_word(x.high_word() + (1 << 20));  // Bump the exponent
/// assert_eq!(x, 2.0);
/// ```
pub trait WordsExt {
  /// See [`get_high_word`].
  fn high_word(self) -> u32;
  /// See [`get_low_word`].
  fn low_word(self) -> u32;
  /// As [`set_high_word`], but overwrites `self`.
  fn set_high_word(&mut self, high: u32);
  /// As [`set_low_word`], but overwrites `self`.
  fn set_low_word(&mut self, low: u32);
}

impl WordsExt for f64 {
  #[inline]
  fn high_word(self) -> u32 {
    get_high_word(self)
  }

  #[inline]
  fn low_word(self) -> u32 {
    get_low_word(self)
  }

  #[inline]
  fn set_high_word(&mut self, high: u32) {
    *self = set_high_word(*self, high)
  }

  #[inline]
  fn set_low_word(&mut self, low: u32) {
    *self = set_low_word(*self, low)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn one() {
    assert_eq!(get_high_word(1.0), 0x3ff00000);
    assert_eq!(get_low_word(1.0), 0);
  }

  #[test]
  fn minus_zero() {
    assert_eq!(get_high_word(-0.0), 0x80000000);
    assert_eq!(get_low_word(-0.0), 0x00000000);
  }

  #[test]
  fn one_and_a_half_f32() {
    assert_eq!(get_float_word(1.5), 0x3fc00000);
    assert_eq!(set_float_word(0x3fc00000), 1.5);
  }

  #[test]
  fn extremes() {
    assert_eq!(extract_words(f64::MAX), (0x7fefffff, 0xffffffff));
    assert_eq!(extract_words(f64::MIN_POSITIVE), (0x00100000, 0));
    assert_eq!(extract_words(f64::NEG_INFINITY), (0xfff00000, 0));
    assert_eq!(insert_words(0x000fffff, 0xffffffff), f64::from_bits(0x000f_ffff_ffff_ffff));
  }

  #[test]
  fn clear_low_word() {
    // The usual trick for splitting off the high half of a double's significand.
    let x = 1.0 + f64::EPSILON;
    assert_eq!(set_low_word(x, 0), 1.0);
  }

  #[test]
  fn nan_payload_kept() {
    let nan = insert_words(0x7ff80000, 0x00c0ffee);
    assert!(nan.is_nan());
    assert_eq!(extract_words(nan), (0x7ff80000, 0x00c0ffee));
  }

  #[test]
  fn words_ext() {
    let mut x = -0.0f64;
    x.set_low_word(1);
    assert_eq!(x.to_bits(), 0x8000_0000_0000_0001);
    x.set_high_word(0x3ff00000);
    assert_eq!(x.high_word(), 0x3ff00000);
    assert_eq!(x.low_word(), 1);
    assert_eq!(x, 1.0 + f64::EPSILON);
  }

  #[test]
  fn usable_in_const() {
    const TWO: f64 = set_high_word(1.0, 0x40000000);
    const HIGH: u32 = get_float_word(-2.0);
    assert_eq!(TWO, 2.0);
    assert_eq!(HIGH, 0xc0000000);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn roundtrip(value in crate::words::test::any_f64()) {
      let (high, low) = extract_words(value);
      prop_assert_eq!(insert_words(high, low).to_bits(), value.to_bits())
    }

    #[test]
    fn extract_agrees_with_get(value in crate::words::test::any_f64()) {
      prop_assert_eq!(extract_words(value), (get_high_word(value), get_low_word(value)))
    }

    #[test]
    fn set_high_keeps_low(value in crate::words::test::any_f64(), word: u32) {
      let new = set_high_word(value, word);
      prop_assert_eq!(get_low_word(new), get_low_word(value));
      prop_assert_eq!(get_high_word(new), word);
    }

    #[test]
    fn set_low_keeps_high(value in crate::words::test::any_f64(), word: u32) {
      let new = set_low_word(value, word);
      prop_assert_eq!(get_high_word(new), get_high_word(value));
      prop_assert_eq!(get_low_word(new), word);
    }

    #[test]
    fn high_word_is_significance_not_memory(value in crate::words::test::any_f64()) {
      prop_assert_eq!(get_high_word(value), (value.to_bits() >> 32) as u32);
      prop_assert_eq!(get_low_word(value), value.to_bits() as u32);
    }

    #[test]
    fn float_roundtrip(value in crate::words::test::any_f32()) {
      prop_assert_eq!(set_float_word(get_float_word(value)).to_bits(), value.to_bits())
    }

    #[test]
    fn float_word_roundtrip(word: u32) {
      prop_assert_eq!(get_float_word(set_float_word(word)), word)
    }
  }
}
