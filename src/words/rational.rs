//! A **super-explicit** decoding of [`FloatParts`] and [`DoubleParts`] into exact [Rational]
//! values. This is what the field splitting is checked against: malachite's own conversion from
//! `f32`/`f64` knows nothing about our words, so agreeing with it means the fields are right.

use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

/// The exact value of a finite float given as `sign`, biased `exp`, and explicit `man`, in a
/// format with `man_bits` explicit mantissa bits and exponent bias `bias`.
fn exact(sign: bool, exp: u32, man: u64, man_bits: u32, bias: i32) -> Rational {
  // Subnormals (exp 0) have no hidden bit and the same scale as the smallest normal.
  let (significand, exp) = if exp == 0 {
    (man, 1)
  } else {
    (man | 1 << man_bits, exp as i64)
  };
  let scale = exp - bias as i64 - man_bits as i64;
  let abs = Rational::from(significand) * Rational::power_of_2(scale);
  if sign { -abs } else { abs }
}

impl FloatParts {
  /// Exact value of these fields. Panics on infinities and NaNs.
  pub(crate) fn into_rational(self) -> Rational {
    assert!(self.exp != 0xff, "Should not pass {self:?} to into_rational");
    exact(self.sign, self.exp, self.man.into(), Self::MAN_BITS, Self::EXP_BIAS)
  }
}

impl DoubleParts {
  /// Exact value of these fields. Panics on infinities and NaNs.
  pub(crate) fn into_rational(self) -> Rational {
    assert!(self.exp != 0x7ff, "Should not pass {self:?} to into_rational");
    exact(self.sign, self.exp, self.man(), Self::MAN_HI_BITS + Self::MAN_LO_BITS, Self::EXP_BIAS)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn one() {
    assert_eq!(FloatParts::from(1.0f32).into_rational(), Rational::from(1u32));
    assert_eq!(DoubleParts::from(1.0f64).into_rational(), Rational::from(1u32));
  }

  #[test]
  fn minus_three_halves() {
    assert_eq!(DoubleParts::from(-1.5f64).into_rational(), Rational::from(-3i32) / Rational::from(2i32));
  }

  #[test]
  fn smallest_subnormal() {
    let tiny = DoubleParts::from(f64::from_bits(1)).into_rational();
    assert_eq!(tiny, Rational::power_of_2(-1074i64));
    let tiny = FloatParts::from(f32::from_bits(1)).into_rational();
    assert_eq!(tiny, Rational::power_of_2(-149i64));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn float_parts_exact(value in crate::words::test::finite_f32()) {
      let expected = Rational::try_from(value).unwrap();
      prop_assert_eq!(FloatParts::from(value).into_rational(), expected)
    }

    #[test]
    fn double_parts_exact(value in crate::words::test::finite_f64()) {
      let expected = Rational::try_from(value).unwrap();
      prop_assert_eq!(DoubleParts::from(value).into_rational(), expected)
    }
  }
}
