use super::*;

impl FloatParts {
  /// Width of the sign field.
  pub const SIGN_BITS: u32 = 1;

  /// Width of the biased exponent field.
  pub const EXP_BITS: u32 = 8;

  /// Width of the explicit mantissa field (the hidden bit is not stored).
  pub const MAN_BITS: u32 = 23;

  /// Bias of the exponent field: a normal value is `1.man × 2^(exp - EXP_BIAS)`.
  pub const EXP_BIAS: i32 = (1 << (Self::EXP_BITS - 1)) - 1;

  const EXP_MASK: u32 = (1 << Self::EXP_BITS) - 1;
  const MAN_MASK: u32 = (1 << Self::MAN_BITS) - 1;

  /// Total width of the fields, which must be exactly one word.
  const WIDTH: u32 = {
    let width = Self::SIGN_BITS + Self::EXP_BITS + Self::MAN_BITS;
    assert!(width == u32::BITS, "The fields of an f32 must add up to exactly 32 bits");
    width
  };

  /// Assemble from individual fields, which must each fit in their bitfield.
  pub const fn new(sign: bool, exp: u32, man: u32) -> Result<Self, FieldOverflow> {
    if exp > Self::EXP_MASK {
      return Err(FieldOverflow { field: "exp", width: Self::EXP_BITS, value: exp })
    }
    if man > Self::MAN_MASK {
      return Err(FieldOverflow { field: "man", width: Self::MAN_BITS, value: man })
    }
    Ok(Self { sign, exp, man })
  }

  /// Split a word into its fields.
  #[inline]
  pub const fn from_word(word: FloatWord) -> Self {
    let w = word.to_bits();
    Self {
      sign: w >> (Self::WIDTH - Self::SIGN_BITS) != 0,
      exp: (w >> Self::MAN_BITS) & Self::EXP_MASK,
      man: w & Self::MAN_MASK,
    }
  }

  /// Join the fields back into a word.
  #[inline]
  pub const fn to_word(self) -> FloatWord {
    let sign = (self.sign as u32) << (Self::WIDTH - Self::SIGN_BITS);
    FloatWord::from_bits(sign | self.exp << Self::MAN_BITS | self.man)
  }

  /// `true` if the sign bit is set (including for `-0.0` and negative NaNs).
  #[inline]
  pub const fn sign(self) -> bool {
    self.sign
  }

  /// The biased exponent field, in `0 ..= 0xff`.
  #[inline]
  pub const fn exp(self) -> u32 {
    self.exp
  }

  /// The explicit mantissa field, in `0 ..= 0x7f_ffff`.
  #[inline]
  pub const fn man(self) -> u32 {
    self.man
  }
}

impl DoubleParts {
  /// Width of the sign field.
  pub const SIGN_BITS: u32 = 1;

  /// Width of the biased exponent field.
  pub const EXP_BITS: u32 = 11;

  /// Width of the part of the mantissa that lives in the high word.
  pub const MAN_HI_BITS: u32 = 20;

  /// Width of the part of the mantissa that lives in the low word.
  pub const MAN_LO_BITS: u32 = 32;

  /// Bias of the exponent field: a normal value is `1.man × 2^(exp - EXP_BIAS)`.
  pub const EXP_BIAS: i32 = (1 << (Self::EXP_BITS - 1)) - 1;

  const EXP_MASK: u32 = (1 << Self::EXP_BITS) - 1;
  const MAN_HI_MASK: u32 = (1 << Self::MAN_HI_BITS) - 1;

  /// Width of the fields in the high word, which must be exactly one word.
  const HIGH_WIDTH: u32 = {
    let width = Self::SIGN_BITS + Self::EXP_BITS + Self::MAN_HI_BITS;
    assert!(width == u32::BITS, "The high word of an f64 must hold exactly sign, exp, and 20 bits of mantissa");
    assert!(Self::MAN_LO_BITS == u32::BITS);
    width
  };

  /// Assemble from individual fields, which must each fit in their bitfield. `man_lo` always
  /// fits.
  pub const fn new(sign: bool, exp: u32, man_hi: u32, man_lo: u32) -> Result<Self, FieldOverflow> {
    if exp > Self::EXP_MASK {
      return Err(FieldOverflow { field: "exp", width: Self::EXP_BITS, value: exp })
    }
    if man_hi > Self::MAN_HI_MASK {
      return Err(FieldOverflow { field: "man_hi", width: Self::MAN_HI_BITS, value: man_hi })
    }
    Ok(Self { sign, exp, man_hi, man_lo })
  }

  /// Split a double's words into fields.
  #[inline]
  pub const fn from_words(words: DoubleWords) -> Self {
    let msw = words.msw();
    Self {
      sign: msw >> (Self::HIGH_WIDTH - Self::SIGN_BITS) != 0,
      exp: (msw >> Self::MAN_HI_BITS) & Self::EXP_MASK,
      man_hi: msw & Self::MAN_HI_MASK,
      man_lo: words.lsw(),
    }
  }

  /// Join the fields back into a double's words.
  #[inline]
  pub const fn to_words(self) -> DoubleWords {
    let sign = (self.sign as u32) << (Self::HIGH_WIDTH - Self::SIGN_BITS);
    DoubleWords::from_words(sign | self.exp << Self::MAN_HI_BITS | self.man_hi, self.man_lo)
  }

  /// `true` if the sign bit is set (including for `-0.0` and negative NaNs).
  #[inline]
  pub const fn sign(self) -> bool {
    self.sign
  }

  /// The biased exponent field, in `0 ..= 0x7ff`.
  #[inline]
  pub const fn exp(self) -> u32 {
    self.exp
  }

  /// The top 20 bits of the mantissa.
  #[inline]
  pub const fn man_hi(self) -> u32 {
    self.man_hi
  }

  /// The bottom 32 bits of the mantissa.
  #[inline]
  pub const fn man_lo(self) -> u32 {
    self.man_lo
  }

  /// The whole 52-bit explicit mantissa.
  #[inline]
  pub const fn man(self) -> u64 {
    (self.man_hi as u64) << Self::MAN_LO_BITS | self.man_lo as u64
  }
}

//

impl From<FloatWord> for FloatParts {
  fn from(word: FloatWord) -> Self { Self::from_word(word) }
}

impl From<FloatParts> for FloatWord {
  fn from(parts: FloatParts) -> Self { parts.to_word() }
}

impl From<f32> for FloatParts {
  fn from(value: f32) -> Self { Self::from_word(FloatWord::from_f32(value)) }
}

impl From<FloatParts> for f32 {
  fn from(parts: FloatParts) -> Self { parts.to_word().to_f32() }
}

impl From<DoubleWords> for DoubleParts {
  fn from(words: DoubleWords) -> Self { Self::from_words(words) }
}

impl From<DoubleParts> for DoubleWords {
  fn from(parts: DoubleParts) -> Self { parts.to_words() }
}

impl From<f64> for DoubleParts {
  fn from(value: f64) -> Self { Self::from_words(DoubleWords::from_f64(value)) }
}

impl From<DoubleParts> for f64 {
  fn from(parts: DoubleParts) -> Self { parts.to_words().to_f64() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn float_one_and_a_half() {
    let parts = FloatParts::from(1.5f32);
    assert!(!parts.sign());
    assert_eq!(parts.exp(), 127);
    assert_eq!(parts.man(), 0x40_0000);
  }

  #[test]
  fn float_minus_zero() {
    assert_eq!(FloatParts::from(-0.0f32), FloatParts::new(true, 0, 0).unwrap());
  }

  #[test]
  fn float_infinity_and_nan() {
    let inf = FloatParts::from(f32::NEG_INFINITY);
    assert!(inf.sign());
    assert_eq!((inf.exp(), inf.man()), (0xff, 0));
    let nan = FloatParts::from(f32::from_bits(0x7fa00001));
    assert_eq!((nan.exp(), nan.man()), (0xff, 0x20_0001));
  }

  #[test]
  fn float_new_overflow() {
    assert_eq!(
      FloatParts::new(false, 0x100, 0),
      Err(FieldOverflow { field: "exp", width: 8, value: 0x100 }),
    );
    assert_eq!(
      FloatParts::new(false, 0, 0x80_0000),
      Err(FieldOverflow { field: "man", width: 23, value: 0x80_0000 }),
    );
    assert!(FloatParts::new(true, 0xff, 0x7f_ffff).is_ok());
  }

  #[test]
  fn double_one() {
    let parts = DoubleParts::from(1.0f64);
    assert!(!parts.sign());
    assert_eq!(parts.exp(), 1023);
    assert_eq!(parts.man(), 0);
  }

  #[test]
  fn double_fields() {
    // 0x400921fb_54442d18 is π.
    let parts = DoubleParts::from(core::f64::consts::PI);
    assert_eq!(parts.exp(), 0x400);
    assert_eq!(parts.man_hi(), 0x921fb);
    assert_eq!(parts.man_lo(), 0x54442d18);
    assert_eq!(parts.man(), 0x921fb_54442d18);
  }

  #[test]
  fn double_new_overflow() {
    assert_eq!(
      DoubleParts::new(false, 0x800, 0, 0),
      Err(FieldOverflow { field: "exp", width: 11, value: 0x800 }),
    );
    assert_eq!(
      DoubleParts::new(false, 0, 0x10_0000, 0),
      Err(FieldOverflow { field: "man_hi", width: 20, value: 0x10_0000 }),
    );
    assert_eq!(f64::from(DoubleParts::new(true, 0x7ff, 0, 0).unwrap()), f64::NEG_INFINITY);
  }

  #[test]
  fn overflow_display() {
    let err = FloatParts::new(false, 0x1ff, 0).unwrap_err();
    assert_eq!(err.to_string(), "value 0x1ff does not fit in the 8-bit `exp` field");
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn float_roundtrip(word: u32) {
      let word = FloatWord::from_bits(word);
      prop_assert_eq!(FloatParts::from(word).to_word(), word)
    }

    #[test]
    fn float_new_accepts_own_fields(value in crate::words::test::any_f32()) {
      let parts = FloatParts::from(value);
      prop_assert_eq!(FloatParts::new(parts.sign(), parts.exp(), parts.man()), Ok(parts))
    }

    #[test]
    fn double_roundtrip(value in crate::words::test::any_f64()) {
      prop_assert_eq!(f64::from(DoubleParts::from(value)).to_bits(), value.to_bits())
    }

    #[test]
    fn double_matches_bits(value in crate::words::test::any_f64()) {
      let bits = value.to_bits();
      let parts = DoubleParts::from(value);
      prop_assert_eq!(parts.sign(), bits >> 63 != 0);
      prop_assert_eq!(parts.exp() as u64, (bits >> 52) & 0x7ff);
      prop_assert_eq!(parts.man(), bits & ((1 << 52) - 1));
    }
  }
}
