use super::*;

impl FloatWord {
  /// View `value` as its word.
  #[inline]
  pub const fn from_f32(value: f32) -> Self {
    Self(value.to_bits())
  }

  /// Reinterpret this word as an `f32`.
  #[inline]
  pub const fn to_f32(self) -> f32 {
    f32::from_bits(self.0)
  }

  /// Wrap a raw word.
  #[inline]
  pub const fn from_bits(word: u32) -> Self {
    Self(word)
  }

  /// The raw word.
  #[inline]
  pub const fn to_bits(self) -> u32 {
    self.0
  }
}

impl From<f32> for FloatWord {
  #[inline]
  fn from(value: f32) -> Self {
    Self::from_f32(value)
  }
}

impl From<FloatWord> for f32 {
  #[inline]
  fn from(word: FloatWord) -> Self {
    word.to_f32()
  }
}
