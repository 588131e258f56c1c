//! The machine float types this crate knows how to take apart. Users only see the sealed
//! [`Float`] trait, implemented for `f32` and `f64`.

use crate::elementary::Precision;
use crate::words::{DoubleWords, FloatWord};

/// The trait for the IEEE754 binary floating point types whose words can be accessed (only
/// satisfied by `f32` and `f64`).
///
/// This is a *sealed* type.
pub trait Float: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  PartialEq + PartialOrd +
  core::fmt::Debug + Default
{
  /// The unsigned integer with the same width, i.e. the type of [`Self::to_bits`].
  type Bits: Copy + Eq + core::fmt::LowerHex + core::fmt::Debug;

  /// The word view of this type.
  type Words: Copy + Eq + core::fmt::Debug + From<Self> + Into<Self>;

  /// Width in bits.
  const BITS: u32;

  /// Number of 32-bit words in the representation.
  const WORDS: usize = {
    assert!(Self::BITS % u32::BITS == 0, "A float must be made of whole words");
    (Self::BITS / u32::BITS) as usize
  };

  /// Which set of entry points this type belongs to.
  const PRECISION: Precision;

  fn to_bits(self) -> Self::Bits;
  fn from_bits(bits: Self::Bits) -> Self;

  #[inline]
  fn to_words(self) -> Self::Words {
    Self::Words::from(self)
  }

  #[inline]
  fn from_words(words: Self::Words) -> Self {
    words.into()
  }
}

macro_rules! impl_float {
  ($float:ty, $bits:ty, $words:ty, $precision:expr) => {
    impl Sealed for $float {
      type Bits = $bits;
      type Words = $words;

      const BITS: u32 = <$bits>::BITS;
      const PRECISION: Precision = $precision;

      #[inline]
      fn to_bits(self) -> $bits { <$float>::to_bits(self) }

      #[inline]
      fn from_bits(bits: $bits) -> Self { <$float>::from_bits(bits) }
    }

    impl Float for $float {}
  }
}

impl_float!{f32, u32, FloatWord, Precision::Single}
impl_float!{f64, u64, DoubleWords, Precision::Double}

/// Forcing values to their declared precision
mod strict;

pub use strict::strict_assign;
