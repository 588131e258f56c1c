//! Views of IEEE754 values as their raw 32-bit words.
//!
//! A [`DoubleWords`] is an `f64` seen as two `u32`s, a [`FloatWord`] is an `f32` seen as one
//! `u32`, and [`FloatParts`] / [`DoubleParts`] split those words further into their sign,
//! exponent, and mantissa fields. All of them are plain values: building one copies the bits out
//! of the float (via the standard library's safe same-size conversions, never a pointer cast),
//! and converting back copies them in again. Every bit pattern is accepted, including NaNs with
//! arbitrary payloads, infinities, and subnormals, and is passed through unchanged.
//!
//! Some notation used in the comments:
//!
//!   - **msw / high word**: the word with the sign bit, the exponent, and the top 20 mantissa
//!     bits of a double.
//!   - **lsw / low word**: the word with the bottom 32 mantissa bits of a double.
//!   - **Memory order**: the order in which the two words actually sit in memory, which depends on
//!     [`crate::layout::BYTE_ORDER`]. Only [`DoubleWords::to_memory`] exposes it.

/// An `f64` viewed as two 32-bit words.
///
/// The words are stored in the same order as in the memory of the `f64`, but the accessors
/// ([`Self::msw`], [`Self::lsw`], …) always address them by significance, so callers never see
/// the byte order of the target.
///
/// ```
/// # use fdlibm_words::DoubleWords;
/// let w = DoubleWords::from_f64(1.0);
/// assert_eq!(w.msw(), 0x3ff00000);
/// assert_eq!(w.lsw(), 0x00000000);
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]  // Bitwise, so NaNs with equal payloads compare equal
#[repr(transparent)]
pub struct DoubleWords([u32; 2]);

/// An `f32` viewed as one 32-bit word.
///
/// ```
/// # use fdlibm_words::FloatWord;
/// assert_eq!(FloatWord::from_f32(1.5).to_bits(), 0x3fc00000);
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct FloatWord(u32);

/// An `f32` split into its sign, biased exponent, and explicit mantissa fields (1, 8, and 23 bits
/// wide, most significant first).
///
/// Fields are only ever as wide as their bitfield: constructing one from wider values with
/// [`FloatParts::new`] is an error.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct FloatParts {
  sign: bool,
  exp: u32,
  man: u32,
}

/// An `f64` split into its sign, biased exponent, and explicit mantissa fields (1, 11, and 52
/// bits wide). The mantissa is kept as the 20 bits that live in the high word plus the 32 bits of
/// the low word.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct DoubleParts {
  sign: bool,
  exp: u32,
  man_hi: u32,
  man_lo: u32,
}

/// The error returned when a [`FloatParts`] or [`DoubleParts`] field is given a value that does
/// not fit in its bitfield.
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub struct FieldOverflow {
  /// Name of the offending field.
  pub field: &'static str,
  /// Width of that field, in bits.
  pub width: u32,
  /// The value that didn't fit.
  pub value: u32,
}

impl core::fmt::Display for FieldOverflow {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "value {:#x} does not fit in the {}-bit `{}` field", self.value, self.width, self.field)
  }
}

impl core::error::Error for FieldOverflow {}

/// `DoubleWords`
mod double;

/// `FloatWord`
mod float;

/// `FloatParts` and `DoubleParts`
mod parts;

/// Debug formatting
mod fmt;

/// Exact decoding via [`malachite`], used as a test oracle
#[cfg(test)]
mod rational;
