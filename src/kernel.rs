//! The trigonometric kernels that fdlibm-style `sin`, `cos`, and `tan` are assembled from.
//!
//! This crate only fixes their signatures; an implementation lives with the math library that
//! uses the word accessors, and is plugged in by implementing [`TrigKernel`] for some type of its
//! own.

use crate::underlying::Float;

/// Which function [`TrigKernel::kernel_tan`] should compute.
#[derive(Clone, Copy)]
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum TanKind {
  /// `tan(x)`
  Tan,
  /// `-1 / tan(x)`
  NegCot,
}

/// The precision that [`TrigKernel::kernel_rem_pio2`] reduces to.
#[derive(Clone, Copy)]
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum RemPrecision {
  /// 24 bits
  Single,
  /// 53 bits
  Double,
  /// 64 bits
  Extended,
  /// 113 bits
  Quad,
}

impl RemPrecision {
  /// Number of significant bits of this precision.
  pub const fn significand_bits(self) -> u32 {
    match self {
      Self::Single => 24,
      Self::Double => 53,
      Self::Extended => 64,
      Self::Quad => 113,
    }
  }

  /// Number of terms of `2/π` that a reduction to this precision starts with.
  pub const fn initial_terms(self) -> usize {
    match self {
      Self::Single => 2,
      Self::Double => 3,
      Self::Extended => 4,
      Self::Quad => 6,
    }
  }

  /// Number of elements of the output slice `y` that [`TrigKernel::kernel_rem_pio2`] writes.
  pub const fn output_len(self) -> usize {
    match self {
      Self::Single => 1,
      Self::Double | Self::Extended => 2,
      Self::Quad => 3,
    }
  }
}

/// Range reduction and the sine, cosine, and tangent kernels, in precision `F`.
///
/// The kernels take an argument already reduced to `[-π/4, π/4]`, split as `x + y` where `y` is
/// the tail lost in reducing `x`.
pub trait TrigKernel<F: Float> {
  /// Reduce `x` modulo `π/2`. Returns `n` (the quadrant is `n mod 4`) and the reduced argument
  /// as a head and tail `[y0, y1]`, with `x = n·π/2 + y0 + y1`.
  fn rem_pio2(x: F) -> (i32, [F; 2]);

  /// `sin(x + y)`. If `iy` is `false`, `y` is assumed to be 0.
  fn kernel_sin(x: F, y: F, iy: bool) -> F;

  /// `cos(x + y)`.
  fn kernel_cos(x: F, y: F) -> F;

  /// `tan(x + y)` or `-1/tan(x + y)`, according to `kind`.
  fn kernel_tan(x: F, y: F, kind: TanKind) -> F;

  /// Multi-precision reduction of a large argument modulo `π/2`.
  ///
  /// `x` holds the argument as 24-bit chunks scaled by `2^-e0`, `ipio2` the digits of `2/π` in
  /// the same radix; the reduced value is written to the first [`RemPrecision::output_len`]
  /// elements of `y`. Returns `n mod 8`.
  fn kernel_rem_pio2(x: &[F], y: &mut [F], e0: i32, prec: RemPrecision, ipio2: &[i32]) -> i32;
}
