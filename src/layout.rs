//! Byte order of the compilation target, and where the most and least significant words of a
//! double sit in memory because of it.
//!
//! Everything here is a `const`, resolved once when the crate is compiled. Nothing in this crate
//! branches on byte order at runtime.

/// The order in which the two 32-bit words of a double are laid out in memory.
#[derive(Clone, Copy)]
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum ByteOrder {
  /// Most significant word at the lower address.
  BigEndian,
  /// Least significant word at the lower address.
  LittleEndian,
}

/// The byte order of the target this crate was compiled for.
///
/// Targets configured as `target_endian = "big"` get [`ByteOrder::BigEndian`]; every other
/// target is assumed to be [`ByteOrder::LittleEndian`].
#[cfg(target_endian = "big")]
pub const BYTE_ORDER: ByteOrder = ByteOrder::BigEndian;

/// The byte order of the target this crate was compiled for.
///
/// Targets configured as `target_endian = "big"` get [`ByteOrder::BigEndian`]; every other
/// target is assumed to be [`ByteOrder::LittleEndian`].
#[cfg(not(target_endian = "big"))]
pub const BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;

impl ByteOrder {
  /// Index of the most significant word, when a double is viewed as `[u32; 2]` in memory order.
  #[inline]
  pub const fn msw_index(self) -> usize {
    match self {
      Self::BigEndian => 0,
      Self::LittleEndian => 1,
    }
  }

  /// Index of the least significant word, when a double is viewed as `[u32; 2]` in memory order.
  #[inline]
  pub const fn lsw_index(self) -> usize {
    1 - self.msw_index()
  }
}

/// Memory index of the most significant word of a double on this target.
pub(crate) const MSW: usize = BYTE_ORDER.msw_index();

/// Memory index of the least significant word of a double on this target.
pub(crate) const LSW: usize = BYTE_ORDER.lsw_index();
