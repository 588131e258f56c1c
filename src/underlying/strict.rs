use super::*;

/// Return `value` rounded to the precision of its declared type `F`.
///
/// On every target with IEEE754 registers of the right width this is just a move. On 32-bit x86
/// without SSE2, arithmetic happens on the x87 stack in 80-bit registers, so intermediate results
/// may carry more precision than an `f32`/`f64`; there the value is forced through a memory slot
/// of type `F` with a volatile store and load, which the compiler may not elide.
///
/// ```
/// # use fdlibm_words::strict_assign;
/// let x = strict_assign(1.0f64 / 3.0);
/// assert_eq!(x, 1.0 / 3.0);
/// ```
#[cfg(all(target_arch = "x86", not(target_feature = "sse2")))]
#[inline]
pub fn strict_assign<F: Float>(value: F) -> F {
  let mut slot = core::mem::MaybeUninit::<F>::uninit();
  // SAFETY: `slot` is a properly aligned local of type `F`, which is written before it is read;
  // `F` is `Copy`, so nothing is dropped or duplicated.
  unsafe {
    core::ptr::write_volatile(slot.as_mut_ptr(), value);
    core::ptr::read_volatile(slot.as_ptr())
  }
}

/// Return `value` rounded to the precision of its declared type `F`.
///
/// On every target with IEEE754 registers of the right width this is just a move. On 32-bit x86
/// without SSE2, arithmetic happens on the x87 stack in 80-bit registers, so intermediate results
/// may carry more precision than an `f32`/`f64`; there the value is forced through a memory slot
/// of type `F` with a volatile store and load, which the compiler may not elide.
///
/// ```
/// # use fdlibm_words::strict_assign;
/// let x = strict_assign(1.0f64 / 3.0);
/// assert_eq!(x, 1.0 / 3.0);
/// ```
#[cfg(not(all(target_arch = "x86", not(target_feature = "sse2"))))]
#[inline(always)]
pub fn strict_assign<F: Float>(value: F) -> F {
  value
}
