//! Monomorphic, unmangled copies of the accessors; available with feature = "bench".
//!
//! They exist so the generated code can be looked at with `cargo asm` (every accessor should be at
//! most a move or two between integer and float registers) and so the benches have a stable
//! non-inlined entry point to compare against.

use crate::{DoubleWords, FloatParts, DoubleParts};

#[unsafe(no_mangle)]
pub fn bench_extract_words(x: f64) -> (u32, u32) {
  crate::extract_words(x)
}

#[unsafe(no_mangle)]
pub fn bench_get_high_word(x: f64) -> u32 {
  crate::get_high_word(x)
}

#[unsafe(no_mangle)]
pub fn bench_get_low_word(x: f64) -> u32 {
  crate::get_low_word(x)
}

#[unsafe(no_mangle)]
pub fn bench_insert_words(high: u32, low: u32) -> f64 {
  crate::insert_words(high, low)
}

#[unsafe(no_mangle)]
pub fn bench_set_high_word(x: f64, high: u32) -> f64 {
  crate::set_high_word(x, high)
}

#[unsafe(no_mangle)]
pub fn bench_set_low_word(x: f64, low: u32) -> f64 {
  crate::set_low_word(x, low)
}

#[unsafe(no_mangle)]
pub fn bench_get_float_word(x: f32) -> u32 {
  crate::get_float_word(x)
}

#[unsafe(no_mangle)]
pub fn bench_set_float_word(word: u32) -> f32 {
  crate::set_float_word(word)
}

//

#[unsafe(no_mangle)]
pub fn bench_to_memory(x: f64) -> [u32; 2] {
  DoubleWords::from_f64(x).to_memory()
}

#[unsafe(no_mangle)]
pub fn bench_float_parts(x: f32) -> FloatParts {
  FloatParts::from(x)
}

#[unsafe(no_mangle)]
pub fn bench_double_parts(x: f64) -> DoubleParts {
  DoubleParts::from(x)
}
