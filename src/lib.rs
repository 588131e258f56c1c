#![cfg_attr(not(test), no_std)]
//! This crate provides endian-correct, undefined-behaviour-free access to the raw 32-bit words of
//! IEEE754 `f64` and `f32` values: the primitive that fdlibm-style implementations of `sin`,
//! `exp`, `lgamma`, the Bessel functions, etc. are written against.
//!
//! # Introduction
//!
//! Classic libm code digs into doubles word by word: it reads the *high word* (sign, exponent,
//! and top 20 mantissa bits) to classify an argument, clears the *low word* to split a value into
//! head and tail, and so on. In C this is done with a union overlaying a `double` and two
//! `uint32_t`s, whose field order has to be flipped by hand on each byte order. Here the same
//! views are plain values built with the standard library's safe bit conversions, and the byte
//! order is settled once, at compile time: the high word is always the high word, whatever the
//! target.
//!
//! # Usage
//!
//! ```
//! use fdlibm_words::{extract_words, get_high_word, insert_words, set_low_word};
//! use fdlibm_words::{get_float_word, set_float_word};
//!
//! // Classify by the high word, as fdlibm does.
//! let x = 1.0e300_f64;
//! let ix = get_high_word(x) & 0x7fffffff;
//! assert!(ix >= 0x41e00000);  // |x| >= 2^31
//!
//! // Split into words and back.
//! let (high, low) = extract_words(-0.0);
//! assert_eq!((high, low), (0x80000000, 0));
//! assert_eq!(insert_words(high, low).to_bits(), (-0.0f64).to_bits());
//!
//! // Keep only the top 21 bits of mantissa.
//! assert_eq!(set_low_word(1.0 + f64::EPSILON, 0), 1.0);
//!
//! // Single precision has a single word.
//! assert_eq!(get_float_word(1.5), 0x3fc00000);
//! assert_eq!(set_float_word(0x3fc00000), 1.5);
//! ```
//!
//! The views themselves ([`DoubleWords`], [`FloatWord`], [`FloatParts`], [`DoubleParts`]) are
//! public too, and so are the name table for the [elementary functions](Elementary) and the
//! [trigonometric kernel interface](TrigKernel) built on top of them.
//!
//! # Performance
//!
//! Every accessor is a `const fn` and compiles to at most a move between an integer and a float
//! register. This crate includes benchmarks; run them with `cargo bench -F bench`.

mod access;
mod elementary;
mod kernel;
mod layout;
mod underlying;
mod words;

pub use access::{
  extract_words, get_high_word, get_low_word,
  insert_words, set_high_word, set_low_word,
  get_float_word, set_float_word,
  WordsExt,
};
pub use elementary::{Elementary, Precision, SYMBOL_PREFIX, REFERENCE_PREFIX};
pub use kernel::{TrigKernel, TanKind, RemPrecision};
pub use layout::{ByteOrder, BYTE_ORDER};
pub use underlying::{Float, strict_assign};
pub use words::{DoubleWords, FloatWord, FloatParts, DoubleParts, FieldOverflow};

/// Monomorphic exports of the accessors for benchmarking, only on `feature = "bench"`.
#[cfg(feature = "bench")]
pub mod bench;

/// Number of cases for each `proptest`.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x4000 } else { 0x4_0000 };
