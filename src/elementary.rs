//! The elementary-function entry points that are built on top of the word accessors, and the
//! names they go by.
//!
//! Every entry point has three names, in each [`Precision`]:
//!
//!   - its **canonical** C name (`sqrt`, `sqrtf`);
//!   - its **reference** symbol, the `__ieee754_`-prefixed name it has in fdlibm and its
//!     descendants (`__ieee754_sqrt`, `__ieee754_sqrtf`);
//!   - its **own** symbol, prefixed with [`SYMBOL_PREFIX`] (`fdw_sqrt`, `fdw_sqrtf`).
//!
//! Implementations of these functions should be exported under their own symbol, so that they can
//! be linked side by side with a reference libm and compared against it.
//!
//! ```
//! # use fdlibm_words::{Elementary, Precision};
//! assert_eq!(Elementary::Lgamma_r.canonical_name(Precision::Single), "lgammaf_r");
//! assert_eq!(Elementary::Lgamma_r.reference_symbol(Precision::Single), "__ieee754_lgammaf_r");
//! assert_eq!(Elementary::Lgamma_r.symbol(Precision::Single), "fdw_lgammaf_r");
//! ```

use crate::underlying::Float;

/// Whether an entry point operates on `f32` or `f64`.
#[derive(Clone, Copy)]
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum Precision {
  /// `f32`
  Single,
  /// `f64`
  Double,
}

impl Precision {
  /// Both precisions, single first.
  pub const ALL: [Self; 2] = [Self::Single, Self::Double];

  /// The precision of the float type `F`.
  #[inline]
  pub const fn of<F: Float>() -> Self {
    F::PRECISION
  }
}

/// Generates [`Elementary`] and its name tables from one line per entry point: the variant, then
/// the canonical double and single precision names.
macro_rules! elementary_table {
  (
    prefix: $prefix:literal,
    reference_prefix: $reference:literal,
    $($variant:ident => $double:ident, $single:ident;)*
  ) => {
    /// Prefix of this crate's own symbols for elementary functions.
    pub const SYMBOL_PREFIX: &str = $prefix;

    /// Prefix of the reference library's symbols for elementary functions.
    pub const REFERENCE_PREFIX: &str = $reference;

    /// An elementary-function entry point.
    #[derive(Clone, Copy)]
    #[derive(Debug, Eq, PartialEq, Hash)]
    #[allow(non_camel_case_types)]
    pub enum Elementary {
      $(
        #[doc = concat!("`", stringify!($double), "` / `", stringify!($single), "`")]
        $variant,
      )*
    }

    impl Elementary {
      /// Every entry point.
      pub const ALL: &'static [Self] = &[$(Self::$variant),*];

      /// The C name of this function in `precision`, e.g. `"sqrt"` / `"sqrtf"`.
      pub const fn canonical_name(self, precision: Precision) -> &'static str {
        match (self, precision) {
          $(
            (Self::$variant, Precision::Double) => stringify!($double),
            (Self::$variant, Precision::Single) => stringify!($single),
          )*
        }
      }

      /// The name of this function in the reference library, e.g. `"__ieee754_sqrt"`.
      pub const fn reference_symbol(self, precision: Precision) -> &'static str {
        match (self, precision) {
          $(
            (Self::$variant, Precision::Double) => concat!($reference, stringify!($double)),
            (Self::$variant, Precision::Single) => concat!($reference, stringify!($single)),
          )*
        }
      }

      /// The name of this crate's own implementation, e.g. `"fdw_sqrt"`.
      pub const fn symbol(self, precision: Precision) -> &'static str {
        match (self, precision) {
          $(
            (Self::$variant, Precision::Double) => concat!($prefix, stringify!($double)),
            (Self::$variant, Precision::Single) => concat!($prefix, stringify!($single)),
          )*
        }
      }
    }
  }
}

elementary_table!{
  prefix: "fdw_",
  reference_prefix: "__ieee754_",
  Sqrt => sqrt, sqrtf;
  Acos => acos, acosf;
  Acosh => acosh, acoshf;
  Log => log, logf;
  Atanh => atanh, atanhf;
  Asin => asin, asinf;
  Atan2 => atan2, atan2f;
  Exp => exp, expf;
  Cosh => cosh, coshf;
  Fmod => fmod, fmodf;
  Pow => pow, powf;
  Lgamma => lgamma, lgammaf;
  Gamma => gamma, gammaf;
  Lgamma_r => lgamma_r, lgammaf_r;
  Gamma_r => gamma_r, gammaf_r;
  Log10 => log10, log10f;
  Sinh => sinh, sinhf;
  Hypot => hypot, hypotf;
  J0 => j0, j0f;
  J1 => j1, j1f;
  Y0 => y0, y0f;
  Y1 => y1, y1f;
  Jn => jn, jnf;
  Yn => yn, ynf;
  Remainder => remainder, remainderf;
  Scalb => scalb, scalbf;
}

impl Elementary {
  /// Look up an entry point by its canonical name, in either precision.
  ///
  /// ```
  /// # use fdlibm_words::{Elementary, Precision};
  /// assert_eq!(Elementary::from_canonical("jnf"), Some((Elementary::Jn, Precision::Single)));
  /// assert_eq!(Elementary::from_canonical("sin"), None);
  /// ```
  pub fn from_canonical(name: &str) -> Option<(Self, Precision)> {
    Self::ALL.iter()
      .flat_map(|&f| Precision::ALL.map(|p| (f, p)))
      .find(|&(f, p)| f.canonical_name(p) == name)
  }

  /// As [`Self::symbol`], with the precision taken from the float type `F`.
  #[inline]
  pub const fn symbol_for<F: Float>(self) -> &'static str {
    self.symbol(Precision::of::<F>())
  }
}
