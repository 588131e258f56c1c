use super::*;

use core::fmt::Debug;

impl Debug for DoubleWords {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("DoubleWords")
      .field("msw", &format_args!("{:#010x}", self.msw()))
      .field("lsw", &format_args!("{:#010x}", self.lsw()))
      .finish()
  }
}

impl Debug for FloatWord {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("FloatWord")
      .field(&format_args!("{:#010x}", self.0))
      .finish()
  }
}

impl Debug for FloatParts {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let sign = self.sign as u32;
    let exp = self.exp;
    let man = self.man;
    f.debug_tuple("FloatParts")
      .field(&format_args!("0b{sign:b}_{exp:0we$b}_{man:0wm$b}",
        we=Self::EXP_BITS as usize, wm=Self::MAN_BITS as usize,
      ))
      .finish()
  }
}

impl Debug for DoubleParts {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let exp = self.exp;
    let man_hi = self.man_hi;
    let man_lo = self.man_lo;
    f.debug_struct("DoubleParts")
      .field("sign", &(self.sign as u32))
      .field("exp", &format_args!("0b{exp:0w$b}", w=Self::EXP_BITS as usize))
      .field("man", &format_args!("0x{man_hi:05x}_{man_lo:08x}"))
      .finish()
  }
}
