//! The four division strategies and their shared contract.
//!
//! | Strategy | Bit order | Per-byte cost | Table |
//! |----------|-----------|---------------|-------|
//! | [`BitShiftMsb`] | MSB-first | 8 shift/xor steps | - |
//! | [`BitShiftLsb`] | LSB-first | 8 shift/xor steps | - |
//! | [`Table256Msb`] | MSB-first | 1 lookup | 256 entries |
//! | [`Table256Lsb`] | LSB-first | 1 lookup | 256 entries |
//!
//! The bit-shift strategies cost no memory and suit tight embedded targets.
//! The table strategies trade `256 * size_of::<W>()` bytes for throughput.
//! For the same parameters every strategy produces the same checksum.

use core::fmt;

use crate::{bits, kernels, register::Register, tables};

/// Strategy selector, used for introspection and runtime construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// Bit-at-a-time division, most significant bit first.
  BitShiftMsb,
  /// Bit-at-a-time division over a reflected register.
  BitShiftLsb,
  /// 256-entry table division, most significant bit first.
  Table256Msb,
  /// 256-entry table division over a reflected register.
  Table256Lsb,
}

impl Algorithm {
  /// Every strategy, in declaration order.
  pub const ALL: [Self; 4] = [Self::BitShiftMsb, Self::BitShiftLsb, Self::Table256Msb, Self::Table256Lsb];

  /// True for strategies that keep the register in natural order.
  #[inline]
  #[must_use]
  pub const fn is_msb_first(self) -> bool {
    matches!(self, Self::BitShiftMsb | Self::Table256Msb)
  }

  /// True for strategies that need a lookup table.
  #[inline]
  #[must_use]
  pub const fn uses_table(self) -> bool {
    matches!(self, Self::Table256Msb | Self::Table256Lsb)
  }

  #[inline]
  #[must_use]
  pub const fn bit_order(self) -> BitOrder {
    if self.is_msb_first() { BitOrder::MsbFirst } else { BitOrder::LsbFirst }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::BitShiftMsb => "bitshift-msb",
      Self::BitShiftLsb => "bitshift-lsb",
      Self::Table256Msb => "table256-msb",
      Self::Table256Lsb => "table256-lsb",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Direction in which a strategy consumes register bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOrder {
  /// Top bit of the register is the current bit.
  MsbFirst,
  /// Bit 0 of the register is the current bit; the register is reflected.
  LsbFirst,
}

/// A division algorithm bound to one polynomial, width and input order.
///
/// `advance` processes `data` in order and returns the updated register,
/// without output reflection or xor-out. An empty `data` returns `register`
/// unchanged.
pub trait Strategy {
  /// Backing integer of the register.
  type Register: Register;

  /// Which of the four algorithms this is.
  const ALGORITHM: Algorithm;

  /// Advance the register over `data`.
  fn advance(&self, register: Self::Register, data: &[u8]) -> Self::Register;
}

/// Bit-at-a-time MSB-first strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitShiftMsb<W> {
  /// Polynomial in byte-aligned position.
  poly: W,
  width: u8,
  reflect_in: bool,
}

/// Bit-at-a-time LSB-first strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitShiftLsb<W> {
  /// Polynomial reflected over `width` bits.
  poly: W,
  width: u8,
  reflect_in: bool,
}

/// 256-entry table MSB-first strategy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Table256Msb<W> {
  table: [W; 256],
  width: u8,
  reflect_in: bool,
}

/// 256-entry table LSB-first strategy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Table256Lsb<W> {
  table: [W; 256],
  width: u8,
  reflect_in: bool,
}

macro_rules! impl_strategy_ctors {
  ($($ty:ty => $module:ident;)+) => {
    $(
      impl BitShiftMsb<$ty> {
        /// Bind `poly` (natural order) of `width` bits.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn new(poly: $ty, width: u8, reflect_in: bool) -> Self {
          bits::assert_width(width, <$ty>::BITS);
          Self { poly: kernels::$module::align_poly(poly, width), width, reflect_in }
        }
      }

      impl BitShiftLsb<$ty> {
        /// Bind `poly` (natural order) of `width` bits.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn new(poly: $ty, width: u8, reflect_in: bool) -> Self {
          bits::assert_width(width, <$ty>::BITS);
          Self { poly: kernels::$module::reflect_poly(poly, width), width, reflect_in }
        }
      }

      impl Table256Msb<$ty> {
        /// Bind `poly` (natural order) of `width` bits and build its table.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn new(poly: $ty, width: u8, reflect_in: bool) -> Self {
          bits::assert_width(width, <$ty>::BITS);
          Self { table: tables::$module::msb_table(poly, width), width, reflect_in }
        }
      }

      impl Table256Lsb<$ty> {
        /// Bind `poly` (natural order) of `width` bits and build its table.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn new(poly: $ty, width: u8, reflect_in: bool) -> Self {
          bits::assert_width(width, <$ty>::BITS);
          Self { table: tables::$module::lsb_table(poly, width), width, reflect_in }
        }
      }
    )+
  };
}

impl_strategy_ctors! {
  u8 => w8;
  u16 => w16;
  u32 => w32;
  u64 => w64;
}

impl<W: Register> Table256Msb<W> {
  /// The lookup table, in byte-aligned form.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[W; 256] {
    &self.table
  }
}

impl<W: Register> Table256Lsb<W> {
  /// The lookup table, built from the reflected polynomial.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[W; 256] {
    &self.table
  }
}

impl<W: Register> Strategy for BitShiftMsb<W> {
  type Register = W;
  const ALGORITHM: Algorithm = Algorithm::BitShiftMsb;

  #[inline]
  fn advance(&self, register: W, data: &[u8]) -> W {
    W::bitshift_msb(register, data, self.poly, self.width, self.reflect_in)
  }
}

impl<W: Register> Strategy for BitShiftLsb<W> {
  type Register = W;
  const ALGORITHM: Algorithm = Algorithm::BitShiftLsb;

  #[inline]
  fn advance(&self, register: W, data: &[u8]) -> W {
    W::bitshift_lsb(register, data, self.poly, self.width, self.reflect_in)
  }
}

impl<W: Register> Strategy for Table256Msb<W> {
  type Register = W;
  const ALGORITHM: Algorithm = Algorithm::Table256Msb;

  #[inline]
  fn advance(&self, register: W, data: &[u8]) -> W {
    W::table_msb(register, data, &self.table, self.width, self.reflect_in)
  }
}

impl<W: Register> Strategy for Table256Lsb<W> {
  type Register = W;
  const ALGORITHM: Algorithm = Algorithm::Table256Lsb;

  #[inline]
  fn advance(&self, register: W, data: &[u8]) -> W {
    W::table_lsb(register, data, &self.table, self.width, self.reflect_in)
  }
}

// Tables are 256 entries; print the shape instead.
impl<W: Register> fmt::Debug for Table256Msb<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table256Msb")
      .field("table", &format_args!("[{:#x}, {:#x}, ..; 256]", self.table[0], self.table[1]))
      .field("width", &self.width)
      .field("reflect_in", &self.reflect_in)
      .finish()
  }
}

impl<W: Register> fmt::Debug for Table256Lsb<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table256Lsb")
      .field("table", &format_args!("[{:#x}, {:#x}, ..; 256]", self.table[0], self.table[1]))
      .field("width", &self.width)
      .field("reflect_in", &self.reflect_in)
      .finish()
  }
}
