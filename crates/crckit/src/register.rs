//! Backing integer types for CRC registers.

use core::fmt::{Debug, Display, LowerHex, UpperHex};

use crate::{kernels, tables};

mod sealed {
  pub trait Sealed {}
}

/// An unsigned integer that can hold a CRC register: `u8`, `u16`, `u32` or `u64`.
///
/// Generic code (runtime profiles, streaming digests) reaches the per-width
/// `const fn` kernels and table generators through this trait. It is sealed.
pub trait Register:
  sealed::Sealed + Copy + Default + Eq + Ord + Debug + Display + LowerHex + UpperHex + Send + Sync + 'static
{
  /// Number of bits in the backing integer.
  const BITS: u32;

  /// Truncate a `u64` to this width.
  fn from_u64(value: u64) -> Self;

  /// Zero-extend to `u64`.
  fn into_u64(self) -> u64;

  /// See `tables::wN::msb_table`.
  fn msb_table(poly: Self, width: u8) -> [Self; 256];

  /// See `tables::wN::lsb_table`.
  fn lsb_table(poly: Self, width: u8) -> [Self; 256];

  /// See `kernels::wN::align_poly`.
  fn align_poly(poly: Self, width: u8) -> Self;

  /// See `kernels::wN::reflect_poly`.
  fn reflect_poly(poly: Self, width: u8) -> Self;

  /// See `kernels::wN::bitshift_msb`.
  fn bitshift_msb(register: Self, data: &[u8], poly: Self, width: u8, reflect_in: bool) -> Self;

  /// See `kernels::wN::table_msb`.
  fn table_msb(register: Self, data: &[u8], table: &[Self; 256], width: u8, reflect_in: bool) -> Self;

  /// See `kernels::wN::bitshift_lsb`.
  fn bitshift_lsb(register: Self, data: &[u8], poly: Self, width: u8, reflect_in: bool) -> Self;

  /// See `kernels::wN::table_lsb`.
  fn table_lsb(register: Self, data: &[u8], table: &[Self; 256], width: u8, reflect_in: bool) -> Self;
}

macro_rules! impl_register {
  ($($ty:ty => $module:ident;)+) => {
    $(
      impl sealed::Sealed for $ty {}

      impl Register for $ty {
        const BITS: u32 = <$ty>::BITS;

        #[inline]
        fn from_u64(value: u64) -> Self {
          value as $ty
        }

        #[inline]
        fn into_u64(self) -> u64 {
          self as u64
        }

        #[inline]
        fn msb_table(poly: Self, width: u8) -> [Self; 256] {
          tables::$module::msb_table(poly, width)
        }

        #[inline]
        fn lsb_table(poly: Self, width: u8) -> [Self; 256] {
          tables::$module::lsb_table(poly, width)
        }

        #[inline]
        fn align_poly(poly: Self, width: u8) -> Self {
          kernels::$module::align_poly(poly, width)
        }

        #[inline]
        fn reflect_poly(poly: Self, width: u8) -> Self {
          kernels::$module::reflect_poly(poly, width)
        }

        #[inline]
        fn bitshift_msb(register: Self, data: &[u8], poly: Self, width: u8, reflect_in: bool) -> Self {
          kernels::$module::bitshift_msb(register, data, poly, width, reflect_in)
        }

        #[inline]
        fn table_msb(register: Self, data: &[u8], table: &[Self; 256], width: u8, reflect_in: bool) -> Self {
          kernels::$module::table_msb(register, data, table, width, reflect_in)
        }

        #[inline]
        fn bitshift_lsb(register: Self, data: &[u8], poly: Self, width: u8, reflect_in: bool) -> Self {
          kernels::$module::bitshift_lsb(register, data, poly, width, reflect_in)
        }

        #[inline]
        fn table_lsb(register: Self, data: &[u8], table: &[Self; 256], width: u8, reflect_in: bool) -> Self {
          kernels::$module::table_lsb(register, data, table, width, reflect_in)
        }
      }
    )+
  };
}

impl_register! {
  u8 => w8;
  u16 => w16;
  u32 => w32;
  u64 => w64;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn roundtrip<W: Register>(value: u64) -> u64 {
    W::from_u64(value).into_u64()
  }

  #[test]
  fn u64_conversion_truncates() {
    assert_eq!(roundtrip::<u8>(0x1234), 0x34);
    assert_eq!(roundtrip::<u16>(0x1_2345), 0x2345);
    assert_eq!(roundtrip::<u32>(0x1_0000_0001), 1);
    assert_eq!(roundtrip::<u64>(u64::MAX), u64::MAX);
  }

  #[test]
  fn bits_match_backing_type() {
    assert_eq!(<u8 as Register>::BITS, 8);
    assert_eq!(<u16 as Register>::BITS, 16);
    assert_eq!(<u32 as Register>::BITS, 32);
    assert_eq!(<u64 as Register>::BITS, 64);
  }

  #[test]
  fn generic_dispatch_reaches_kernels() {
    fn check<W: Register>(poly: u64, width: u8) -> u64 {
      let poly = W::from_u64(poly);
      let table = W::msb_table(poly, width);
      W::table_msb(W::default(), b"123456789", &table, width, false).into_u64()
    }
    assert_eq!(check::<u16>(0x1021, 16), 0x31C3);
    assert_eq!(check::<u32>(0x1685B, 17), 0x04F03);
  }
}
