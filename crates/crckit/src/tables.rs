//! Const-fn 256-entry lookup table generation for every backing width.
//!
//! Each `wN` module builds tables for registers stored in a `uN`:
//!
//! | Module | Backing | Widths |
//! |--------|---------|--------|
//! | [`w8`]  | `u8`  | 1..=8  |
//! | [`w16`] | `u16` | 1..=16 |
//! | [`w32`] | `u32` | 1..=32 |
//! | [`w64`] | `u64` | 1..=64 |
//!
//! MSB tables hold remainders in the byte-aligned form used by the MSB-first
//! table kernel: entry `i` is what byte `i` leaves behind when placed in the
//! top byte of the aligned register. LSB tables hold remainders of the
//! reflected polynomial, masked to `width` bits.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

macro_rules! define_tables {
  ($($module:ident => $ty:ty;)+) => {
    $(
      #[doc = concat!("Tables for registers backed by `", stringify!($ty), "`.")]
      pub mod $module {
        use crate::bits;

        /// Build the MSB-first table for `poly` (natural order, `width` significant bits).
        ///
        /// Entries are stored aligned: shifted left by `align_shift(BITS, width)`.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn msb_table(poly: $ty, width: u8) -> [$ty; 256] {
          bits::assert_width(width, <$ty>::BITS);
          let shift = bits::align_shift(<$ty>::BITS, width);
          let aligned = width as u32 + shift;
          let top = aligned - 8;
          let high: $ty = 1 << (aligned - 1);
          let reg_mask = bits::mask(aligned as u8) as $ty;
          let poly = ((poly as u64 & bits::mask(width)) as $ty) << shift;

          let mut table = [0 as $ty; 256];
          let mut i = 0usize;
          while i < 256 {
            let mut crc = (i as $ty) << top;
            let mut bit = 0;
            while bit < 8 {
              crc = if crc & high != 0 { (crc << 1) ^ poly } else { crc << 1 };
              bit += 1;
            }
            table[i] = crc & reg_mask;
            i += 1;
          }
          table
        }

        /// Build the LSB-first table for `poly` (natural order, `width` significant bits).
        ///
        /// The polynomial is reflected over `width` bits before use.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn lsb_table(poly: $ty, width: u8) -> [$ty; 256] {
          bits::assert_width(width, <$ty>::BITS);
          let poly = bits::reflect(poly as u64, width) as $ty;
          let reg_mask = bits::mask(width) as $ty;

          let mut table = [0 as $ty; 256];
          let mut i = 0usize;
          while i < 256 {
            let mut crc = i as $ty;
            let mut bit = 0;
            while bit < 8 {
              crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
              bit += 1;
            }
            table[i] = crc & reg_mask;
            i += 1;
          }
          table
        }
      }
    )+
  };
}

define_tables! {
  w8 => u8;
  w16 => u16;
  w32 => u32;
  w64 => u64;
}

// Well-known table entries, checked at compile time.
const _: () = {
  let t = w32::lsb_table(0x04C1_1DB7, 32);
  assert!(t[0] == 0);
  assert!(t[1] == 0x7707_3096);
  assert!(t[255] == 0x2D02_EF8D);

  let t = w16::msb_table(0x1021, 16);
  assert!(t[1] == 0x1021);

  let t = w32::msb_table(0x04C1_1DB7, 32);
  assert!(t[1] == 0x04C1_1DB7);
};
