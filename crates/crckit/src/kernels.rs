//! Byte-span division loops for the four strategies.
//!
//! Register conventions at the function boundary:
//!
//! - MSB-first kernels take and return the register in natural order (the low
//!   `width` bits). The alignment shift is applied on entry and removed on
//!   exit, so successive calls compose for any width.
//! - LSB-first kernels take and return the register reflected over `width`
//!   bits.
//!
//! MSB kernels expect the polynomial from [`w16::align_poly`] (or the table
//! from `tables::wN::msb_table`); LSB kernels expect [`w16::reflect_poly`] (or
//! `tables::wN::lsb_table`). An empty span returns the masked register.
//!
//! Every function here panics when `width` is zero or wider than the backing
//! type, see [`crate::bits::assert_width`].

// SAFETY: All array indexing uses bounded loop indices (0..data.len()) or a
// `u8` index into a 256-entry table.
#![allow(clippy::indexing_slicing)]

macro_rules! define_kernels {
  ($($module:ident => $ty:ty;)+) => {
    $(
      #[doc = concat!("Kernels for registers backed by `", stringify!($ty), "`.")]
      pub mod $module {
        use crate::bits;

        /// Polynomial shifted into the byte-aligned position used by MSB-first kernels.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[inline]
        #[must_use]
        pub const fn align_poly(poly: $ty, width: u8) -> $ty {
          bits::assert_width(width, <$ty>::BITS);
          ((poly as u64 & bits::mask(width)) as $ty) << bits::align_shift(<$ty>::BITS, width)
        }

        /// Polynomial reflected over `width` bits, as used by LSB-first kernels.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[inline]
        #[must_use]
        pub const fn reflect_poly(poly: $ty, width: u8) -> $ty {
          bits::assert_width(width, <$ty>::BITS);
          bits::reflect(poly as u64, width) as $ty
        }

        /// Bit-at-a-time MSB-first division.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn bitshift_msb(register: $ty, data: &[u8], poly: $ty, width: u8, reflect_in: bool) -> $ty {
          bits::assert_width(width, <$ty>::BITS);
          let shift = bits::align_shift(<$ty>::BITS, width);
          let aligned = width as u32 + shift;
          let top = aligned - 8;
          let high: $ty = 1 << (aligned - 1);
          let reg_mask = bits::mask(aligned as u8) as $ty;

          let mut crc = ((register as u64 & bits::mask(width)) as $ty) << shift;
          let mut i = 0usize;
          while i < data.len() {
            let byte = if reflect_in { bits::reverse_u8(data[i]) } else { data[i] };
            crc ^= (byte as $ty) << top;
            let mut bit = 0;
            while bit < 8 {
              crc = if crc & high != 0 { (crc << 1) ^ poly } else { crc << 1 };
              bit += 1;
            }
            crc &= reg_mask;
            i += 1;
          }
          crc >> shift
        }

        /// Table-driven MSB-first division, one lookup per byte.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn table_msb(
          register: $ty,
          data: &[u8],
          table: &[$ty; 256],
          width: u8,
          reflect_in: bool,
        ) -> $ty {
          bits::assert_width(width, <$ty>::BITS);
          let shift = bits::align_shift(<$ty>::BITS, width);
          let aligned = width as u32 + shift;
          let top = aligned - 8;
          let reg_mask = bits::mask(aligned as u8) as $ty;

          let mut crc = ((register as u64 & bits::mask(width)) as $ty) << shift;
          let mut i = 0usize;
          while i < data.len() {
            let byte = if reflect_in { bits::reverse_u8(data[i]) } else { data[i] };
            let index = ((crc >> top) as u8) ^ byte;
            // A one-byte register has nothing left after the lookup.
            let carried = match crc.checked_shl(8) {
              Some(v) => v,
              None => 0,
            };
            crc = (carried ^ table[index as usize]) & reg_mask;
            i += 1;
          }
          crc >> shift
        }

        /// Bit-at-a-time LSB-first division over a reflected register.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn bitshift_lsb(register: $ty, data: &[u8], poly: $ty, width: u8, reflect_in: bool) -> $ty {
          bits::assert_width(width, <$ty>::BITS);
          let mut crc = (register as u64 & bits::mask(width)) as $ty;
          let mut i = 0usize;
          while i < data.len() {
            let byte = if reflect_in { data[i] } else { bits::reverse_u8(data[i]) };
            crc ^= byte as $ty;
            let mut bit = 0;
            while bit < 8 {
              crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
              bit += 1;
            }
            i += 1;
          }
          crc
        }

        /// Table-driven LSB-first division over a reflected register.
        ///
        /// # Panics
        ///
        /// If `width` is zero or wider than the backing type.
        #[must_use]
        pub const fn table_lsb(
          register: $ty,
          data: &[u8],
          table: &[$ty; 256],
          width: u8,
          reflect_in: bool,
        ) -> $ty {
          bits::assert_width(width, <$ty>::BITS);
          let mut crc = (register as u64 & bits::mask(width)) as $ty;
          let mut i = 0usize;
          while i < data.len() {
            let byte = if reflect_in { data[i] } else { bits::reverse_u8(data[i]) };
            let index = (crc as u8) ^ byte;
            let carried = match crc.checked_shr(8) {
              Some(v) => v,
              None => 0,
            };
            crc = carried ^ table[index as usize];
            i += 1;
          }
          crc
        }
      }
    )+
  };
}

define_kernels! {
  w8 => u8;
  w16 => u16;
  w32 => u32;
  w64 => u64;
}

// CRC-16/XMODEM and CRC-32/ISO-HDLC raw registers over "123456789".
const _: () = {
  let msb = w16::bitshift_msb(0, b"123456789", w16::align_poly(0x1021, 16), 16, false);
  assert!(msb == 0x31C3);
  let table = crate::tables::w16::msb_table(0x1021, 16);
  assert!(w16::table_msb(0, b"123456789", &table, 16, false) == 0x31C3);

  let lsb = w32::bitshift_lsb(!0, b"123456789", w32::reflect_poly(0x04C1_1DB7, 32), 32, true);
  assert!(!lsb == 0xCBF4_3926);
};
