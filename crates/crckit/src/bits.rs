//! Bit reflection, width masks and byte alignment.
//!
//! Everything here is `const fn` so profiles, polynomials and lookup tables
//! can be derived at compile time.

/// Reverse the bit order of a byte.
#[inline]
#[must_use]
pub const fn reverse_u8(x: u8) -> u8 {
  let x = ((x & 0xAA) >> 1) | ((x & 0x55) << 1);
  let x = ((x & 0xCC) >> 2) | ((x & 0x33) << 2);
  x.rotate_left(4)
}

/// Reverse the bit order of a 16-bit value.
#[inline]
#[must_use]
pub const fn reverse_u16(x: u16) -> u16 {
  let x = ((x & 0xAAAA) >> 1) | ((x & 0x5555) << 1);
  let x = ((x & 0xCCCC) >> 2) | ((x & 0x3333) << 2);
  let x = ((x & 0xF0F0) >> 4) | ((x & 0x0F0F) << 4);
  x.rotate_left(8)
}

/// Reverse the bit order of a 32-bit value.
#[inline]
#[must_use]
pub const fn reverse_u32(x: u32) -> u32 {
  let x = ((x & 0xAAAA_AAAA) >> 1) | ((x & 0x5555_5555) << 1);
  let x = ((x & 0xCCCC_CCCC) >> 2) | ((x & 0x3333_3333) << 2);
  let x = ((x & 0xF0F0_F0F0) >> 4) | ((x & 0x0F0F_0F0F) << 4);
  let x = ((x & 0xFF00_FF00) >> 8) | ((x & 0x00FF_00FF) << 8);
  x.rotate_left(16)
}

/// Reverse the bit order of a 64-bit value.
#[inline]
#[must_use]
pub const fn reverse_u64(x: u64) -> u64 {
  let x = ((x & 0xAAAA_AAAA_AAAA_AAAA) >> 1) | ((x & 0x5555_5555_5555_5555) << 1);
  let x = ((x & 0xCCCC_CCCC_CCCC_CCCC) >> 2) | ((x & 0x3333_3333_3333_3333) << 2);
  let x = ((x & 0xF0F0_F0F0_F0F0_F0F0) >> 4) | ((x & 0x0F0F_0F0F_0F0F_0F0F) << 4);
  let x = ((x & 0xFF00_FF00_FF00_FF00) >> 8) | ((x & 0x00FF_00FF_00FF_00FF) << 8);
  let x = ((x & 0xFFFF_0000_FFFF_0000) >> 16) | ((x & 0x0000_FFFF_0000_FFFF) << 16);
  x.rotate_left(32)
}

/// Low `width` bits set. `width` above 64 saturates to all ones.
#[inline]
#[must_use]
pub const fn mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Reverse the low `width` bits of `value`; bits at or above `width` are dropped.
///
/// `reflect(0b0011, 4) == 0b1100`. A zero width yields zero.
#[inline]
#[must_use]
pub const fn reflect(value: u64, width: u8) -> u64 {
  if width == 0 {
    return 0;
  }
  let width = if width > 64 { 64 } else { width };
  reverse_u64(value & mask(width)) >> (64 - width as u32)
}

/// Shift that moves the top bit of a `width`-bit register onto a byte boundary
/// inside a `backing_bits` integer: `(backing_bits - width) % 8`.
///
/// `width` must not exceed `backing_bits`.
#[inline]
#[must_use]
pub const fn align_shift(backing_bits: u32, width: u8) -> u32 {
  (backing_bits - width as u32) % 8
}

/// Panic unless `width` fits a `backing_bits` register.
///
/// Called first by every strategy constructor, kernel and table builder. In
/// `const` context a bad width is a build error.
///
/// # Panics
///
/// If `width` is zero or greater than `backing_bits`.
#[inline]
pub const fn assert_width(width: u8, backing_bits: u32) {
  assert!(width != 0, "CRC width must be at least 1");
  assert!(width as u32 <= backing_bits, "CRC width exceeds the backing register");
}

// Reflection sanity, checked at compile time.
const _: () = {
  assert!(reverse_u8(0x0F) == 0xF0);
  assert!(reverse_u8(0x01) == 0x80);
  assert!(reverse_u8(0x80) == 0x01);
  assert!(reverse_u8(0x40) == 0x02);
  assert!(reverse_u8(0x20) == 0x04);
  assert!(reverse_u8(0x10) == 0x08);
  assert!(reverse_u16(0x1021) == 0x8408);
  assert!(reverse_u32(0x04C1_1DB7) == 0xEDB8_8320);
  assert!(reverse_u64(0x42F0_E1EB_A9EA_3693) == 0xC96C_5795_D787_0F42);
};
