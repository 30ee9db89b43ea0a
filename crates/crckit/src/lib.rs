//! Generic CRC engine for any width from 1 to 64 bits.
//!
//! A CRC is described by its Rocksoft parameters ([`CrcParams`]: width,
//! polynomial, initial value, input/output reflection, final XOR) and computed
//! by one of four interchangeable strategies. Every strategy produces the same
//! checksum for the same parameters; they differ only in speed and memory.
//!
//! # Strategies
//!
//! | Type | Algorithm | Table | Best for |
//! |------|-----------|-------|----------|
//! | [`BitShiftMsb`] | bit-at-a-time, MSB first | none | tiny targets, non-reflected input |
//! | [`BitShiftLsb`] | bit-at-a-time, LSB first | none | tiny targets, reflected input |
//! | [`Table256Msb`] | byte-at-a-time, MSB first | 256 entries | non-reflected input |
//! | [`Table256Lsb`] | byte-at-a-time, LSB first | 256 entries | reflected input |
//!
//! # Profiles
//!
//! - [`Crc`]: strategy fixed in the type, built in `const` context. Tables are
//!   generated at compile time and invalid parameters fail the build.
//! - [`DynCrc`] (`alloc`): parameters and strategy chosen at run time, with
//!   validation returning [`ParamsError`]. Tables are shared through a
//!   process-wide cache under `std`.
//!
//! Both implement [`Profile`], and both stream through [`Digest`].
//!
//! # Example
//!
//! ```rust
//! use crckit::{BitShiftMsb, Crc, Table256Lsb, catalog};
//!
//! const CRC32: Crc<Table256Lsb<u32>> = Crc::<Table256Lsb<u32>>::new(catalog::CRC_32_ISO_HDLC);
//! const CRC5: Crc<BitShiftMsb<u8>> = Crc::<BitShiftMsb<u8>>::new(catalog::CRC_5_USB);
//!
//! assert_eq!(CRC32.calculate(b"123456789"), 0xCBF4_3926);
//! assert_eq!(CRC5.calculate(b"123456789"), 0x19);
//!
//! // Streaming
//! let mut digest = CRC32.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xCBF4_3926);
//! ```
//!
//! # Features
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `std` (default) | table cache, environment configuration, implies `alloc` |
//! | `alloc` | [`DynCrc`], [`kernel_test`] |
//! | `tracing` | debug events on configuration and cache paths, implies `std` |
//!
//! # no_std Support
//!
//! Without default features the crate is `no_std` and allocation free:
//!
//! ```toml
//! [dependencies]
//! crckit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod bits;
#[cfg(feature = "std")]
pub mod cache;
pub mod catalog;
pub mod config;
mod crc;
mod digest;
#[cfg(feature = "alloc")]
mod dynamic;
pub mod error;
#[cfg(feature = "alloc")]
pub mod kernel_test;
pub mod kernels;
mod params;
pub mod poly;
mod register;
mod strategy;
pub mod tables;

pub use crc::{Crc, Profile};
pub use digest::Digest;
#[cfg(feature = "alloc")]
pub use dynamic::DynCrc;
pub use error::{ParamsError, PolyParseError};
pub use params::{CHECK_INPUT, CrcParams};
pub use poly::Polynomial;
pub use register::Register;
pub use strategy::{Algorithm, BitOrder, BitShiftLsb, BitShiftMsb, Strategy, Table256Lsb, Table256Msb};
// Re-export traits for convenience
pub use traits::{Checksum, VerificationError};
