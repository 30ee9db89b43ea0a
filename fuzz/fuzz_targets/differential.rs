//! Differential fuzzing against the `crc` crate.
//!
//! Compares every strategy against an independent implementation for a
//! spread of catalogue entries covering each backing width and bit order.

#![no_main]

use crckit::{Algorithm, DynCrc, catalog};
use libfuzzer_sys::fuzz_target;

macro_rules! differential {
  ($data:expr; $($ty:ty: $name:ident),+ $(,)?) => {
    $(
      let reference: crc::Crc<$ty> = crc::Crc::<$ty>::new(&crc::$name);
      let expected = reference.checksum($data);

      for algorithm in Algorithm::ALL {
        let ours = DynCrc::new(catalog::$name, algorithm).unwrap().calculate($data);
        assert_eq!(
          ours, expected,
          "{} differential mismatch via {}: ours={:#x}, reference={:#x}, len={}",
          stringify!($name), algorithm, ours, expected, $data.len()
        );
      }
    )+
  };
}

fuzz_target!(|data: &[u8]| {
  differential!(data;
    u8: CRC_3_GSM,
    u8: CRC_7_MMC,
    u8: CRC_8_MAXIM_DOW,
    u16: CRC_16_DNP,
    u16: CRC_16_XMODEM,
    u32: CRC_17_CAN_FD,
    u32: CRC_32_ISCSI,
    u32: CRC_32_BZIP2,
    u64: CRC_64_XZ,
    u64: CRC_64_ECMA_182,
  );
});
