//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of update calls produce the one-shot result
//! for every strategy.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{Algorithm, DynCrc, Profile, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  for algorithm in Algorithm::ALL {
    let crc16 = DynCrc::new(catalog::CRC_16_GENIBUS, algorithm).unwrap();
    test_streaming(&crc16, &input.data, &input.chunk_sizes);

    let crc21 = DynCrc::new(catalog::CRC_21_CAN_FD, algorithm).unwrap();
    test_streaming(&crc21, &input.data, &input.chunk_sizes);

    let crc64 = DynCrc::new(catalog::CRC_64_WE, algorithm).unwrap();
    test_streaming(&crc64, &input.data, &input.chunk_sizes);
  }
});

fn test_streaming<P: Profile>(profile: &P, data: &[u8], chunk_sizes: &[usize]) {
  let expected = profile.calculate(data);

  let mut digest = crckit::Digest::new(profile);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    digest.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(digest.finalize(), expected, "{} streaming mismatch", profile.algorithm());
}
