//! Profiles whose parameters and strategy are chosen at run time.
//!
//! [`DynCrc`] is the counterpart of [`Crc`](crate::Crc) for parameters that
//! arrive as data (a configuration file, a protocol negotiation, a CLI flag).
//! Construction validates and returns `Result` instead of panicking; the
//! strategy is picked once and dispatched with a `match` per call.

use alloc::sync::Arc;
use core::fmt;

use traits::VerificationError;

use crate::{
  config,
  crc::Profile,
  digest::Digest,
  error::ParamsError,
  params::CrcParams,
  register::Register,
  strategy::{Algorithm, BitOrder},
};

/// Build a 256-entry table without consulting the cache.
pub(crate) fn build_table<W: Register>(poly: W, width: u8, order: BitOrder) -> [W; 256] {
  match order {
    BitOrder::MsbFirst => W::msb_table(poly, width),
    BitOrder::LsbFirst => W::lsb_table(poly, width),
  }
}

fn shared_table<W: Register>(poly: W, width: u8, order: BitOrder) -> Arc<[W; 256]> {
  #[cfg(feature = "std")]
  if config::get().table_cache {
    return crate::cache::table(poly, width, order);
  }
  Arc::new(build_table(poly, width, order))
}

#[derive(Clone)]
enum Engine<W> {
  BitShiftMsb { poly: W },
  BitShiftLsb { poly: W },
  Table256Msb { table: Arc<[W; 256]> },
  Table256Lsb { table: Arc<[W; 256]> },
}

impl<W: Register> Engine<W> {
  fn new(params: &CrcParams<W>, algorithm: Algorithm) -> Self {
    let (poly, width) = (params.poly, params.width);
    match algorithm {
      Algorithm::BitShiftMsb => Self::BitShiftMsb { poly: W::align_poly(poly, width) },
      Algorithm::BitShiftLsb => Self::BitShiftLsb { poly: W::reflect_poly(poly, width) },
      Algorithm::Table256Msb => Self::Table256Msb { table: shared_table(poly, width, BitOrder::MsbFirst) },
      Algorithm::Table256Lsb => Self::Table256Lsb { table: shared_table(poly, width, BitOrder::LsbFirst) },
    }
  }

  fn algorithm(&self) -> Algorithm {
    match self {
      Self::BitShiftMsb { .. } => Algorithm::BitShiftMsb,
      Self::BitShiftLsb { .. } => Algorithm::BitShiftLsb,
      Self::Table256Msb { .. } => Algorithm::Table256Msb,
      Self::Table256Lsb { .. } => Algorithm::Table256Lsb,
    }
  }
}

/// A CRC profile with the strategy selected at construction time.
///
/// ```
/// use crckit::{Algorithm, CrcParams, DynCrc};
///
/// let params = CrcParams::<u32> {
///   width: 21,
///   poly: 0x10_2899,
///   init: 0,
///   reflect_in: false,
///   reflect_out: false,
///   xor_out: 0,
///   check: 0x0E_D841,
/// };
/// let crc = DynCrc::new(params, Algorithm::Table256Msb)?;
/// assert_eq!(crc.calculate(b"123456789"), params.check);
/// # Ok::<(), crckit::error::ParamsError>(())
/// ```
#[derive(Clone)]
pub struct DynCrc<W: Register> {
  params: CrcParams<W>,
  engine: Engine<W>,
}

impl<W: Register> DynCrc<W> {
  /// Validate `params` and bind them to `algorithm`.
  ///
  /// Table strategies take their table from the process-wide cache when it
  /// is enabled, and build a private one otherwise.
  pub fn new(params: CrcParams<W>, algorithm: Algorithm) -> Result<Self, ParamsError> {
    params.validate()?;
    let engine = Engine::new(&params, algorithm);
    log_debug!(
      target: "crckit::dynamic",
      bits = W::BITS,
      width = params.width,
      poly = params.poly.into_u64(),
      algorithm = algorithm.as_str(),
      "runtime profile constructed"
    );
    Ok(Self { params, engine })
  }

  /// Like [`new`](Self::new), with the strategy picked by [`config::get`].
  pub fn auto(params: CrcParams<W>) -> Result<Self, ParamsError> {
    let algorithm = config::get().requested_force.select(params.reflect_in);
    Self::new(params, algorithm)
  }

  /// Checksum of one contiguous buffer.
  #[inline]
  #[must_use]
  pub fn calculate(&self, data: &[u8]) -> W {
    Profile::calculate(self, data)
  }

  /// Advance `register` over `data` without finalizing.
  ///
  /// See [`Profile::calculate_partial`]; bits above `width` are dropped.
  #[inline]
  #[must_use]
  pub fn calculate_partial(&self, register: W, data: &[u8]) -> W {
    Profile::calculate_partial(self, register, data)
  }

  #[inline]
  #[must_use]
  pub fn finalize(&self, register: W) -> W {
    Profile::finalize(self, register)
  }

  #[inline]
  #[must_use]
  pub fn initial_value(&self, reverse_if_required: bool) -> W {
    Profile::initial_value(self, reverse_if_required)
  }

  #[inline]
  #[must_use]
  pub fn polynomial(&self) -> W {
    self.params.poly
  }

  #[inline]
  #[must_use]
  pub fn polynomial_length(&self) -> u8 {
    self.params.width
  }

  #[inline]
  #[must_use]
  pub fn init(&self) -> W {
    self.params.init
  }

  #[inline]
  #[must_use]
  pub fn xor_out(&self) -> W {
    self.params.xor_out
  }

  #[inline]
  #[must_use]
  pub fn input_reflected(&self) -> bool {
    self.params.reflect_in
  }

  #[inline]
  #[must_use]
  pub fn output_reflected(&self) -> bool {
    self.params.reflect_out
  }

  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams<W> {
    &self.params
  }

  /// Which of the four strategies was selected.
  #[inline]
  #[must_use]
  pub fn algorithm(&self) -> Algorithm {
    self.engine.algorithm()
  }

  /// The lookup table, for table strategies.
  #[must_use]
  pub fn table(&self) -> Option<&[W; 256]> {
    match &self.engine {
      Engine::Table256Msb { table } | Engine::Table256Lsb { table } => Some(table),
      Engine::BitShiftMsb { .. } | Engine::BitShiftLsb { .. } => None,
    }
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest<'_, Self> {
    Digest::new(self)
  }

  /// Compare the checksum of `data` against `expected`.
  #[inline]
  pub fn verify(&self, data: &[u8], expected: W) -> Result<(), VerificationError> {
    if self.calculate(data) == expected { Ok(()) } else { Err(VerificationError::new()) }
  }
}

impl<W: Register> Profile for DynCrc<W> {
  type Register = W;

  #[inline]
  fn params(&self) -> &CrcParams<W> {
    &self.params
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    self.engine.algorithm()
  }

  fn calculate_partial(&self, register: W, data: &[u8]) -> W {
    let CrcParams { width, reflect_in, .. } = self.params;
    match &self.engine {
      Engine::BitShiftMsb { poly } => W::bitshift_msb(register, data, *poly, width, reflect_in),
      Engine::BitShiftLsb { poly } => W::bitshift_lsb(register, data, *poly, width, reflect_in),
      Engine::Table256Msb { table } => W::table_msb(register, data, table, width, reflect_in),
      Engine::Table256Lsb { table } => W::table_lsb(register, data, table, width, reflect_in),
    }
  }
}

impl<W: Register> fmt::Debug for DynCrc<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DynCrc").field("params", &self.params).field("algorithm", &self.algorithm()).finish()
  }
}
