//! Runtime configuration for profiles whose strategy is chosen at run time.
//!
//! `const` profiles ([`Crc`](crate::Crc)) fix their strategy in the type and
//! ignore this module. [`DynCrc::auto`](crate::DynCrc::auto) consults it.
//!
//! # Environment overrides (`std` only)
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `CRCKIT_FORCE` | see [`Force::parse`] | `auto` |
//! | `CRCKIT_TABLE_CACHE` | `0`/`false`/`off`, `1`/`true`/`on` | on |
//!
//! The environment is read once, on first use.

use core::fmt;

use crate::strategy::Algorithm;

/// Forced strategy selection for runtime profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Force {
  /// Pick a table strategy matching the input bit order.
  #[default]
  Auto,
  /// Force the bit-at-a-time MSB-first strategy (no table memory).
  BitShiftMsb,
  /// Force the bit-at-a-time LSB-first strategy (no table memory).
  BitShiftLsb,
  /// Force the MSB-first table strategy.
  Table256Msb,
  /// Force the LSB-first table strategy.
  Table256Lsb,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::BitShiftMsb => "bitshift-msb",
      Self::BitShiftLsb => "bitshift-lsb",
      Self::Table256Msb => "table256-msb",
      Self::Table256Lsb => "table256-lsb",
    }
  }

  /// Parse an override value, ignoring case and surrounding whitespace.
  ///
  /// | Value | Result |
  /// |-------|--------|
  /// | `auto` | [`Force::Auto`] |
  /// | `bitshift`, `bitshift-msb`, `msb` | [`Force::BitShiftMsb`] |
  /// | `bitshift-lsb`, `lsb` | [`Force::BitShiftLsb`] |
  /// | `table`, `table-msb`, `table256`, `table256-msb` | [`Force::Table256Msb`] |
  /// | `table-lsb`, `table256-lsb` | [`Force::Table256Lsb`] |
  ///
  /// Returns `None` for anything else, including an empty string.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    let is = |candidates: &[&str]| candidates.iter().any(|c| value.eq_ignore_ascii_case(c));

    if is(&["auto"]) {
      return Some(Self::Auto);
    }
    if is(&["bitshift", "bitshift-msb", "msb"]) {
      return Some(Self::BitShiftMsb);
    }
    if is(&["bitshift-lsb", "lsb"]) {
      return Some(Self::BitShiftLsb);
    }
    if is(&["table", "table-msb", "table256", "table256-msb"]) {
      return Some(Self::Table256Msb);
    }
    if is(&["table-lsb", "table256-lsb"]) {
      return Some(Self::Table256Lsb);
    }
    None
  }

  /// The strategy to run for a profile with the given input order.
  ///
  /// `Auto` picks the table strategy whose bit order matches the input, so
  /// the hot loop never reverses a byte.
  #[must_use]
  pub const fn select(self, reflect_in: bool) -> Algorithm {
    match self {
      Self::Auto => {
        if reflect_in {
          Algorithm::Table256Lsb
        } else {
          Algorithm::Table256Msb
        }
      }
      Self::BitShiftMsb => Algorithm::BitShiftMsb,
      Self::BitShiftLsb => Algorithm::BitShiftLsb,
      Self::Table256Msb => Algorithm::Table256Msb,
      Self::Table256Lsb => Algorithm::Table256Lsb,
    }
  }
}

impl fmt::Display for Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Effective configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcConfig {
  /// Requested force mode.
  pub requested_force: Force,
  /// Share runtime tables through the process-wide cache.
  ///
  /// Always `false` without `std`, where each profile owns its table.
  pub table_cache: bool,
}

impl Default for CrcConfig {
  fn default() -> Self {
    Self { requested_force: Force::Auto, table_cache: cfg!(feature = "std") }
  }
}

impl CrcConfig {
  /// Build a configuration from raw override values, as read from the environment.
  ///
  /// Unset or empty values keep the default. Unrecognised values keep the
  /// default and are reported through `tracing` when enabled.
  #[must_use]
  pub fn from_overrides(force: Option<&str>, table_cache: Option<&str>) -> Self {
    let mut config = Self::default();

    if let Some(value) = force.map(str::trim).filter(|v| !v.is_empty()) {
      match Force::parse(value) {
        Some(parsed) => config.requested_force = parsed,
        None => log_warn!(target: "crckit::config", value, "unrecognised strategy override, using auto"),
      }
    }

    if let Some(value) = table_cache.map(str::trim).filter(|v| !v.is_empty()) {
      match parse_switch(value) {
        Some(enabled) => config.table_cache = enabled && cfg!(feature = "std"),
        None => log_warn!(target: "crckit::config", value, "unrecognised table cache override, ignoring"),
      }
    }

    config
  }
}

fn parse_switch(value: &str) -> Option<bool> {
  let is = |candidates: &[&str]| candidates.iter().any(|c| value.eq_ignore_ascii_case(c));
  if is(&["0", "false", "off", "no"]) {
    Some(false)
  } else if is(&["1", "true", "on", "yes"]) {
    Some(true)
  } else {
    None
  }
}

#[cfg(feature = "std")]
fn read_env() -> CrcConfig {
  let force = std::env::var("CRCKIT_FORCE").ok();
  let table_cache = std::env::var("CRCKIT_TABLE_CACHE").ok();
  let config = CrcConfig::from_overrides(force.as_deref(), table_cache.as_deref());
  log_debug!(
    target: "crckit::config",
    force = config.requested_force.as_str(),
    table_cache = config.table_cache,
    "resolved configuration"
  );
  config
}

/// The process-wide configuration, read from the environment on first call.
#[cfg(feature = "std")]
#[must_use]
pub fn get() -> CrcConfig {
  use std::sync::OnceLock;
  static CONFIG: OnceLock<CrcConfig> = OnceLock::new();
  *CONFIG.get_or_init(read_env)
}

/// The built-in defaults; there is no environment without `std`.
#[cfg(not(feature = "std"))]
#[must_use]
pub fn get() -> CrcConfig {
  CrcConfig::default()
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn force_aliases() {
    assert_eq!(Force::parse("auto"), Some(Force::Auto));
    assert_eq!(Force::parse("AUTO"), Some(Force::Auto));
    assert_eq!(Force::parse("bitshift"), Some(Force::BitShiftMsb));
    assert_eq!(Force::parse(" msb "), Some(Force::BitShiftMsb));
    assert_eq!(Force::parse("LSB"), Some(Force::BitShiftLsb));
    assert_eq!(Force::parse("bitshift-lsb"), Some(Force::BitShiftLsb));
    assert_eq!(Force::parse("table"), Some(Force::Table256Msb));
    assert_eq!(Force::parse("Table256"), Some(Force::Table256Msb));
    assert_eq!(Force::parse("table-lsb"), Some(Force::Table256Lsb));
    assert_eq!(Force::parse("table256-lsb"), Some(Force::Table256Lsb));
    assert_eq!(Force::parse("slice8"), None);
    assert_eq!(Force::parse(""), None);
  }

  #[test]
  fn as_str_round_trips_through_parse() {
    for force in [Force::Auto, Force::BitShiftMsb, Force::BitShiftLsb, Force::Table256Msb, Force::Table256Lsb] {
      assert_eq!(Force::parse(force.as_str()), Some(force));
      assert_eq!(force.to_string(), force.as_str());
    }
  }

  #[test]
  fn auto_follows_input_order() {
    assert_eq!(Force::Auto.select(true), Algorithm::Table256Lsb);
    assert_eq!(Force::Auto.select(false), Algorithm::Table256Msb);
    assert_eq!(Force::BitShiftMsb.select(true), Algorithm::BitShiftMsb);
    assert_eq!(Force::Table256Lsb.select(false), Algorithm::Table256Lsb);
  }

  #[test]
  fn overrides_apply() {
    let config = CrcConfig::from_overrides(Some("lsb"), Some("off"));
    assert_eq!(config.requested_force, Force::BitShiftLsb);
    assert!(!config.table_cache);
  }

  #[test]
  fn bad_or_missing_overrides_keep_defaults() {
    assert_eq!(CrcConfig::from_overrides(None, None), CrcConfig::default());
    assert_eq!(CrcConfig::from_overrides(Some("  "), Some("")), CrcConfig::default());
    assert_eq!(CrcConfig::from_overrides(Some("fastest"), Some("maybe")), CrcConfig::default());
  }

  #[cfg(feature = "std")]
  #[test]
  fn cache_on_by_default_with_std() {
    assert!(CrcConfig::default().table_cache);
    assert!(CrcConfig::from_overrides(None, Some("TRUE")).table_cache);
  }

  #[cfg(feature = "std")]
  #[test]
  fn get_is_stable() {
    assert_eq!(get(), get());
  }
}
