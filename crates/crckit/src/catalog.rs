//! Named parameter sets from the CRC RevEng catalogue.
//!
//! Every constant is plain data; bind it to a strategy with
//! [`Crc::new`](crate::Crc) or [`DynCrc::new`](crate::DynCrc). The published
//! check value of each entry is verified at compile time against a bit-by-bit
//! computation, so a typo in a parameter is a build failure.
//!
//! | Width | Backing | Entries |
//! |-------|---------|---------|
//! | 3..=8 | `u8` | [`ALL_U8`] |
//! | 16 | `u16` | [`ALL_U16`] |
//! | 17, 21, 32 | `u32` | [`ALL_U32`] |
//! | 64 | `u64` | [`ALL_U64`] |
//!
//! ```
//! use crckit::{BitShiftMsb, Crc, catalog};
//!
//! for (name, params) in catalog::ALL_U16 {
//!   let crc = Crc::<BitShiftMsb<u16>>::new(*params);
//!   assert_eq!(crc.calculate(b"123456789"), params.check, "{name}");
//! }
//! ```

// SAFETY: Indexing in the compile-time checks is bounded by `len()`.
#![allow(clippy::indexing_slicing)]

use crate::params::CrcParams;

macro_rules! catalogue {
  (
    $ty:ty, $all:ident;
    $(
      $(#[$meta:meta])*
      $name:ident = $label:literal: width $width:literal, poly $poly:literal, init $init:literal,
        refin $refin:literal, refout $refout:literal, xorout $xorout:literal, check $check:literal;
    )+
  ) => {
    $(
      $(#[$meta])*
      #[doc = concat!("\n\n`", $label, "`: poly `", stringify!($poly), "`, check `", stringify!($check), "`.")]
      pub const $name: CrcParams<$ty> = CrcParams {
        width: $width,
        poly: $poly,
        init: $init,
        reflect_in: $refin,
        reflect_out: $refout,
        xor_out: $xorout,
        check: $check,
      };
    )+

    #[doc = concat!("Every `", stringify!($ty), "` entry with its catalogue name.")]
    pub const $all: &[(&str, CrcParams<$ty>)] = &[$(($label, $name)),+];

    const _: () = {
      let all = $all;
      let mut i = 0;
      while i < all.len() {
        all[i].1.assert_valid();
        assert!(all[i].1.check == all[i].1.reference_check(), "catalogue check value mismatch");
        i += 1;
      }
    };
  };
}

// ─────────────────────────────────────────────────────────────────────────────
// Widths 3..=8
// ─────────────────────────────────────────────────────────────────────────────

catalogue! {
  u8, ALL_U8;
  /// GSM mobile networks, control channels.
  CRC_3_GSM = "CRC-3/GSM": width 3, poly 0x03, init 0x00,
    refin false, refout false, xorout 0x07, check 0x04;
  /// ITU-T G.704 E1 framing.
  CRC_4_G_704 = "CRC-4/G-704": width 4, poly 0x03, init 0x00,
    refin true, refout true, xorout 0x00, check 0x07;
  /// EPC Gen 2 RFID tags.
  CRC_5_EPC_C1G2 = "CRC-5/EPC-C1G2": width 5, poly 0x09, init 0x09,
    refin false, refout false, xorout 0x00, check 0x00;
  /// ITU-T G.704.
  CRC_5_G_704 = "CRC-5/G-704": width 5, poly 0x15, init 0x00,
    refin true, refout true, xorout 0x00, check 0x07;
  /// USB token packets.
  CRC_5_USB = "CRC-5/USB": width 5, poly 0x05, init 0x1F,
    refin true, refout true, xorout 0x1F, check 0x19;
  /// SD/MMC command and response frames.
  CRC_7_MMC = "CRC-7/MMC": width 7, poly 0x09, init 0x00,
    refin false, refout false, xorout 0x00, check 0x75;
  /// Train Communication Network multifunction vehicle bus.
  CRC_7_MVB = "CRC-7/MVB": width 7, poly 0x65, init 0x00,
    refin false, refout false, xorout 0x00, check 0x1F;
  /// SMBus packet error checking; often called CRC-8/CCITT.
  CRC_8_SMBUS = "CRC-8/SMBUS": width 8, poly 0x07, init 0x00,
    refin false, refout false, xorout 0x00, check 0xF4;
  CRC_8_CDMA2000 = "CRC-8/CDMA2000": width 8, poly 0x9B, init 0xFF,
    refin false, refout false, xorout 0x00, check 0xDA;
  CRC_8_DARC = "CRC-8/DARC": width 8, poly 0x39, init 0x00,
    refin true, refout true, xorout 0x00, check 0x15;
  CRC_8_DVB_S2 = "CRC-8/DVB-S2": width 8, poly 0xD5, init 0x00,
    refin false, refout false, xorout 0x00, check 0xBC;
  CRC_8_TECH_3250 = "CRC-8/TECH-3250": width 8, poly 0x1D, init 0xFF,
    refin true, refout true, xorout 0x00, check 0x97;
  CRC_8_I_CODE = "CRC-8/I-CODE": width 8, poly 0x1D, init 0xFD,
    refin false, refout false, xorout 0x00, check 0x7E;
  CRC_8_I_432_1 = "CRC-8/I-432-1": width 8, poly 0x07, init 0x00,
    refin false, refout false, xorout 0x55, check 0xA1;
  /// Dallas/Maxim 1-Wire ROM codes.
  CRC_8_MAXIM_DOW = "CRC-8/MAXIM-DOW": width 8, poly 0x31, init 0x00,
    refin true, refout true, xorout 0x00, check 0xA1;
  CRC_8_ROHC = "CRC-8/ROHC": width 8, poly 0x07, init 0xFF,
    refin true, refout true, xorout 0x00, check 0xD0;
  CRC_8_WCDMA = "CRC-8/WCDMA": width 8, poly 0x9B, init 0x00,
    refin true, refout true, xorout 0x00, check 0x25;
  /// AUTOSAR end-to-end protection.
  CRC_8_AUTOSAR = "CRC-8/AUTOSAR": width 8, poly 0x2F, init 0xFF,
    refin false, refout false, xorout 0xFF, check 0xDF;
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

catalogue! {
  u16, ALL_U16;
  /// IBM 3740 floppy format; widely called CRC-16/CCITT-FALSE.
  CRC_16_IBM_3740 = "CRC-16/IBM-3740": width 16, poly 0x1021, init 0xFFFF,
    refin false, refout false, xorout 0x0000, check 0x29B1;
  /// ARC archives, LHA; the "IBM" CRC-16.
  CRC_16_ARC = "CRC-16/ARC": width 16, poly 0x8005, init 0x0000,
    refin true, refout true, xorout 0x0000, check 0xBB3D;
  CRC_16_SPI_FUJITSU = "CRC-16/SPI-FUJITSU": width 16, poly 0x1021, init 0x1D0F,
    refin false, refout false, xorout 0x0000, check 0xE5CC;
  CRC_16_UMTS = "CRC-16/UMTS": width 16, poly 0x8005, init 0x0000,
    refin false, refout false, xorout 0x0000, check 0xFEE8;
  CRC_16_CDMA2000 = "CRC-16/CDMA2000": width 16, poly 0xC867, init 0xFFFF,
    refin false, refout false, xorout 0x0000, check 0x4C06;
  CRC_16_DDS_110 = "CRC-16/DDS-110": width 16, poly 0x8005, init 0x800D,
    refin false, refout false, xorout 0x0000, check 0x9ECF;
  CRC_16_DECT_R = "CRC-16/DECT-R": width 16, poly 0x0589, init 0x0000,
    refin false, refout false, xorout 0x0001, check 0x007E;
  CRC_16_DECT_X = "CRC-16/DECT-X": width 16, poly 0x0589, init 0x0000,
    refin false, refout false, xorout 0x0000, check 0x007F;
  CRC_16_DNP = "CRC-16/DNP": width 16, poly 0x3D65, init 0x0000,
    refin true, refout true, xorout 0xFFFF, check 0xEA82;
  CRC_16_EN_13757 = "CRC-16/EN-13757": width 16, poly 0x3D65, init 0x0000,
    refin false, refout false, xorout 0xFFFF, check 0xC2B7;
  CRC_16_GENIBUS = "CRC-16/GENIBUS": width 16, poly 0x1021, init 0xFFFF,
    refin false, refout false, xorout 0xFFFF, check 0xD64E;
  CRC_16_MAXIM_DOW = "CRC-16/MAXIM-DOW": width 16, poly 0x8005, init 0x0000,
    refin true, refout true, xorout 0xFFFF, check 0x44C2;
  CRC_16_MCRF4XX = "CRC-16/MCRF4XX": width 16, poly 0x1021, init 0xFFFF,
    refin true, refout true, xorout 0x0000, check 0x6F91;
  CRC_16_RIELLO = "CRC-16/RIELLO": width 16, poly 0x1021, init 0xB2AA,
    refin true, refout true, xorout 0x0000, check 0x63D0;
  CRC_16_T10_DIF = "CRC-16/T10-DIF": width 16, poly 0x8BB7, init 0x0000,
    refin false, refout false, xorout 0x0000, check 0xD0DB;
  CRC_16_TELEDISK = "CRC-16/TELEDISK": width 16, poly 0xA097, init 0x0000,
    refin false, refout false, xorout 0x0000, check 0x0FB3;
  CRC_16_TMS37157 = "CRC-16/TMS37157": width 16, poly 0x1021, init 0x89EC,
    refin true, refout true, xorout 0x0000, check 0x26B1;
  CRC_16_USB = "CRC-16/USB": width 16, poly 0x8005, init 0xFFFF,
    refin true, refout true, xorout 0xFFFF, check 0xB4C8;
  CRC_16_ISO_IEC_14443_3_A = "CRC-16/ISO-IEC-14443-3-A": width 16, poly 0x1021, init 0xC6C6,
    refin true, refout true, xorout 0x0000, check 0xBF05;
  /// Kermit protocol; the reflected CCITT CRC.
  CRC_16_KERMIT = "CRC-16/KERMIT": width 16, poly 0x1021, init 0x0000,
    refin true, refout true, xorout 0x0000, check 0x2189;
  /// Modbus RTU frames.
  CRC_16_MODBUS = "CRC-16/MODBUS": width 16, poly 0x8005, init 0xFFFF,
    refin true, refout true, xorout 0x0000, check 0x4B37;
  /// HDLC, X.25, PPP frame check sequence.
  CRC_16_IBM_SDLC = "CRC-16/IBM-SDLC": width 16, poly 0x1021, init 0xFFFF,
    refin true, refout true, xorout 0xFFFF, check 0x906E;
  /// XMODEM, ZMODEM, Bluetooth headers.
  CRC_16_XMODEM = "CRC-16/XMODEM": width 16, poly 0x1021, init 0x0000,
    refin false, refout false, xorout 0x0000, check 0x31C3;
}

// ─────────────────────────────────────────────────────────────────────────────
// Widths 17, 21 and 32
// ─────────────────────────────────────────────────────────────────────────────

catalogue! {
  u32, ALL_U32;
  /// CAN FD frames with up to 16 data bytes.
  CRC_17_CAN_FD = "CRC-17/CAN-FD": width 17, poly 0x0001_685B, init 0x0000_0000,
    refin false, refout false, xorout 0x0000_0000, check 0x0000_4F03;
  /// CAN FD frames with more than 16 data bytes.
  CRC_21_CAN_FD = "CRC-21/CAN-FD": width 21, poly 0x0010_2899, init 0x0000_0000,
    refin false, refout false, xorout 0x0000_0000, check 0x000E_D841;
  /// Ethernet, gzip, zip, PNG.
  CRC_32_ISO_HDLC = "CRC-32/ISO-HDLC": width 32, poly 0x04C1_1DB7, init 0xFFFF_FFFF,
    refin true, refout true, xorout 0xFFFF_FFFF, check 0xCBF4_3926;
  /// bzip2 blocks.
  CRC_32_BZIP2 = "CRC-32/BZIP2": width 32, poly 0x04C1_1DB7, init 0xFFFF_FFFF,
    refin false, refout false, xorout 0xFFFF_FFFF, check 0xFC89_1918;
  /// iSCSI, SCTP, ext4, Btrfs; CRC-32C (Castagnoli).
  CRC_32_ISCSI = "CRC-32/ISCSI": width 32, poly 0x1EDC_6F41, init 0xFFFF_FFFF,
    refin true, refout true, xorout 0xFFFF_FFFF, check 0xE306_9283;
  CRC_32_BASE91_D = "CRC-32/BASE91-D": width 32, poly 0xA833_982B, init 0xFFFF_FFFF,
    refin true, refout true, xorout 0xFFFF_FFFF, check 0x8731_5576;
  /// MPEG-2 transport stream sections.
  CRC_32_MPEG_2 = "CRC-32/MPEG-2": width 32, poly 0x04C1_1DB7, init 0xFFFF_FFFF,
    refin false, refout false, xorout 0x0000_0000, check 0x0376_E6E7;
  /// POSIX `cksum` (without the length suffix).
  CRC_32_CKSUM = "CRC-32/CKSUM": width 32, poly 0x04C1_1DB7, init 0x0000_0000,
    refin false, refout false, xorout 0xFFFF_FFFF, check 0x765E_7680;
  CRC_32_AIXM = "CRC-32/AIXM": width 32, poly 0x8141_41AB, init 0x0000_0000,
    refin false, refout false, xorout 0x0000_0000, check 0x3010_BF7F;
  CRC_32_JAMCRC = "CRC-32/JAMCRC": width 32, poly 0x04C1_1DB7, init 0xFFFF_FFFF,
    refin true, refout true, xorout 0x0000_0000, check 0x340B_C6D9;
  CRC_32_XFER = "CRC-32/XFER": width 32, poly 0x0000_00AF, init 0x0000_0000,
    refin false, refout false, xorout 0x0000_0000, check 0xBD0B_E338;
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

catalogue! {
  u64, ALL_U64;
  /// XZ Utils, 7-Zip.
  CRC_64_XZ = "CRC-64/XZ": width 64, poly 0x42F0_E1EB_A9EA_3693, init 0xFFFF_FFFF_FFFF_FFFF,
    refin true, refout true, xorout 0xFFFF_FFFF_FFFF_FFFF, check 0x995D_C9BB_DF19_39FA;
  /// ECMA-182 tape cartridges.
  CRC_64_ECMA_182 = "CRC-64/ECMA-182": width 64, poly 0x42F0_E1EB_A9EA_3693, init 0x0000_0000_0000_0000,
    refin false, refout false, xorout 0x0000_0000_0000_0000, check 0x6C40_DF5F_0B49_7347;
  CRC_64_GO_ISO = "CRC-64/GO-ISO": width 64, poly 0x0000_0000_0000_001B, init 0xFFFF_FFFF_FFFF_FFFF,
    refin true, refout true, xorout 0xFFFF_FFFF_FFFF_FFFF, check 0xB909_56C7_75A4_1001;
  /// NVMe end-to-end data protection.
  CRC_64_NVME = "CRC-64/NVME": width 64, poly 0xAD93_D235_94C9_3659, init 0xFFFF_FFFF_FFFF_FFFF,
    refin true, refout true, xorout 0xFFFF_FFFF_FFFF_FFFF, check 0xAE8B_1486_0A79_9888;
  CRC_64_WE = "CRC-64/WE": width 64, poly 0x42F0_E1EB_A9EA_3693, init 0xFFFF_FFFF_FFFF_FFFF,
    refin false, refout false, xorout 0xFFFF_FFFF_FFFF_FFFF, check 0x62EC_59E3_F1A4_F00A;
}

// ─────────────────────────────────────────────────────────────────────────────
// Common names
// ─────────────────────────────────────────────────────────────────────────────

/// Also known as CRC-4/ITU.
pub const CRC_4_ITU: CrcParams<u8> = CRC_4_G_704;
/// Also known as CRC-5/EPC.
pub const CRC_5_EPC: CrcParams<u8> = CRC_5_EPC_C1G2;
/// Also known as CRC-5/ITU.
pub const CRC_5_ITU: CrcParams<u8> = CRC_5_G_704;
/// The SD card CRC-7.
pub const CRC_7: CrcParams<u8> = CRC_7_MMC;
pub const CRC_8_CCITT: CrcParams<u8> = CRC_8_SMBUS;
pub const CRC_8_EBU: CrcParams<u8> = CRC_8_TECH_3250;
pub const CRC_8_ITU: CrcParams<u8> = CRC_8_I_432_1;
pub const CRC_8_MAXIM: CrcParams<u8> = CRC_8_MAXIM_DOW;
/// The non-reflected 0x1021 CRC with init 0xFFFF.
pub const CRC_16_CCITT: CrcParams<u16> = CRC_16_IBM_3740;
pub const CRC_16_CCITT_FALSE: CrcParams<u16> = CRC_16_IBM_3740;
pub const CRC_16_AUTOSAR: CrcParams<u16> = CRC_16_IBM_3740;
pub const CRC_16_AUG_CCITT: CrcParams<u16> = CRC_16_SPI_FUJITSU;
pub const CRC_16_BUYPASS: CrcParams<u16> = CRC_16_UMTS;
pub const CRC_16_DECT: CrcParams<u16> = CRC_16_DECT_X;
pub const CRC_16_MAXIM: CrcParams<u16> = CRC_16_MAXIM_DOW;
pub const CRC_16_A: CrcParams<u16> = CRC_16_ISO_IEC_14443_3_A;
pub const CRC_16_X_25: CrcParams<u16> = CRC_16_IBM_SDLC;
pub const CRC_17_CAN: CrcParams<u32> = CRC_17_CAN_FD;
pub const CRC_21_CAN: CrcParams<u32> = CRC_21_CAN_FD;
pub const CRC_32: CrcParams<u32> = CRC_32_ISO_HDLC;
/// Castagnoli.
pub const CRC_32C: CrcParams<u32> = CRC_32_ISCSI;
pub const CRC_32D: CrcParams<u32> = CRC_32_BASE91_D;
pub const CRC_32Q: CrcParams<u32> = CRC_32_AIXM;
pub const CRC_32_POSIX: CrcParams<u32> = CRC_32_CKSUM;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalogue_sizes() {
    assert_eq!(ALL_U8.len(), 18);
    assert_eq!(ALL_U16.len(), 23);
    assert_eq!(ALL_U32.len(), 11);
    assert_eq!(ALL_U64.len(), 5);
  }

  #[test]
  fn names_are_unique() {
    fn unique<W>(entries: &[(&str, CrcParams<W>)]) -> bool {
      entries.iter().enumerate().all(|(i, (a, _))| entries.iter().skip(i + 1).all(|(b, _)| a != b))
    }
    assert!(unique(ALL_U8));
    assert!(unique(ALL_U16));
    assert!(unique(ALL_U32));
    assert!(unique(ALL_U64));
  }

  #[test]
  fn widths_fit_backing_type() {
    assert!(ALL_U8.iter().all(|(_, p)| (3..=8).contains(&p.width)));
    assert!(ALL_U16.iter().all(|(_, p)| p.width == 16));
    assert!(ALL_U32.iter().all(|(_, p)| matches!(p.width, 17 | 21 | 32)));
    assert!(ALL_U64.iter().all(|(_, p)| p.width == 64));
  }

  #[test]
  fn aliases_point_at_catalogue_entries() {
    assert_eq!(CRC_8_CCITT, CRC_8_SMBUS);
    assert_eq!(CRC_16_CCITT_FALSE.check, 0x29B1);
    assert_eq!(CRC_32C.poly, 0x1EDC_6F41);
    assert_eq!(CRC_32.check, 0xCBF4_3926);
    assert_eq!(CRC_7.poly, 0x09);
  }

  #[test]
  fn every_entry_validates() {
    assert!(ALL_U8.iter().all(|(_, p)| p.validate().is_ok()));
    assert!(ALL_U16.iter().all(|(_, p)| p.validate().is_ok()));
    assert!(ALL_U32.iter().all(|(_, p)| p.validate().is_ok()));
    assert!(ALL_U64.iter().all(|(_, p)| p.validate().is_ok()));
  }
}
