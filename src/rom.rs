//! Program images for the NROM layout ($8000-$FFFF, no bank switching).
//!
//! Accepts either a raw PRG dump (16 KiB or 32 KiB) or an iNES (v1) file
//! carrying one or two 16 KiB PRG banks for mapper 0. CHR data is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::bus::MountError;

pub const INES_MAGIC: &[u8; 4] = b"NES\x1A";
pub const INES_HEADER_LEN: usize = 16;
pub const TRAINER_LEN: usize = 512;
pub const PRG_BANK_SIZE: usize = 16 * 1024;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("image of {len} bytes is too small")]
    TooSmall { len: usize },

    #[error("missing iNES magic and not a raw 16/32 KiB PRG image")]
    BadMagic,

    #[error("unsupported PRG size {0:#X} (expected 16 KiB or 32 KiB)")]
    UnsupportedPrgSize(usize),

    #[error("mapper {0} is not supported (NROM only)")]
    UnsupportedMapper(u8),

    #[error("failed to read program image: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Mount(#[from] MountError),
}

/// PRG contents ready to be placed at $8000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    prg: Vec<u8>,
}

impl ProgramImage {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let mut buffer = Vec::new();
        File::open(path)?.read_to_end(&mut buffer)?;
        Self::parse(&buffer)
    }

    /// Detect the image kind and extract the PRG data.
    pub fn parse(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.starts_with(INES_MAGIC) {
            return Self::parse_ines(bytes);
        }
        match bytes.len() {
            n if n == PRG_BANK_SIZE || n == 2 * PRG_BANK_SIZE => Ok(Self {
                prg: bytes.to_vec(),
            }),
            n if n < INES_HEADER_LEN => Err(LoadError::TooSmall { len: n }),
            _ => Err(LoadError::BadMagic),
        }
    }

    fn parse_ines(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.len() < INES_HEADER_LEN {
            return Err(LoadError::TooSmall { len: bytes.len() });
        }
        let prg_size = bytes[4] as usize * PRG_BANK_SIZE;
        let flags6 = bytes[6];
        let flags7 = bytes[7];
        let mapper = (flags7 & 0xF0) | (flags6 >> 4);
        if mapper != 0 {
            return Err(LoadError::UnsupportedMapper(mapper));
        }
        if prg_size != PRG_BANK_SIZE && prg_size != 2 * PRG_BANK_SIZE {
            return Err(LoadError::UnsupportedPrgSize(prg_size));
        }

        let has_trainer = flags6 & 0x04 != 0;
        let start = INES_HEADER_LEN + if has_trainer { TRAINER_LEN } else { 0 };
        let prg = bytes
            .get(start..start + prg_size)
            .ok_or(LoadError::TooSmall { len: bytes.len() })?;
        Ok(Self { prg: prg.to_vec() })
    }

    #[inline]
    pub fn prg(&self) -> &[u8] {
        &self.prg
    }

    /// True for a single 16 KiB bank, which is mirrored into $C000-$FFFF.
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.prg.len() == PRG_BANK_SIZE
    }
}
