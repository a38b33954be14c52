//! Core domain types for QR Code Version 1 error correction
//!
//! - **EccLevel**: closed set of the four error correction levels. Selector
//!   strings such as `"1-M"` are parsed once, at the boundary, and never
//!   compared again inside the encoder.
//! - **Codeword**: the 26-byte systematic output, data bytes followed by ECC bytes.

use crate::reed_solomon::RsError;
use std::fmt;
use std::str::FromStr;

/// Total codewords in a Version 1 symbol
pub const VERSION1_CODEWORDS: usize = 26;

/// Error correction level of a Version 1 symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EccLevel {
    /// ~7% recovery, 19 data + 7 ECC codewords
    L,
    /// ~15% recovery, 16 data + 10 ECC codewords
    M,
    /// ~25% recovery, 13 data + 13 ECC codewords
    Q,
    /// ~30% recovery, 9 data + 17 ECC codewords
    H,
}

impl EccLevel {
    pub const ALL: [EccLevel; 4] = [EccLevel::L, EccLevel::M, EccLevel::Q, EccLevel::H];

    /// Version-qualified name, e.g. `"1-M"`
    pub fn as_str(&self) -> &'static str {
        match self {
            EccLevel::L => "1-L",
            EccLevel::M => "1-M",
            EccLevel::Q => "1-Q",
            EccLevel::H => "1-H",
        }
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EccLevel {
    type Err = RsError;

    /// Accepts `"1-L"`..`"1-H"` or the bare letter, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letter = trimmed.strip_prefix("1-").unwrap_or(trimmed);
        match letter.to_ascii_uppercase().as_str() {
            "L" => Ok(EccLevel::L),
            "M" => Ok(EccLevel::M),
            "Q" => Ok(EccLevel::Q),
            "H" => Ok(EccLevel::H),
            _ => Err(RsError::UnsupportedLevel(s.to_string())),
        }
    }
}

/// Systematic Version 1 codeword: unmodified data followed by the ECC remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword {
    bytes: [u8; VERSION1_CODEWORDS],
    data_len: usize,
}

impl Codeword {
    /// Callers guarantee `data_len <= VERSION1_CODEWORDS`.
    pub(crate) fn new(bytes: [u8; VERSION1_CODEWORDS], data_len: usize) -> Self {
        Codeword { bytes, data_len }
    }

    pub fn as_bytes(&self) -> &[u8; VERSION1_CODEWORDS] {
        &self.bytes
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes[..self.data_len]
    }

    pub fn ecc(&self) -> &[u8] {
        &self.bytes[self.data_len..]
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl AsRef<[u8]> for Codeword {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Codeword> for Vec<u8> {
    fn from(codeword: Codeword) -> Self {
        codeword.to_vec()
    }
}

impl PartialEq<[u8]> for Codeword {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes[..] == *other
    }
}
