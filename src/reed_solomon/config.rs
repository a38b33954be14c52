//! Fixed Version 1 configuration table
//!
//! Generator polynomial coefficients are stored as exponents of α (the log
//! form of Table A.1 in ISO/IEC 18004). The leading coefficient is always
//! α^0 = 1 and is omitted, so `generator.len() == ecc_len`.

use super::error::{RsError, RsResult};
use super::generator::generator_log_form;
use crate::domain::{EccLevel, VERSION1_CODEWORDS};

const GENERATOR_7: [u8; 7] = [87, 229, 146, 149, 238, 102, 21];

const GENERATOR_10: [u8; 10] = [251, 67, 46, 61, 118, 70, 64, 94, 32, 45];

const GENERATOR_13: [u8; 13] = [74, 152, 176, 100, 86, 100, 106, 104, 130, 218, 206, 140, 78];

const GENERATOR_17: [u8; 17] = [
    43, 139, 206, 78, 43, 239, 123, 206, 214, 147, 24, 99, 150, 39, 243, 163, 136,
];

/// Codeword split and generator polynomial for one error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub level: EccLevel,
    pub data_len: usize,
    pub ecc_len: usize,
    pub generator: &'static [u8],
}

impl LevelConfig {
    /// Look up the table entry for a level
    pub fn for_level(level: EccLevel) -> Self {
        let (ecc_len, generator): (usize, &'static [u8]) = match level {
            EccLevel::L => (7, &GENERATOR_7),
            EccLevel::M => (10, &GENERATOR_10),
            EccLevel::Q => (13, &GENERATOR_13),
            EccLevel::H => (17, &GENERATOR_17),
        };

        Self {
            level,
            data_len: VERSION1_CODEWORDS - ecc_len,
            ecc_len,
            generator,
        }
    }

    /// Every supported level, in L, M, Q, H order
    pub fn all() -> [LevelConfig; 4] {
        EccLevel::ALL.map(Self::for_level)
    }

    /// Check that the entry partitions the 26 Version 1 codewords and carries
    /// one generator coefficient per ECC byte.
    pub fn validate(&self) -> RsResult<()> {
        if self.data_len + self.ecc_len != VERSION1_CODEWORDS
            || self.generator.len() != self.ecc_len
            || self.data_len == 0
        {
            return Err(RsError::InvalidConfiguration {
                level: self.level,
                data_len: self.data_len,
                ecc_len: self.ecc_len,
                generator_len: self.generator.len(),
            });
        }
        Ok(())
    }

    /// Compare the stored generator against one derived from the field at runtime
    pub fn matches_derived_generator(&self) -> bool {
        generator_log_form(self.ecc_len).as_deref() == Some(self.generator)
    }
}
