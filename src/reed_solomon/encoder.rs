//! Systematic Reed-Solomon encoder for QR Code Version 1
//!
//! The message is the data bytes followed by `ecc_len` zero bytes. Dividing it
//! by the level's generator polynomial leaves the ECC bytes as the remainder.
//!
//! Each step removes the leading term m[i] by subtracting (XOR) the generator
//! scaled by m[i] and shifted to position i. The generator is stored as
//! exponents of α, so the scaling `m[i] * g[j]` is inlined as
//! `exp(log(m[i]) + g[j])`. The leading coefficient of g(x) is α^0.

use super::config::LevelConfig;
use super::error::{RsError, RsResult};
use crate::domain::{Codeword, EccLevel, VERSION1_CODEWORDS};
use crate::galois::{galois_field, GaloisField};
use log::{debug, trace};

/// Reed-Solomon encoder for one Version 1 error correction level
#[derive(Debug, Clone, Copy)]
pub struct QrReedSolomon {
    config: LevelConfig,
    gf: &'static GaloisField,
}

impl QrReedSolomon {
    /// Create an encoder for the given level
    pub fn new(level: EccLevel) -> RsResult<Self> {
        Self::with_config(LevelConfig::for_level(level))
    }

    /// Create an encoder from a selector string such as `"1-M"`
    pub fn from_version(version: &str) -> RsResult<Self> {
        Self::new(version.parse()?)
    }

    /// Create an encoder from an explicit configuration entry
    pub fn with_config(config: LevelConfig) -> RsResult<Self> {
        config.validate()?;
        debug!(
            "Reed-Solomon {}: {} data + {} ECC codewords",
            config.level, config.data_len, config.ecc_len
        );
        Ok(Self {
            config,
            gf: galois_field(),
        })
    }

    pub fn level(&self) -> EccLevel {
        self.config.level
    }

    pub fn data_len(&self) -> usize {
        self.config.data_len
    }

    pub fn ecc_len(&self) -> usize {
        self.config.ecc_len
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Encode `data` into a full codeword: `data` followed by the ECC bytes
    pub fn encode(&self, data: &[u8]) -> RsResult<Codeword> {
        let mut message = self.divide(data)?;
        // Division leaves zeros in the data positions
        message[..data.len()].copy_from_slice(data);
        Ok(Codeword::new(message, self.config.data_len))
    }

    /// Compute only the ECC remainder bytes for `data`
    pub fn ecc_remainder(&self, data: &[u8]) -> RsResult<Vec<u8>> {
        let message = self.divide(data)?;
        Ok(message[self.config.data_len..].to_vec())
    }

    /// Polynomial long division of data·x^ecc_len by g(x)
    fn divide(&self, data: &[u8]) -> RsResult<[u8; VERSION1_CODEWORDS]> {
        let LevelConfig {
            level,
            data_len,
            generator,
            ..
        } = self.config;

        if data.len() != data_len {
            return Err(RsError::LengthMismatch {
                level,
                expected: data_len,
                actual: data.len(),
            });
        }

        let mut message = [0u8; VERSION1_CODEWORDS];
        message[..data_len].copy_from_slice(data);

        for i in 0..data_len {
            if message[i] == 0 {
                continue;
            }
            let log_a = self.gf.log(message[i] as i32)? as i32;
            trace!("step {}: leading coefficient {} (log {})", i, message[i], log_a);

            message[i] ^= self.gf.exp(log_a)?;
            for (j, &g) in generator.iter().enumerate() {
                message[i + 1 + j] ^= self.gf.exp(log_a + g as i32)?;
            }
        }

        Ok(message)
    }
}
