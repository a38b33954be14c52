//! Error types for Reed-Solomon encoding

use crate::domain::EccLevel;
use crate::galois::DomainError;
use thiserror::Error;

/// Errors that can occur while configuring or running the encoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Level selector outside the supported Version 1 set
    #[error("version \"{0}\" is not supported")]
    UnsupportedLevel(String),

    /// Configuration table entry does not partition the 26 codewords
    #[error(
        "invalid configuration for {level}: {data_len} data + {ecc_len} ECC bytes \
         with {generator_len} generator coefficients"
    )]
    InvalidConfiguration {
        level: EccLevel,
        data_len: usize,
        ecc_len: usize,
        generator_len: usize,
    },

    /// Data length does not match the level's data capacity
    #[error("{level} needs {expected} data bytes, got {actual}")]
    LengthMismatch {
        level: EccLevel,
        expected: usize,
        actual: usize,
    },

    /// Field lookup outside its domain
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
