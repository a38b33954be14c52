//! Reed-Solomon Error Correction Module
//!
//! This module computes the error correction codewords of QR Code Version 1
//! symbols over GF(2^8) (prime polynomial 0x11D), using the generator
//! polynomials of ISO/IEC 18004 Annex A.

pub mod config;
pub mod encoder;
pub mod error;
pub mod generator;

pub use config::LevelConfig;
pub use encoder::QrReedSolomon;
pub use error::{RsError, RsResult};
pub use generator::{generator_log_form, generator_polynomial};
