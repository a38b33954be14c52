pub mod args;
pub mod config;
pub mod domain;
pub mod galois;
pub mod reed_solomon;

pub use args::build_cli;
pub use domain::{Codeword, EccLevel};
pub use galois::{galois_field, DomainError, GaloisField, Gf256};
pub use reed_solomon::{LevelConfig, QrReedSolomon, RsError, RsResult};

/// Encode `data` at `level` into a full 26-byte Version 1 codeword
pub fn encode(level: EccLevel, data: &[u8]) -> RsResult<Codeword> {
    QrReedSolomon::new(level)?.encode(data)
}
