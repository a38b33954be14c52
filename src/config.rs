//! Configuration for the encode command

use crate::domain::EccLevel;
use crate::reed_solomon::RsError;
use std::str::FromStr;
use thiserror::Error;

/// Errors turning command-line input into an encode request
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Level(#[from] RsError),

    #[error("invalid hex message: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("unknown output format \"{0}\"")]
    UnknownFormat(String),
}

/// How byte sequences are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[71, 193, 109]`
    #[default]
    Decimal,
    /// `47c16d`
    Hex,
}

impl OutputFormat {
    pub fn render(&self, bytes: &[u8]) -> String {
        match self {
            OutputFormat::Decimal => format!("{:?}", bytes),
            OutputFormat::Hex => hex::encode(bytes),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dec" => Ok(OutputFormat::Decimal),
            "hex" => Ok(OutputFormat::Hex),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Options for a single encode request
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub level: EccLevel,
    /// MESSAGE is hex rather than literal text
    pub hex_input: bool,
    pub ecc_only: bool,
    pub format: OutputFormat,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            level: EccLevel::M,
            hex_input: false,
            ecc_only: false,
            format: OutputFormat::Decimal,
        }
    }
}

impl EncodeConfig {
    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self, ConfigError> {
        let level = matches
            .get_one::<String>("level")
            .map(|s| s.parse::<EccLevel>())
            .transpose()?
            .unwrap_or(EccLevel::M);

        let format = matches
            .get_one::<String>("format")
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            level,
            hex_input: matches.get_flag("hex"),
            ecc_only: matches.get_flag("ecc-only"),
            format,
        })
    }

    /// Decode the MESSAGE argument into data bytes
    pub fn data_bytes(&self, message: &str) -> Result<Vec<u8>, ConfigError> {
        if self.hex_input {
            let compact: String = message.chars().filter(|c| !c.is_whitespace()).collect();
            Ok(hex::decode(compact)?)
        } else {
            Ok(message.as_bytes().to_vec())
        }
    }
}
