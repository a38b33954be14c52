//! Galois Field GF(2^8) arithmetic for QR Code Reed-Solomon operations
//!
//! This module implements 8-bit Galois Field arithmetic using the QR Code
//! prime polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1) with generator α = 2, as
//! required by ISO/IEC 18004 Annex A.
//!
//! Multiplication goes through log/exp tables. A second, gate-level multiplier
//! ([`GaloisField::bitwise_mul`]) works without the tables and is kept as an
//! oracle for the table-driven path.

use log::debug;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;
use thiserror::Error;

/// QR Code GF(2^8) prime polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const GF_PRIME_POLYNOMIAL: u32 = 0x11D;

/// Largest argument accepted by [`GaloisField::log`]
pub const LOG_DOMAIN_MAX: i32 = 255;

/// Largest argument accepted by [`GaloisField::exp`] (sum of two logarithms)
pub const EXP_DOMAIN_MAX: i32 = 510;

/// Out-of-range argument to a table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("x={0} is out of range for log(x), expected 0..=255")]
    Log(i32),

    #[error("x={0} is out of range for exp(x), expected 0..=510")]
    Exp(i32),
}

/// Precomputed logarithm and exponential tables
pub struct GaloisField {
    log_table: [u8; 256],
    exp_table: [u8; 256],
}

impl GaloisField {
    /// Create a new Galois Field with precomputed tables
    pub fn new() -> Self {
        let mut gf = GaloisField {
            log_table: [0; 256],
            exp_table: [1; 256],
        };
        gf.build_tables();
        gf
    }

    /// Walk the powers of α, recording each element and its logarithm.
    ///
    /// exp[0] = 1 and log[0] stays 0 as a sentinel. Since α^255 = 1 the last
    /// step writes log[1] = 255.
    fn build_tables(&mut self) {
        let mut n = 1u32;

        for i in 1..256 {
            n <<= 1;
            if n & 0x100 != 0 {
                n ^= GF_PRIME_POLYNOMIAL;
            }
            self.exp_table[i] = n as u8;
            self.log_table[n as usize] = i as u8;
        }

        debug!(
            "built GF(2^8) tables for prime polynomial {:#x}",
            GF_PRIME_POLYNOMIAL
        );
    }

    /// Discrete logarithm base α for the domain 0..=255.
    ///
    /// `log(0)` returns the sentinel 0, which is not a real logarithm.
    #[inline]
    pub fn log(&self, x: i32) -> Result<u8, DomainError> {
        if !(0..=LOG_DOMAIN_MAX).contains(&x) {
            return Err(DomainError::Log(x));
        }
        Ok(self.log_table[x as usize])
    }

    /// Exponential α^x for the domain 0..=510, so that `exp(log(a) + log(b))`
    /// never needs an explicit modulo.
    #[inline]
    pub fn exp(&self, x: i32) -> Result<u8, DomainError> {
        if !(0..=EXP_DOMAIN_MAX).contains(&x) {
            return Err(DomainError::Exp(x));
        }
        Ok(self.exp_folded(x as usize))
    }

    /// Fold a sum of two logarithms back into 0..=255. The multiplicative
    /// group has order 255, so x ≥ 256 maps to (x - 256) + 1.
    #[inline]
    fn exp_folded(&self, x: usize) -> u8 {
        self.exp_table[(x & 255) + ((x >> 8) & 1)]
    }

    /// Add two elements in GF(2^8) - this is just XOR
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiply two elements in GF(2^8) using the log/exp tables
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_folded(log_a + log_b)
    }

    /// Multiply the way an AND/XOR gate network would: carry-less product of
    /// the two operands, then reduce bits 14..=8 with shifted copies of the
    /// prime polynomial.
    pub fn bitwise_mul(a: u8, b: u8) -> u8 {
        let mut n = 0u32;
        for i in 0..8 {
            if (b >> i) & 1 == 1 {
                n ^= (a as u32) << i;
            }
        }
        for i in (0..8).rev() {
            if (n >> (8 + i)) & 1 == 1 {
                n ^= GF_PRIME_POLYNOMIAL << i;
            }
        }
        n as u8
    }

    /// Raise an element to a power in GF(2^8)
    #[inline]
    pub fn pow(&self, base: u8, exponent: u32) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }

        let log_base = self.log_table[base as usize] as u64;
        let log_result = (log_base * exponent as u64) % 255;
        self.exp_table[log_result as usize]
    }

    /// Raw exponential table, index = logarithm
    pub fn exp_table(&self) -> &[u8; 256] {
        &self.exp_table
    }

    /// Raw logarithm table, index = field element
    pub fn log_table(&self) -> &[u8; 256] {
        &self.log_table
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("prime_polynomial", &GF_PRIME_POLYNOMIAL)
            .finish_non_exhaustive()
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

/// Global Galois Field instance, built on first use and never mutated
static GALOIS_FIELD: OnceLock<GaloisField> = OnceLock::new();

/// Get the global Galois Field instance
pub fn galois_field() -> &'static GaloisField {
    GALOIS_FIELD.get_or_init(GaloisField::new)
}

/// Convenience functions using the global Galois Field
#[inline]
pub fn gf_log(x: i32) -> Result<u8, DomainError> {
    galois_field().log(x)
}

#[inline]
pub fn gf_exp(x: i32) -> Result<u8, DomainError> {
    galois_field().exp(x)
}

#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    galois_field().mul(a, b)
}

/// Check the table multiplier against [`GaloisField::bitwise_mul`] over
/// all 256×256 operand pairs. Returns the first disagreeing pair.
pub fn find_mul_mismatch(gf: &GaloisField) -> Option<(u8, u8)> {
    (0..=255u8)
        .flat_map(|a| (0..=255u8).map(move |b| (a, b)))
        .find(|&(a, b)| gf.mul(a, b) != GaloisField::bitwise_mul(a, b))
}

/// GF(2^8) element backed by the global tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gf256(u8);

impl Gf256 {
    pub const ZERO: Gf256 = Gf256(0);
    pub const ONE: Gf256 = Gf256(1);
    pub const ALPHA: Gf256 = Gf256(2);

    pub fn new(value: u8) -> Self {
        Gf256(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// α^exponent
    pub fn alpha_pow(exponent: u32) -> Self {
        Gf256(galois_field().pow(2, exponent))
    }

    pub fn pow(&self, exponent: u32) -> Self {
        Gf256(galois_field().pow(self.0, exponent))
    }

    /// Logarithm base α, `None` for zero
    pub fn log(&self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(galois_field().log_table()[self.0 as usize] % 255)
        }
    }
}

// Addition (XOR in Galois fields)
impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Gf256(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Gf256(self.0 ^ rhs.0)
    }
}

impl SubAssign for Gf256 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Gf256(gf_mul(self.0, rhs.0))
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Gf256(value)
    }
}

impl From<Gf256> for u8 {
    fn from(val: Gf256) -> Self {
        val.0
    }
}

impl fmt::Display for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
