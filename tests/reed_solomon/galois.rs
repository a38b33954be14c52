//! Galois Field (GF(2^8)) Arithmetic Tests
//!
//! Tests for the log/exp tables, their domain checks, and agreement between
//! the table multiplier and the bitwise multiplier.

use qrecc::galois::{
    find_mul_mismatch, galois_field, gf_exp, gf_log, gf_mul, DomainError, GaloisField, Gf256,
};

const EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222,
    161, 95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231,
    211, 187, 107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17,
    34, 68, 136, 13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59,
    118, 236, 197, 151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66,
    132, 21, 42, 84, 168, 77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115,
    230, 209, 191, 99, 198, 145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219,
    171, 75, 150, 49, 98, 196, 149, 55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141,
    7, 14, 28, 56, 112, 224, 221, 167, 83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155,
    43, 86, 172, 69, 138, 9, 18, 36, 72, 144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139,
    11, 22, 44, 88, 176, 125, 250, 233, 207, 131, 27, 54, 108, 216, 173, 71, 142, 1,
];

const LOG_TABLE: [u8; 256] = [
    0, 255, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141,
    239, 129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147,
    142, 218, 240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77,
    228, 114, 166, 6, 191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54,
    208, 148, 206, 143, 150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163,
    195, 72, 126, 110, 107, 58, 40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43,
    78, 212, 229, 172, 115, 243, 167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222,
    237, 49, 197, 254, 24, 227, 165, 153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32,
    137, 46, 55, 63, 209, 91, 149, 188, 207, 205, 144, 135, 151, 178, 220, 252, 190, 97, 242,
    86, 211, 171, 20, 42, 93, 158, 132, 60, 57, 83, 71, 109, 65, 162, 31, 45, 67, 216, 183,
    123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246, 108, 161, 59, 82, 41, 157, 85, 170,
    251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156, 169, 160, 81, 11, 245, 22, 235,
    122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116, 214, 244, 234, 168, 80, 88,
    175,
];

// ============================================================================
// Lookup Tables
// ============================================================================

#[test]
fn test_exp_table_matches_reference() {
    assert_eq!(galois_field().exp_table(), &EXP_TABLE);
}

#[test]
fn test_log_table_matches_reference() {
    assert_eq!(galois_field().log_table(), &LOG_TABLE);
}

#[test]
fn test_tables_are_bijective_on_nonzero_elements() {
    let gf = GaloisField::new();
    let mut seen = [false; 256];
    for &value in &gf.exp_table()[1..] {
        assert!(!seen[value as usize], "{} produced twice", value);
        seen[value as usize] = true;
    }
    assert!(!seen[0]);
    assert!(seen[1..].iter().all(|&s| s));
}

// ============================================================================
// Logarithm and Exponential
// ============================================================================

#[test]
fn test_exp_spot_values() {
    let xs = [0, 1, 2, 3, 254, 255, 256, 257, 258, 509, 510];
    let ys: Vec<u8> = xs.iter().map(|&x| gf_exp(x).unwrap()).collect();
    assert_eq!(ys, vec![1, 2, 4, 8, 142, 1, 2, 4, 8, 142, 1]);
}

#[test]
fn test_log_spot_values() {
    let xs = [0, 1, 2, 3, 4, 253, 254, 255];
    let ys: Vec<u8> = xs.iter().map(|&x| gf_log(x).unwrap()).collect();
    assert_eq!(ys, vec![0, 255, 1, 25, 2, 80, 88, 175]);
}

#[test]
fn test_exp_inverts_log() {
    for x in 1..=255 {
        let log = gf_log(x).unwrap() as i32;
        assert_eq!(gf_exp(log).unwrap() as i32, x, "exp(log({}))", x);
    }
}

#[test]
fn test_log_domain() {
    for x in [-1, 256, i32::MIN, i32::MAX] {
        assert_eq!(gf_log(x), Err(DomainError::Log(x)));
    }
}

#[test]
fn test_exp_domain() {
    for x in [-1, 511, i32::MIN, i32::MAX] {
        assert_eq!(gf_exp(x), Err(DomainError::Exp(x)));
    }
}

#[test]
fn test_domain_error_messages() {
    assert_eq!(
        DomainError::Log(256).to_string(),
        "x=256 is out of range for log(x), expected 0..=255"
    );
    assert_eq!(
        DomainError::Exp(-1).to_string(),
        "x=-1 is out of range for exp(x), expected 0..=510"
    );
}

// ============================================================================
// Multiplication
// ============================================================================

#[test]
fn test_table_and_bitwise_multiply_agree() {
    let gf = GaloisField::new();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(
                gf.mul(a, b),
                GaloisField::bitwise_mul(a, b),
                "mismatch for {} * {}",
                a,
                b
            );
        }
    }
    assert_eq!(find_mul_mismatch(&gf), None);
}

#[test]
fn test_multiply_by_zero() {
    for y in 0..=255u8 {
        assert_eq!(gf_mul(0, y), 0);
        assert_eq!(gf_mul(y, 0), 0);
    }
}

#[test]
fn test_multiply_known_products() {
    let pairs = [(2, 5), (3, 3), (3, 7), (5, 5)];
    let products: Vec<u8> = pairs.iter().map(|&(a, b)| gf_mul(a, b)).collect();
    assert_eq!(products, vec![10, 5, 9, 17]);
}

#[test]
fn test_multiplicative_identity() {
    for x in 0..=255u8 {
        assert_eq!(gf_mul(1, x), x);
    }
}

// ============================================================================
// Element Type
// ============================================================================

#[test]
fn test_element_add_assign() {
    let mut a = Gf256::new(5);
    a += Gf256::new(3);
    assert_eq!(a.value(), 6);
}

#[test]
fn test_element_mul_assign() {
    let a = Gf256::new(17);
    let b = Gf256::new(23);
    let mut a_copy = a;
    a_copy *= b;
    assert_eq!(a_copy, a * b);
}

#[test]
fn test_element_power_cycle() {
    assert_eq!(Gf256::ALPHA.pow(255), Gf256::ONE);
    assert_eq!(Gf256::alpha_pow(254).value(), 142);
    assert_eq!(Gf256::default(), Gf256::ZERO);
}

#[test]
fn test_element_distributive() {
    let (a, b, c) = (Gf256::new(87), Gf256::new(200), Gf256::new(13));
    assert_eq!(a * (b + c), a * b + a * c);
}
