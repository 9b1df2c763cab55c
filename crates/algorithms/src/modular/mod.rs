//! Modular exponentiation and inversion over arbitrary-precision integers

use crate::error::{validate, Error, Result};
use num_bigint_dig::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Compute `base^exponent mod modulus`.
///
/// # Errors
///
/// A zero modulus is rejected with a `Parameter` error.
pub fn mod_exp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    validate::parameter(!modulus.is_zero(), "modulus", "must be nonzero")?;

    Ok(base.modpow(exponent, modulus))
}

/// Compute the multiplicative inverse of `a` modulo `m`.
///
/// Runs the iterative extended Euclidean algorithm and normalizes the
/// Bezout coefficient into `[0, m - 1]` by adding `m` when it comes out
/// negative. A modulus of 1 yields 0: every integer is congruent
/// modulo 1.
///
/// # Errors
///
/// A zero modulus is rejected with a `Parameter` error. Inputs with
/// `gcd(a, m) != 1` have no inverse and are rejected with
/// `NotInvertible` instead of silently producing a meaningless value.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    validate::parameter(!m.is_zero(), "modulus", "must be nonzero")?;

    if m.is_one() {
        return Ok(BigUint::zero());
    }

    let modulus = BigInt::from(m.clone());
    let mut r0 = modulus.clone();
    let mut r1 = BigInt::from(a.clone()) % &modulus;
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    // Invariant: a * t_i = r_i (mod m) for both running rows.
    while !r1.is_zero() {
        let quotient = &r0 / &r1;
        let r2 = &r0 - &quotient * &r1;
        let t2 = &t0 - &quotient * &t1;
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }

    if !r0.is_one() {
        return Err(Error::NotInvertible {
            context: "modular inverse",
        });
    }

    let mut inverse = t0 % &modulus;
    if inverse.sign() == Sign::Minus {
        inverse += &modulus;
    }

    match inverse.to_biguint() {
        Some(value) => Ok(value),
        None => Err(Error::Other("inverse normalization left a negative value")),
    }
}
