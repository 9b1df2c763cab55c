//! Uniform sampling over arbitrary-precision integer ranges

use crate::error::{validate, Result};
use num_bigint_dig::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

/// Draw a uniformly distributed integer from the inclusive range
/// `[min, max]`.
///
/// The bounds may span hundreds of bits.
///
/// # Errors
///
/// A range whose lower bound exceeds its upper bound is an input-contract
/// violation and is rejected with a `Parameter` error.
pub fn uniform_in_range<R: CryptoRng + RngCore>(
    rng: &mut R,
    min: &BigUint,
    max: &BigUint,
) -> Result<BigUint> {
    validate::parameter(min <= max, "range", "lower bound exceeds upper bound")?;

    let upper = max + 1u32;
    Ok(rng.gen_biguint_range(min, &upper))
}
