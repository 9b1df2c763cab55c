//! Probabilistic primality testing and prime search
//!
//! Miller-Rabin with a caller-controlled round count. After `rounds`
//! passing rounds the probability that a composite slipped through is at
//! most 4^(-rounds).

use crate::error::{validate, Error, Result};
use crate::random::uniform_in_range;
use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Cap on the odd-candidate stepping loop in [`random_probable_prime`].
///
/// Far beyond any realistic prime gap at the supported sizes.
const MAX_CANDIDATE_STEPS: usize = 1 << 16;

/// Miller-Rabin probabilistic primality test.
///
/// Returns `true` when `candidate` survives `rounds` rounds against
/// independently drawn witness bases, i.e. is probably prime with error
/// probability at most 4^(-rounds). Values below 2 and even values other
/// than 2 are rejected outright.
pub fn is_probable_prime<R: CryptoRng + RngCore>(
    candidate: &BigUint,
    rounds: u32,
    rng: &mut R,
) -> bool {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *candidate == two || *candidate == three {
        return true;
    }
    if *candidate < two || candidate.is_even() {
        return false;
    }

    // candidate - 1 = d * 2^s with d odd
    let n_minus_1 = candidate - 1u32;
    let mut d = n_minus_1.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let witness_upper = candidate - &two;
    for _ in 0..rounds {
        let a = match uniform_in_range(rng, &two, &witness_upper) {
            Ok(a) => a,
            Err(_) => return false,
        };

        let mut x = a.modpow(&d, candidate);
        if x.is_one() || x == n_minus_1 {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, candidate);
            if x.is_one() {
                return false;
            }
            if x == n_minus_1 {
                break;
            }
        }

        if x != n_minus_1 {
            return false;
        }
    }

    true
}

/// Search for a probable prime of `bit_size` bits.
///
/// Draws uniformly from `[2^(bit_size-1), 2^bit_size - 1]`, forces the
/// candidate odd, then steps upward by 2 until a candidate survives
/// `rounds` Miller-Rabin rounds.
///
/// # Errors
///
/// A bit size below 2 is rejected with a `Parameter` error; an exhausted
/// stepping budget surfaces as `IterationLimit`.
pub fn random_probable_prime<R: CryptoRng + RngCore>(
    bit_size: usize,
    rounds: u32,
    rng: &mut R,
) -> Result<BigUint> {
    validate::parameter(bit_size >= 2, "bit_size", "prime search needs at least 2 bits")?;

    let low = BigUint::one() << (bit_size - 1);
    let high = (BigUint::one() << bit_size) - 1u32;

    let mut candidate = uniform_in_range(rng, &low, &high)?;
    if candidate.is_even() {
        candidate += 1u32;
    }

    for _ in 0..MAX_CANDIDATE_STEPS {
        if is_probable_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
        candidate += 2u32;
    }

    Err(Error::IterationLimit {
        operation: "probable prime search",
        limit: MAX_CANDIDATE_STEPS,
    })
}

#[cfg(test)]
mod tests;
