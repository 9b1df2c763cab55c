//! Finite-field DSA over a 160-bit prime-order subgroup
//!
//! The classic discrete-log signature scheme of FIPS 186: domain
//! parameters (p, q, g) with q a 160-bit prime dividing p - 1 and g a
//! generator of the order-q subgroup of Z*_p, a key pair x / y = g^x
//! mod p, and (r, s) signatures over SHA-1 digest integers.
//!
//! Parameter construction favors transparency over the FIPS appendix
//! procedures: p is found as the smallest multiple k*q + 1 that is
//! probably prime, which keeps p only slightly wider than q. The sizes
//! are lab-scale; see the crate documentation for the security caveats.

use ffdsa_algorithms::hash::hash_to_integer;
use ffdsa_algorithms::modular::{mod_exp, mod_inverse};
use ffdsa_algorithms::prime::{is_probable_prime, random_probable_prime};
use ffdsa_algorithms::random::uniform_in_range;
use ffdsa_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use ffdsa_params::dsa::{
    GENERATION_CERTAINTY, MAX_COFACTOR_SEARCH, MAX_GENERATOR_ATTEMPTS, MAX_SIGNING_ATTEMPTS,
    Q_BIT_SIZE,
};
use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// DSA domain parameters: the shared (p, q, g) triple defining the
/// algebraic group every key pair and signature lives in.
///
/// Invariants after [`DomainParameters::generate`]: p and q are probable
/// primes, q divides p - 1 exactly, and g generates the order-q subgroup
/// of Z*_p.
#[derive(Clone, Debug)]
pub struct DomainParameters {
    /// Modulus prime p
    pub p: BigUint,
    /// Subgroup order q, a 160-bit prime divisor of p - 1
    pub q: BigUint,
    /// Generator of the order-q subgroup
    pub g: BigUint,
}

impl DomainParameters {
    /// Generate a fresh parameter triple from the caller's RNG.
    ///
    /// q is drawn as a 160-bit probable prime; p is the smallest
    /// multiple k*q + 1 that is itself probably prime; g is derived from
    /// a random subgroup element.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self> {
        let (p, q) = generate_pq(rng)?;
        let g = generate_g(&p, &q, rng)?;
        Ok(Self { p, q, g })
    }

    /// Check the group invariants of an untrusted parameter triple.
    ///
    /// Runs `rounds` Miller-Rabin rounds against p and q, and checks
    /// q | (p - 1), g > 1, and g^q = 1 (mod p).
    pub fn validate<R: CryptoRng + RngCore>(&self, rounds: u32, rng: &mut R) -> ApiResult<()> {
        let one = BigUint::one();

        if !is_probable_prime(&self.p, rounds, rng) {
            return Err(invalid_parameters("p failed the primality test"));
        }
        if !is_probable_prime(&self.q, rounds, rng) {
            return Err(invalid_parameters("q failed the primality test"));
        }
        if !((&self.p - &one) % &self.q).is_zero() {
            return Err(invalid_parameters("q does not divide p - 1"));
        }
        if self.g <= one {
            return Err(invalid_parameters("g is not a generator"));
        }
        if !mod_exp(&self.g, &self.q, &self.p)?.is_one() {
            return Err(invalid_parameters("g lies outside the order-q subgroup"));
        }
        Ok(())
    }
}

fn invalid_parameters(message: &str) -> ApiError {
    ApiError::InvalidParameter {
        context: "DSA domain parameters",
        message: message.to_string(),
    }
}

/// Find (p, q): a 160-bit probable prime q and the smallest p = k*q + 1
/// that is probably prime.
fn generate_pq<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<(BigUint, BigUint)> {
    let q = random_probable_prime(Q_BIT_SIZE, GENERATION_CERTAINTY, rng)?;

    let mut k = BigUint::one();
    for _ in 0..MAX_COFACTOR_SEARCH {
        let p = &k * &q + 1u32;
        if is_probable_prime(&p, GENERATION_CERTAINTY, rng) {
            return Ok((p, q));
        }
        k += 1u32;
    }

    Err(ApiError::IterationExceeded {
        context: "cofactor search for p",
        limit: MAX_COFACTOR_SEARCH,
    })
}

/// Derive a generator of the order-q subgroup.
///
/// Draws h uniformly from [2, p - 2] and raises it by the cofactor
/// exponent (p - 1)/q, redrawing while the result is 1. The accepted
/// value is the surviving candidate raised by the cofactor exponent a
/// second time; it remains an element of order q, reached through a
/// different sampling path than the single-exponentiation construction.
fn generate_g<R: CryptoRng + RngCore>(p: &BigUint, q: &BigUint, rng: &mut R) -> ApiResult<BigUint> {
    let two = BigUint::from(2u32);
    let h_upper = p - &two;
    let exponent = (p - 1u32) / q;

    for _ in 0..MAX_GENERATOR_ATTEMPTS {
        let h = uniform_in_range(rng, &two, &h_upper)?;
        let candidate = mod_exp(&h, &exponent, p)?;
        if candidate.is_one() {
            continue;
        }
        return Ok(mod_exp(&candidate, &exponent, p)?);
    }

    Err(ApiError::IterationExceeded {
        context: "generator search",
        limit: MAX_GENERATOR_ATTEMPTS,
    })
}

/// Private exponent wrapper: zeroized on drop, no Debug or Display, and
/// never handed out by the key types that carry it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct SecretExponent(BigUint);

/// DSA public key: the domain parameters plus the public value
/// y = g^x mod p.
#[derive(Clone, Debug)]
pub struct DsaPublicKey {
    /// Domain parameters the key was generated under
    pub params: DomainParameters,
    /// Public value y = g^x mod p
    pub y: BigUint,
}

/// DSA secret key: the domain parameters plus the private exponent x.
///
/// The exponent never leaves this crate; the whole key zeroizes on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DsaSecretKey {
    #[zeroize(skip)]
    params: DomainParameters,
    x: SecretExponent,
}

impl DsaSecretKey {
    /// Domain parameters the key was generated under
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }
}

/// A DSA signature pair (r, s) with both components in [1, q - 1].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaSignature {
    /// First signature component r = (g^k mod p) mod q
    pub r: BigUint,
    /// Second signature component s = k^-1 (H(m) + x r) mod q
    pub s: BigUint,
}

/// Generate a key pair under the given domain parameters.
///
/// Draws x uniformly from [2, q - 1] and computes y = g^x mod p. No
/// validation is performed beyond the range of the draw.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &DomainParameters,
    rng: &mut R,
) -> ApiResult<(DsaPublicKey, DsaSecretKey)> {
    let two = BigUint::from(2u32);
    let x = uniform_in_range(rng, &two, &(&params.q - 1u32))?;
    let y = mod_exp(&params.g, &x, &params.p)?;

    Ok((
        DsaPublicKey {
            params: params.clone(),
            y,
        },
        DsaSecretKey {
            params: params.clone(),
            x: SecretExponent(x),
        },
    ))
}

/// Sign a message with the given secret key and RNG.
///
/// Algorithm:
/// 1. H = digest integer of the message (may be negative; see
///    `ffdsa_algorithms::hash`)
/// 2. Draw ephemeral k uniformly from [1, q - 1]
/// 3. r = (g^k mod p) mod q
/// 4. s = k^-1 (H + x r) mod q
/// 5. Resample k if r = 0 or s = 0
///
/// The ephemeral scalar is used once and zeroized; a fresh one is drawn
/// on every resample.
///
/// # Errors
///
/// `IterationExceeded` if the resampling budget runs out, which does not
/// happen for honestly generated parameters.
pub fn sign<R: CryptoRng + RngCore>(
    message: &[u8],
    secret_key: &DsaSecretKey,
    rng: &mut R,
) -> ApiResult<DsaSignature> {
    let DomainParameters { p, q, g } = &secret_key.params;
    let digest = hash_to_integer(message);
    let q_int = BigInt::from(q.clone());

    let one = BigUint::one();
    let k_upper = q - &one;

    for _ in 0..MAX_SIGNING_ATTEMPTS {
        let k = Zeroizing::new(uniform_in_range(rng, &one, &k_upper)?);
        if k.is_zero() {
            // The draw already excludes zero; kept as a guard on the
            // range contract.
            continue;
        }

        let r = mod_exp(g, &k, p)? % q;
        let k_inv = mod_inverse(&k, q)?;

        // s is computed over signed integers because the digest may be
        // negative; a negative truncated remainder is treated like s = 0
        // and resampled.
        let x_r = BigInt::from(&secret_key.x.0 * &r);
        let s_signed = (BigInt::from(k_inv) * (&digest + x_r)) % &q_int;
        let s = match s_signed.to_biguint() {
            Some(s) => s,
            None => continue,
        };

        if r.is_zero() || s.is_zero() {
            continue;
        }
        return Ok(DsaSignature { r, s });
    }

    Err(ApiError::IterationExceeded {
        context: "DSA signing",
        limit: MAX_SIGNING_ATTEMPTS,
    })
}

/// Verify a signature pair against a message and public key.
///
/// Algorithm:
/// 1. Reject unless r and s lie in [1, q - 1]
/// 2. w = s^-1 mod q
/// 3. u1 = H w mod q, u2 = r w mod q, each lifted into [0, q - 1]
/// 4. v = ((g^u1 * y^u2) mod p) mod q
/// 5. Valid iff v = r
///
/// Arithmetic failures on attacker-supplied components count as a failed
/// verification, never a panic.
pub fn verify(message: &[u8], signature: &DsaSignature, public_key: &DsaPublicKey) -> bool {
    let DomainParameters { p, q, g } = &public_key.params;
    if p.is_zero() || q.is_zero() {
        return false;
    }

    let one = BigUint::one();
    let component_upper = q - &one;

    if signature.r < one || signature.r > component_upper {
        return false;
    }
    if signature.s < one || signature.s > component_upper {
        return false;
    }

    let w = match mod_inverse(&signature.s, q) {
        Ok(w) => w,
        Err(_) => return false,
    };

    let digest = hash_to_integer(message);
    let q_int = BigInt::from(q.clone());
    let w_int = BigInt::from(w);

    let u1 = (&digest * &w_int) % &q_int;
    let u2 = (BigInt::from(signature.r.clone()) * &w_int) % &q_int;

    // Lift both scalars into [0, q - 1]; the digest term can drag u1
    // below zero.
    let u1 = (u1 + &q_int) % &q_int;
    let u2 = (u2 + &q_int) % &q_int;
    let (Some(u1), Some(u2)) = (u1.to_biguint(), u2.to_biguint()) else {
        return false;
    };

    let g_term = match mod_exp(g, &u1, p) {
        Ok(value) => value,
        Err(_) => return false,
    };
    let y_term = match mod_exp(&public_key.y, &u2, p) {
        Ok(value) => value,
        Err(_) => return false,
    };

    let v = ((g_term * y_term) % p) % q;

    v.to_bytes_be().ct_eq(&signature.r.to_bytes_be()).into()
}

/* ------------------------------------------------------------------------- */
/*                          Signature trait wiring                           */
/* ------------------------------------------------------------------------- */

/// DSA signature scheme with a 160-bit subgroup order
///
/// The trait-level entry point: `keypair` generates fresh domain
/// parameters along with the key pair, so every key pair carries its own
/// group.
pub struct Dsa160;

impl SignatureTrait for Dsa160 {
    type PublicKey = DsaPublicKey;
    type SecretKey = DsaSecretKey;
    type SignatureData = DsaSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "DSA-160"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let params = DomainParameters::generate(rng)?;
        generate_keypair(&params, rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        // Ephemeral randomness comes from the process-wide generator,
        // seeded once from the operating system.
        let mut rng = rand::thread_rng();
        self::sign(message, secret_key, &mut rng)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if self::verify(message, signature, public_key) {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "DSA-160 verify",
                message: "signature rejected".to_string(),
            })
        }
    }
}
