//! Digest-to-integer decoding for message signing
//!
//! Messages are hashed with SHA-1 and the 20-byte digest is decoded into
//! an arbitrary-precision integer: a single zero byte is appended, the
//! buffer is reversed, and the result is read as a two's-complement
//! little-endian integer. After the reversal the appended byte sits at
//! the least-significant position, so a digest whose leading byte is
//! 0x80 or above decodes to a negative integer. Callers reduce the value
//! modulo the group order, which preserves congruence for either sign.

use num_bigint_dig::BigInt;
use sha1::{Digest, Sha1};

/// Map a message to its arbitrary-precision digest integer.
///
/// The decoding is deterministic: the same message always yields the same
/// integer. The value may be negative (see the module documentation).
pub fn hash_to_integer(message: &[u8]) -> BigInt {
    let digest = Sha1::digest(message);

    let mut buf = Vec::with_capacity(digest.len() + 1);
    buf.extend_from_slice(&digest);
    buf.push(0);
    buf.reverse();

    BigInt::from_signed_bytes_le(&buf)
}
