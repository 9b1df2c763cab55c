//! Number-theoretic primitives for the ffdsa workspace
//!
//! The arbitrary-precision building blocks behind the DSA scheme:
//! modular exponentiation and inversion, probabilistic primality testing,
//! uniform sampling over big-integer ranges, and the digest-to-integer
//! decoding applied to messages before signing.
//!
//! Every operation that draws randomness takes the caller's generator as
//! an explicit parameter; nothing in this crate constructs its own.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Number-theoretic modules
pub mod hash;
pub mod modular;
pub mod prime;
pub mod random;

pub use hash::hash_to_integer;
pub use modular::{mod_exp, mod_inverse};
pub use prime::{is_probable_prime, random_probable_prime};
pub use random::uniform_in_range;
