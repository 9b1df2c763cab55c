//! Digital signature schemes for the ffdsa workspace
//!
//! Currently this crate provides one scheme: the finite-field Digital
//! Signature Algorithm over a 160-bit prime-order subgroup, built on the
//! number-theoretic primitives in `ffdsa-algorithms`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dsa;

pub use dsa::{Dsa160, DomainParameters, DsaPublicKey, DsaSecretKey, DsaSignature};
