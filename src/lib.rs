//! # ffdsa
//!
//! A reference implementation of the finite-field Digital Signature
//! Algorithm (DSA) built from first principles: probabilistic primality
//! testing, prime-pair domain parameter construction, modular arithmetic,
//! and the (r, s) sign/verify protocol, all over arbitrary-precision
//! integers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ffdsa = "0.1"
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ffdsa-api`]: public traits and error types
//! - [`ffdsa-params`]: domain-parameter constants and retry budgets
//! - [`ffdsa-algorithms`]: number-theoretic primitives
//! - [`ffdsa-sign`]: the DSA scheme
//!
//! ## Security
//!
//! The parameter sizes are lab-scale and the arithmetic is not
//! constant-time. This workspace exists to make the number theory behind
//! DSA legible, not to protect real data.

#![forbid(unsafe_code)]

pub use ffdsa_algorithms as algorithms;
pub use ffdsa_api as api;
pub use ffdsa_params as params;
pub use ffdsa_sign as sign;

/// Common imports for ffdsa users
pub mod prelude {
    // Re-export error types and the signature trait
    pub use crate::api::{Error, Result, Signature};

    // Re-export the DSA scheme and its value types
    pub use crate::sign::dsa::{
        Dsa160, DomainParameters, DsaPublicKey, DsaSecretKey, DsaSignature,
    };
}
