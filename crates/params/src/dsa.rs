//! Constants for the finite-field Digital Signature Algorithm (DSA)

/// Bit length of the subgroup order q
pub const Q_BIT_SIZE: usize = 160;

/// Miller-Rabin round count used while constructing domain parameters
pub const GENERATION_CERTAINTY: u32 = 10;

/// Miller-Rabin round count used when validating untrusted parameters
pub const VALIDATION_CERTAINTY: u32 = 20;

/// Attempt budget for the cofactor search that finds p = k*q + 1
///
/// Prime density around 160-bit values makes a hit expected within a few
/// hundred candidates; the budget leaves orders of magnitude of headroom.
pub const MAX_COFACTOR_SEARCH: usize = 1 << 17;

/// Attempt budget for generator candidate draws
pub const MAX_GENERATOR_ATTEMPTS: usize = 128;

/// Attempt budget for ephemeral-key resampling during signing
pub const MAX_SIGNING_ATTEMPTS: usize = 64;
