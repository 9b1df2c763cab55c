//! Constant values for the ffdsa workspace
//!
//! Size parameters and retry budgets shared by the generation and signing
//! code. Keeping them in one crate makes the tunable surface of the
//! scheme visible at a glance.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dsa;
