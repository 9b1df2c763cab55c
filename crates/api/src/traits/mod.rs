//! Trait definitions for the ffdsa public API

pub mod signature;

pub use signature::Signature;
