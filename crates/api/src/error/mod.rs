//! Error handling for ffdsa operations

mod types;

pub use types::{Error, Result};
