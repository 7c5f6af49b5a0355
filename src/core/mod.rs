//! Core types, parameters and errors

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
