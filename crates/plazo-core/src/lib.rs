//! # plazo-core
//!
//! Error types and shared definitions for the plazos workspace.
//!
//! Everything else in the workspace builds on the [`errors::Error`] enum and
//! the [`ensure!`] macro defined here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
