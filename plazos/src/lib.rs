//! # plazos
//!
//! Colombian business-day calendar engine for statutory petition deadlines.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `plazo-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use plazos::time::{BusinessDayCalculator, Date, NoOverrides};
//!
//! let calc = BusinessDayCalculator::new(NoOverrides);
//! let intake = Date::from_ymd(2025, 9, 10)?;
//! let due = calc.response_deadline(intake)?;
//! assert_eq!(due, Date::from_ymd(2025, 10, 1)?);
//! # Ok::<(), plazos::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the `ensure!` macro.
pub use plazo_core as core;

/// Date, holiday rules, override store, and the business-day calculator.
pub use plazo_time as time;
