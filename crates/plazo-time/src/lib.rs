//! # plazo-time
//!
//! Date type, Colombian holiday rules, override store, and the business-day
//! calculator used to track statutory petition deadlines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day calculator and non-business-day classification.
pub mod calculator;

/// Colombia national-holiday rules.
pub mod colombia;

/// `Date` type.
pub mod date;

/// Override-day entities and the `OverrideStore` trait.
pub mod overrides;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{BusinessDayCalculator, NonBusinessReason, STATUTORY_RESPONSE_DAYS};
pub use colombia::Colombia;
pub use date::Date;
pub use overrides::{InMemoryOverrides, NoOverrides, NonBusinessDayOverride, OverrideStore};
pub use weekday::Weekday;
