//! # up-core
//!
//! Core types and error definitions shared by the calendar and quota crates.
//!
//! This crate provides the error enum, the `Result` alias, the `ensure!`
//! precondition macro and a few numeric aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for day amounts.
pub type Real = f64;

/// A number of vacation days, possibly fractional (half days).
pub type Days = Real;

/// Non-negative integer type used for counters.
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
