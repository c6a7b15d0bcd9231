//! # up-quota
//!
//! Absences, allowances and the yearly quota computation.
//!
//! [`accumulate`] charges the vacation markings of one year against an
//! allowance, using the holiday calendar of the user's state from
//! [`up_time`].  Everything here is a value type; persistence and transport
//! live outside the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Absence types and the per-user absence map.
pub mod absence;

/// The quota accountant.
pub mod accountant;

/// Per-year allowance overrides.
pub mod allowance;

/// Normalized bulk-import batches.
pub mod import;

/// Accounting settings.
pub mod settings;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use absence::{AbsenceMap, AbsenceType};
pub use accountant::{accumulate, InconsistentAbsence, QuotaAccountant, QuotaResult};
pub use allowance::AllowanceBook;
pub use import::ImportBatch;
pub use settings::{HolidayAbsencePolicy, QuotaSettings, DEFAULT_ALLOWANCE};
