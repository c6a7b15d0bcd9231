//! # urlaubsplaner
//!
//! Holiday calendar and vacation quota engine for the German federal states.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  Application code should depend on this crate rather
//! than on the individual `up-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! urlaubsplaner = "0.1"
//! ```
//!
//! ```rust
//! use urlaubsplaner::prelude::*;
//!
//! let year = Year::new(2025).unwrap();
//! let state: Jurisdiction = "by".parse().unwrap();
//!
//! // Mon 2025-01-06 is Epiphany in Bavaria
//! let week = expand_range(
//!     Date::from_ymd(2025, 1, 6).unwrap(),
//!     Date::from_ymd(2025, 1, 10).unwrap(),
//!     state,
//! );
//! assert_eq!(week.len(), 4);
//!
//! let mut absences = AbsenceMap::new();
//! absences.upsert_all(week.assign(AbsenceType::FullVacation));
//! let quota = accumulate(year, 30.0, &absences, state);
//! assert_eq!(quota.remaining, 26.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `Result` alias and numeric aliases.
pub use up_core as core;

/// Dates, states, holidays and working-day classification.
pub use up_time as time;

/// Absences, allowances and quota accounting.
pub use up_quota as quota;

/// The types and entry points most callers need.
pub mod prelude {
    pub use up_core::{Days, Error, Result};
    pub use up_quota::{
        accumulate, AbsenceMap, AbsenceType, AllowanceBook, HolidayAbsencePolicy, ImportBatch,
        QuotaAccountant, QuotaResult, QuotaSettings,
    };
    pub use up_time::{
        classify, easter_sunday, expand_range, holidays_for, Calendar, Date, DayKind, Holiday,
        HolidaySet, Jurisdiction, Selection, StateCalendar, Year,
    };
}
