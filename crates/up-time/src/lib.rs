//! # up-time
//!
//! Dates, federal states, public holidays and working-day classification.
//!
//! The computations here are pure functions of their arguments:
//! * [`easter_sunday`]: Gregorian Easter Sunday,
//! * [`holidays_for`]: all holidays of a state in a year,
//! * [`classify`]: weekend / full holiday / half holiday / workday,
//! * [`expand_range`]: the editable working days between two dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the working-day classifier.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Gregorian Easter Sunday.
pub mod easter;

/// Holiday rules and per-year holiday sets.
pub mod holiday;

/// The 16 federal states and the regional holiday table.
pub mod jurisdiction;

/// Working-day selections between two dates.
pub mod selection;

/// `Weekday`: day of the week.
pub mod weekday;

/// `Year`: a year in the supported range.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{classify, Calendar, DayKind, StateCalendar, WeekendsOnly};
pub use date::Date;
pub use easter::{easter_sunday, easter_sunday_md};
pub use holiday::{holidays_for, Holiday, HolidayEntry, HolidaySet, HolidayWeight};
pub use jurisdiction::Jurisdiction;
pub use selection::{expand_range, Selection};
pub use weekday::Weekday;
pub use year::Year;
