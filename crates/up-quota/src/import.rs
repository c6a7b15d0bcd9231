//! Normalized bulk-import batches.
//!
//! The spreadsheet importer detects one sheet per year and reduces it to
//! `(date, absence type)` pairs.  An [`ImportBatch`] is that reduced form;
//! once built it is merged with [`AbsenceMap::apply_import`] and is
//! indistinguishable from manual entry.
//!
//! [`AbsenceMap::apply_import`]: crate::absence::AbsenceMap::apply_import

use std::collections::BTreeMap;

use crate::absence::AbsenceType;
use up_core::ensure;
use up_core::errors::Result;
use up_time::{Date, Year};

/// The absences detected for one year of an imported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    year: Year,
    entries: BTreeMap<Date, AbsenceType>,
}

impl ImportBatch {
    /// Collect `pairs` for `year`.
    ///
    /// Every date must lie in `year`.  A date listed twice keeps its last
    /// type, as repeated manual entry would.
    pub fn new(year: Year, pairs: impl IntoIterator<Item = (Date, AbsenceType)>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (date, kind) in pairs {
            ensure!(
                year.contains(date),
                "imported date {date} lies outside the sheet year {year}"
            );
            entries.insert(date, kind);
        }
        Ok(Self { year, entries })
    }

    /// The sheet year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet had no absences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, AbsenceType)> + '_ {
        self.entries.iter().map(|(&d, &t)| (d, t))
    }
}
