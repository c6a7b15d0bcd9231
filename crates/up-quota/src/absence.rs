//! Absence types and the per-user absence map.
//!
//! The persistence layer stores one absence per (user, date) under a short
//! code.  [`AbsenceMap`] is the in-memory form the accountant reads; it also
//! carries the boundary helpers that turn stored or submitted code pairs
//! into typed entries.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::import::ImportBatch;
use up_core::errors::{Error, Result};
use up_time::{Date, Year};

/// Kind of a marked absence.
///
/// Only the two vacation kinds are deducted from the allowance; special and
/// unpaid leave are counted for information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum AbsenceType {
    /// Full vacation day (`UR`).
    FullVacation,
    /// Half vacation day (`UR/2`).
    HalfVacation,
    /// Special leave (`SUR`), e.g. for a wedding or a move.
    SpecialLeave,
    /// Unpaid leave (`UUR`).
    UnpaidLeave,
}

impl AbsenceType {
    /// Every absence type, in display order.
    pub const ALL: [AbsenceType; 4] = [
        AbsenceType::FullVacation,
        AbsenceType::HalfVacation,
        AbsenceType::SpecialLeave,
        AbsenceType::UnpaidLeave,
    ];

    /// Storage code.
    pub const fn code(self) -> &'static str {
        match self {
            AbsenceType::FullVacation => "UR",
            AbsenceType::HalfVacation => "UR/2",
            AbsenceType::SpecialLeave => "SUR",
            AbsenceType::UnpaidLeave => "UUR",
        }
    }

    /// German label for the legend.
    pub const fn label(self) -> &'static str {
        match self {
            AbsenceType::FullVacation => "Urlaub",
            AbsenceType::HalfVacation => "Halber Urlaubstag",
            AbsenceType::SpecialLeave => "Sonderurlaub",
            AbsenceType::UnpaidLeave => "Unbezahlter Urlaub",
        }
    }

    /// Days deducted from the allowance for one marking on a full workday.
    pub fn charge(self) -> f64 {
        f64::from(self.half_days()) / 2.0
    }

    /// Whether markings of this kind reduce the allowance at all.
    pub fn is_deductible(self) -> bool {
        self.half_days() > 0
    }

    /// The charge in half days: 2, 1, or 0.
    pub(crate) const fn half_days(self) -> u8 {
        match self {
            AbsenceType::FullVacation => 2,
            AbsenceType::HalfVacation => 1,
            AbsenceType::SpecialLeave | AbsenceType::UnpaidLeave => 0,
        }
    }
}

impl FromStr for AbsenceType {
    type Err = Error;

    /// Parse a storage code.  Codes are matched exactly.
    fn from_str(s: &str) -> Result<Self> {
        AbsenceType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| Error::InvalidAbsenceType(s.to_string()))
    }
}

impl TryFrom<String> for AbsenceType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<AbsenceType> for &'static str {
    fn from(t: AbsenceType) -> &'static str {
        t.code()
    }
}

impl std::fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One user's absences, at most one per date, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbsenceMap {
    entries: BTreeMap<Date, AbsenceType>,
}

impl AbsenceMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(ISO date, code)` pairs as submitted or stored.
    ///
    /// All or nothing: the first malformed date or unknown code rejects the
    /// whole batch.
    pub fn from_wire<I, D, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (D, C)>,
        D: AsRef<str>,
        C: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|(date, code)| -> Result<(Date, AbsenceType)> {
                Ok((Date::parse_iso(date.as_ref())?, code.as_ref().parse()?))
            })
            .collect()
    }

    /// The map as `(ISO date, code)` pairs.
    pub fn to_wire(&self) -> BTreeMap<String, &'static str> {
        self.entries
            .iter()
            .map(|(date, kind)| (date.to_string(), kind.code()))
            .collect()
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of marked dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The absence marked on `date`.
    pub fn get(&self, date: Date) -> Option<AbsenceType> {
        self.entries.get(&date).copied()
    }

    /// Whether `date` is marked.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// All markings in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, AbsenceType)> + '_ {
        self.entries.iter().map(|(&d, &t)| (d, t))
    }

    /// Markings dated within `year`, in date order.
    pub fn in_year(&self, year: Year) -> impl Iterator<Item = (Date, AbsenceType)> + '_ {
        self.entries
            .range(year.first_day()..=year.last_day())
            .map(|(&d, &t)| (d, t))
    }

    /// A copy restricted to `year`.
    pub fn for_year(&self, year: Year) -> AbsenceMap {
        self.in_year(year).collect()
    }

    /// Years that have at least one marking.
    pub fn years(&self) -> BTreeSet<u16> {
        self.entries.keys().map(|d| d.year()).collect()
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Mark `date`, replacing any earlier marking.  Returns the replaced one.
    pub fn insert(&mut self, date: Date, kind: AbsenceType) -> Option<AbsenceType> {
        self.entries.insert(date, kind)
    }

    /// Mark every pair, replacing earlier markings.  Returns the number of
    /// pairs written.
    pub fn upsert_all(&mut self, pairs: impl IntoIterator<Item = (Date, AbsenceType)>) -> usize {
        let mut written = 0;
        for (date, kind) in pairs {
            self.entries.insert(date, kind);
            written += 1;
        }
        written
    }

    /// Remove the marking on `date`.
    pub fn remove(&mut self, date: Date) -> Option<AbsenceType> {
        self.entries.remove(&date)
    }

    /// Remove the markings on all `dates`.  Returns how many existed.
    pub fn remove_all(&mut self, dates: impl IntoIterator<Item = Date>) -> usize {
        dates
            .into_iter()
            .filter(|d| self.entries.remove(d).is_some())
            .count()
    }

    /// Merge an imported year exactly as if its entries were typed in by
    /// hand.  Returns the number of entries written.
    pub fn apply_import(&mut self, batch: &ImportBatch) -> usize {
        self.upsert_all(batch.iter())
    }
}

impl FromIterator<(Date, AbsenceType)> for AbsenceMap {
    fn from_iter<I: IntoIterator<Item = (Date, AbsenceType)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Date, AbsenceType)> for AbsenceMap {
    fn extend<I: IntoIterator<Item = (Date, AbsenceType)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
