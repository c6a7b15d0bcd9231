//! `Calendar` trait and the working-day classifier.
//!
//! A calendar sorts every date into one of the [`DayKind`] buckets.  Only
//! [`DayKind::Workday`] dates can be selected for absences in bulk; weekends
//! and holidays of either weight are skipped.

use crate::date::Date;
use crate::holiday::{holidays_in, HolidaySet, HolidayWeight};
use crate::jurisdiction::Jurisdiction;

/// Classification of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DayKind {
    /// Saturday or Sunday, whether or not a holiday falls on it.
    Weekend,
    /// Weekday public holiday, whole day off.
    HolidayFull,
    /// Weekday public holiday, afternoon off.
    HolidayHalf,
    /// Regular working day.
    Workday,
}

impl DayKind {
    /// Classify `date` against an already computed holiday set.
    ///
    /// `holidays` must belong to the year of `date`; dates of other years
    /// are classified by weekday alone.
    pub fn of(date: Date, holidays: &HolidaySet) -> DayKind {
        if date.weekday().is_weekend() {
            return DayKind::Weekend;
        }
        match holidays.weight_on(date) {
            Some(HolidayWeight::Full) => DayKind::HolidayFull,
            Some(HolidayWeight::Half) => DayKind::HolidayHalf,
            None => DayKind::Workday,
        }
    }

    /// Whether this is a regular working day.
    pub fn is_workday(self) -> bool {
        self == DayKind::Workday
    }

    /// Share of the day that is working time: 1.0 on a workday, 0.5 on a
    /// half holiday, 0.0 otherwise.
    pub fn working_share(self) -> f64 {
        match self {
            DayKind::Workday => 1.0,
            DayKind::HolidayHalf => 0.5,
            DayKind::HolidayFull | DayKind::Weekend => 0.0,
        }
    }
}

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Classify `date`.
    fn classify(&self, date: Date) -> DayKind;

    /// Return `true` if `date` is a regular working day.
    fn is_workday(&self, date: Date) -> bool {
        self.classify(date).is_workday()
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count the working days between `from` and `to`, both inclusive.
    ///
    /// The order of the arguments does not matter.
    fn workdays_between(&self, from: Date, to: Date) -> u32 {
        self.workday_list(from, to).len() as u32
    }

    /// The working days between `from` and `to`, both inclusive, ascending.
    ///
    /// The order of the arguments does not matter.
    fn workday_list(&self, from: Date, to: Date) -> Vec<Date> {
        let (start, end) = ordered(from, to);
        start
            .iter_through(end)
            .filter(|&d| self.is_workday(d))
            .collect()
    }
}

fn ordered(a: Date, b: Date) -> (Date, Date) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Calendar of one federal state: weekends plus the state's holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateCalendar {
    jurisdiction: Jurisdiction,
}

impl StateCalendar {
    /// Calendar for `jurisdiction`.
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self { jurisdiction }
    }

    /// The state this calendar follows.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }
}

impl Calendar for StateCalendar {
    fn name(&self) -> &str {
        self.jurisdiction.name()
    }

    fn classify(&self, date: Date) -> DayKind {
        if self.is_weekend(date) {
            return DayKind::Weekend;
        }
        DayKind::of(date, &holidays_in(date.year(), self.jurisdiction))
    }

    /// Builds one holiday set per calendar year crossed rather than one per
    /// date.
    fn workday_list(&self, from: Date, to: Date) -> Vec<Date> {
        let (start, end) = ordered(from, to);
        let mut holidays = holidays_in(start.year(), self.jurisdiction);
        start
            .iter_through(end)
            .filter(|&d| {
                if d.year() != holidays.year() {
                    holidays = holidays_in(d.year(), self.jurisdiction);
                }
                DayKind::of(d, &holidays).is_workday()
            })
            .collect()
    }
}

/// A calendar with weekends only and no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn classify(&self, date: Date) -> DayKind {
        if self.is_weekend(date) {
            DayKind::Weekend
        } else {
            DayKind::Workday
        }
    }
}

/// Classify `date` in `jurisdiction`.
pub fn classify(date: Date, jurisdiction: Jurisdiction) -> DayKind {
    StateCalendar::new(jurisdiction).classify(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekend_wins_over_holiday() {
        // 2022-12-25 was a Sunday
        assert_eq!(classify(date(2022, 12, 25), Jurisdiction::Bayern), DayKind::Weekend);
    }

    #[test]
    fn holiday_weights() {
        let by = Jurisdiction::Bayern;
        assert_eq!(classify(date(2025, 1, 6), by), DayKind::HolidayFull);
        assert_eq!(classify(date(2025, 12, 24), by), DayKind::HolidayHalf);
        assert_eq!(classify(date(2025, 1, 7), by), DayKind::Workday);
        // Epiphany is a regular day in Berlin
        assert_eq!(classify(date(2025, 1, 6), Jurisdiction::Berlin), DayKind::Workday);
    }

    #[test]
    fn outside_supported_years() {
        // 1999-12-24 was a Friday; holidays still apply
        assert_eq!(classify(date(1999, 12, 24), Jurisdiction::Hamburg), DayKind::HolidayHalf);
    }

    #[test]
    fn working_share() {
        assert_eq!(DayKind::Workday.working_share(), 1.0);
        assert_eq!(DayKind::HolidayHalf.working_share(), 0.5);
        assert_eq!(DayKind::HolidayFull.working_share(), 0.0);
        assert_eq!(DayKind::Weekend.working_share(), 0.0);
    }

    #[test]
    fn weekends_only() {
        let cal = WeekendsOnly;
        assert!(cal.is_workday(date(2025, 12, 25)));
        assert!(!cal.is_workday(date(2025, 6, 7)));
    }

    #[test]
    fn workdays_between() {
        let cal = StateCalendar::new(Jurisdiction::Berlin);
        // Mon 2025-04-14 .. Mon 2025-04-21: Good Friday and Easter Monday off
        let a = date(2025, 4, 14);
        let b = date(2025, 4, 21);
        assert_eq!(cal.workdays_between(a, b), 4);
        assert_eq!(cal.workdays_between(b, a), 4);
        assert_eq!(WeekendsOnly.workdays_between(a, b), 6);
        assert_eq!(cal.name(), "Berlin");
    }

    #[test]
    fn workday_list_across_new_year() {
        // 2024-12-23 .. 2026-01-09 crosses two year boundaries
        let cal = StateCalendar::new(Jurisdiction::SachsenAnhalt);
        let a = date(2024, 12, 23);
        let b = date(2026, 1, 9);
        let per_date: Vec<Date> = a.iter_through(b).filter(|&d| cal.is_workday(d)).collect();
        assert_eq!(cal.workday_list(b, a), per_date);
        assert!(!per_date.contains(&date(2025, 1, 6)));
        assert!(!per_date.contains(&date(2026, 1, 6)));
        assert!(per_date.contains(&date(2026, 1, 2)));
        assert_eq!(cal.workdays_between(a, b), per_date.len() as u32);
    }
}
