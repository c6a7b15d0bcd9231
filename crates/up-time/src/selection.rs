//! `Selection`: the working days between two clicked dates.
//!
//! When a second shift-click closes a range in the planner, every date
//! between the two anchors is offered for bulk editing, except weekends and
//! holidays of either weight.

use crate::calendar::{Calendar, StateCalendar};
use crate::date::Date;
use crate::jurisdiction::Jurisdiction;

/// An ascending sequence of editable working days.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    dates: Vec<Date>,
}

impl Selection {
    /// Working days of `calendar` in the inclusive range spanned by `anchor`
    /// and `target`, in calendar order whichever was clicked first.
    pub fn between(calendar: &dyn Calendar, anchor: Date, target: Date) -> Self {
        let (first, last) = if anchor <= target {
            (anchor, target)
        } else {
            (target, anchor)
        };
        Self {
            dates: calendar.workday_list(first, last),
        }
    }

    /// All selected dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of selected dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if nothing qualifies.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest selected date.
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Latest selected date.
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Whether `date` is part of the selection.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Iterate over the selected dates.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Date>> {
        self.dates.iter().copied()
    }

    /// Pair every selected date with `value`, ready to be written as a bulk
    /// edit.
    pub fn assign<'a, T: Copy + 'a>(&'a self, value: T) -> impl Iterator<Item = (Date, T)> + 'a {
        self.iter().map(move |d| (d, value))
    }
}

impl IntoIterator for Selection {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = Date;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Date>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Editable working days between `anchor` and `target` in `jurisdiction`.
pub fn expand_range(anchor: Date, target: Date, jurisdiction: Jurisdiction) -> Selection {
    Selection::between(&StateCalendar::new(jurisdiction), anchor, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendsOnly;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn skips_weekend() {
        // Fri 2025-06-06 .. Tue 2025-06-10, Whit Monday on the 9th
        let s = expand_range(date(2025, 6, 6), date(2025, 6, 10), Jurisdiction::Berlin);
        assert_eq!(s.dates(), &[date(2025, 6, 6), date(2025, 6, 10)]);
    }

    #[test]
    fn order_does_not_matter() {
        let a = date(2025, 3, 3);
        let b = date(2025, 3, 14);
        let cal = WeekendsOnly;
        assert_eq!(Selection::between(&cal, a, b), Selection::between(&cal, b, a));
        assert_eq!(Selection::between(&cal, b, a).first(), Some(a));
    }

    #[test]
    fn single_holiday_is_empty() {
        let d = date(2025, 12, 24);
        let s = expand_range(d, d, Jurisdiction::Bremen);
        assert!(s.is_empty());
        assert_eq!(s.first(), None);
    }

    #[test]
    fn assign() {
        let s = Selection::between(&WeekendsOnly, date(2025, 6, 6), date(2025, 6, 9));
        let pairs: Vec<_> = s.assign('U').collect();
        assert_eq!(pairs, [(date(2025, 6, 6), 'U'), (date(2025, 6, 9), 'U')]);
        assert!(s.contains(date(2025, 6, 9)));
        assert!(!s.contains(date(2025, 6, 7)));
    }

    #[test]
    fn assign_borrowed_value() {
        let label = String::from("UR");
        let s = expand_range(date(2025, 6, 2), date(2025, 6, 3), Jurisdiction::Hessen);
        let pairs: Vec<(Date, &str)> = s.assign(label.as_str()).collect();
        assert_eq!(pairs, [(date(2025, 6, 2), "UR"), (date(2025, 6, 3), "UR")]);
    }
}
