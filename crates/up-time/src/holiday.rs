//! Public holidays for a (year, state) pair.
//!
//! The set is assembled from three sources:
//! * nationwide holidays on fixed dates (including the two half days,
//!   Christmas Eve and New Year's Eve),
//! * nationwide holidays at a fixed offset from Easter Sunday,
//! * the state's regional holidays, taken from
//!   [`Jurisdiction::regional_holidays`].
//!
//! A date carries at most one entry.  When two rules land on the same date
//! (Ascension Day on May 1 in 2008, for instance) the full-weight rule wins,
//! and between rules of equal weight the one listed first keeps the slot.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::date::Date;
use crate::easter::easter_sunday_in;
use crate::jurisdiction::Jurisdiction;
use crate::weekday::Weekday;
use crate::year::Year;

/// How much of a working day a holiday removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum HolidayWeight {
    /// Half a day off (the afternoon).
    Half,
    /// The whole day off.
    Full,
}

impl HolidayWeight {
    /// Share of the working day the holiday removes (0.5 or 1.0).
    pub fn fraction(self) -> f64 {
        match self {
            HolidayWeight::Half => 0.5,
            HolidayWeight::Full => 1.0,
        }
    }
}

/// How a holiday's date is derived from the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Same month and day every year.
    Fixed(u8, u8),
    /// Days after (or before, if negative) Easter Sunday.
    Easter(i32),
    /// The last Wednesday strictly before the given month and day.
    WednesdayBefore(u8, u8),
}

/// A public holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// Neujahr, January 1.
    NewYearsDay,
    /// Heilige Drei Könige, January 6.
    Epiphany,
    /// Internationaler Frauentag, March 8.
    WomensDay,
    /// Karfreitag, Easter − 2.
    GoodFriday,
    /// Ostermontag, Easter + 1.
    EasterMonday,
    /// Tag der Arbeit, May 1.
    LabourDay,
    /// Christi Himmelfahrt, Easter + 39.
    AscensionDay,
    /// Pfingstmontag, Easter + 50.
    WhitMonday,
    /// Fronleichnam, Easter + 60.
    CorpusChristi,
    /// Mariä Himmelfahrt, August 15.
    AssumptionDay,
    /// Weltkindertag, September 20.
    ChildrensDay,
    /// Tag der Deutschen Einheit, October 3.
    GermanUnityDay,
    /// Reformationstag, October 31.
    ReformationDay,
    /// Allerheiligen, November 1.
    AllSaints,
    /// Buß- und Bettag, the Wednesday before November 23.
    RepentanceDay,
    /// Heiligabend, December 24 (half day).
    ChristmasEve,
    /// 1. Weihnachtstag, December 25.
    ChristmasDay,
    /// 2. Weihnachtstag, December 26.
    SecondChristmasDay,
    /// Silvester, December 31 (half day).
    NewYearsEve,
}

impl Holiday {
    /// Holidays observed in every state, in calendar order.
    pub const NATIONWIDE: [Holiday; 11] = [
        Holiday::NewYearsDay,
        Holiday::GoodFriday,
        Holiday::EasterMonday,
        Holiday::LabourDay,
        Holiday::AscensionDay,
        Holiday::WhitMonday,
        Holiday::GermanUnityDay,
        Holiday::ChristmasEve,
        Holiday::ChristmasDay,
        Holiday::SecondChristmasDay,
        Holiday::NewYearsEve,
    ];

    /// German label as shown in the planner.
    pub const fn name(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "Neujahr",
            Holiday::Epiphany => "Heilige Drei Könige",
            Holiday::WomensDay => "Internationaler Frauentag",
            Holiday::GoodFriday => "Karfreitag",
            Holiday::EasterMonday => "Ostermontag",
            Holiday::LabourDay => "Tag der Arbeit",
            Holiday::AscensionDay => "Christi Himmelfahrt",
            Holiday::WhitMonday => "Pfingstmontag",
            Holiday::CorpusChristi => "Fronleichnam",
            Holiday::AssumptionDay => "Mariä Himmelfahrt",
            Holiday::ChildrensDay => "Weltkindertag",
            Holiday::GermanUnityDay => "Tag der Deutschen Einheit",
            Holiday::ReformationDay => "Reformationstag",
            Holiday::AllSaints => "Allerheiligen",
            Holiday::RepentanceDay => "Buß- und Bettag",
            Holiday::ChristmasEve => "Heiligabend",
            Holiday::ChristmasDay => "1. Weihnachtstag",
            Holiday::SecondChristmasDay => "2. Weihnachtstag",
            Holiday::NewYearsEve => "Silvester",
        }
    }

    /// Weight of the holiday.
    pub const fn weight(self) -> HolidayWeight {
        match self {
            Holiday::ChristmasEve | Holiday::NewYearsEve => HolidayWeight::Half,
            _ => HolidayWeight::Full,
        }
    }

    /// Whether the date moves with Easter.
    pub const fn is_moveable(self) -> bool {
        matches!(self.rule(), Rule::Easter(_))
    }

    const fn rule(self) -> Rule {
        match self {
            Holiday::NewYearsDay => Rule::Fixed(1, 1),
            Holiday::Epiphany => Rule::Fixed(1, 6),
            Holiday::WomensDay => Rule::Fixed(3, 8),
            Holiday::GoodFriday => Rule::Easter(-2),
            Holiday::EasterMonday => Rule::Easter(1),
            Holiday::LabourDay => Rule::Fixed(5, 1),
            Holiday::AscensionDay => Rule::Easter(39),
            Holiday::WhitMonday => Rule::Easter(50),
            Holiday::CorpusChristi => Rule::Easter(60),
            Holiday::AssumptionDay => Rule::Fixed(8, 15),
            Holiday::ChildrensDay => Rule::Fixed(9, 20),
            Holiday::GermanUnityDay => Rule::Fixed(10, 3),
            Holiday::ReformationDay => Rule::Fixed(10, 31),
            Holiday::AllSaints => Rule::Fixed(11, 1),
            Holiday::RepentanceDay => Rule::WednesdayBefore(11, 23),
            Holiday::ChristmasEve => Rule::Fixed(12, 24),
            Holiday::ChristmasDay => Rule::Fixed(12, 25),
            Holiday::SecondChristmasDay => Rule::Fixed(12, 26),
            Holiday::NewYearsEve => Rule::Fixed(12, 31),
        }
    }

    /// The date of this holiday in `year`.
    pub fn date_in(self, year: Year) -> Date {
        self.resolve(year.get(), easter_sunday_in(year.get()))
    }

    fn resolve(self, year: u16, easter: Date) -> Date {
        match self.rule() {
            Rule::Fixed(m, d) => Date::from_ymd_unchecked(year, m, d),
            Rule::Easter(offset) => easter + offset,
            Rule::WednesdayBefore(m, d) => {
                let day_before = Date::from_ymd_unchecked(year, m, d) - 1;
                let back = (day_before.weekday().ordinal() as i32
                    - Weekday::Wednesday.ordinal() as i32)
                    .rem_euclid(7);
                day_before - back
            }
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One holiday on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayEntry {
    /// Date of the holiday.
    pub date: Date,
    /// The rule that produced the entry.
    pub holiday: Holiday,
    /// Full or half day.
    pub weight: HolidayWeight,
}

impl HolidayEntry {
    /// German label of the holiday.
    pub fn name(&self) -> &'static str {
        self.holiday.name()
    }
}

/// All holidays of one state in one year, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: u16,
    jurisdiction: Jurisdiction,
    entries: BTreeMap<Date, HolidayEntry>,
}

impl HolidaySet {
    /// The year the set was computed for.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The state the set was computed for.
    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    /// Number of holiday dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty (never true for a real year).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry on `date`, if it is a holiday.
    pub fn get(&self, date: Date) -> Option<&HolidayEntry> {
        self.entries.get(&date)
    }

    /// Whether `date` is a holiday of either weight.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Weight of the holiday on `date`, if any.
    pub fn weight_on(&self, date: Date) -> Option<HolidayWeight> {
        self.get(date).map(|e| e.weight)
    }

    /// The entry produced by `holiday`, if it is observed and kept its slot.
    pub fn find(&self, holiday: Holiday) -> Option<&HolidayEntry> {
        self.entries.values().find(|e| e.holiday == holiday)
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayEntry> {
        self.entries.values()
    }

    /// Holiday dates in ascending order.
    pub fn dates(&self) -> Vec<Date> {
        self.entries.keys().copied().collect()
    }

    fn insert(&mut self, entry: HolidayEntry) {
        match self.entries.entry(entry.date) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                if entry.weight > slot.get().weight {
                    slot.insert(entry);
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a HolidayEntry;
    type IntoIter = std::collections::btree_map::Values<'a, Date, HolidayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HolidaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

/// Holidays of `jurisdiction` in `year`.
///
/// Pure: the same inputs always give the same set.
pub fn holidays_for(year: Year, jurisdiction: Jurisdiction) -> HolidaySet {
    holidays_in(year.get(), jurisdiction)
}

/// [`holidays_for`] over every year the `Date` type can represent.
pub(crate) fn holidays_in(year: u16, jurisdiction: Jurisdiction) -> HolidaySet {
    let easter = easter_sunday_in(year);
    let mut set = HolidaySet {
        year,
        jurisdiction,
        entries: BTreeMap::new(),
    };
    for &holiday in Holiday::NATIONWIDE
        .iter()
        .chain(jurisdiction.regional_holidays())
    {
        set.insert(HolidayEntry {
            date: holiday.resolve(year, easter),
            holiday,
            weight: holiday.weight(),
        });
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: i64) -> Year {
        Year::new(y).unwrap()
    }

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_offsets_2025() {
        // Easter Sunday 2025: April 20
        let y = year(2025);
        assert_eq!(Holiday::GoodFriday.date_in(y), date(2025, 4, 18));
        assert_eq!(Holiday::EasterMonday.date_in(y), date(2025, 4, 21));
        assert_eq!(Holiday::AscensionDay.date_in(y), date(2025, 5, 29));
        assert_eq!(Holiday::WhitMonday.date_in(y), date(2025, 6, 9));
        assert_eq!(Holiday::CorpusChristi.date_in(y), date(2025, 6, 19));
    }

    #[test]
    fn repentance_day() {
        assert_eq!(Holiday::RepentanceDay.date_in(year(2025)), date(2025, 11, 19));
        assert_eq!(Holiday::RepentanceDay.date_in(year(2023)), date(2023, 11, 22));
        assert_eq!(Holiday::RepentanceDay.date_in(year(2026)), date(2026, 11, 18));
        for y in 2000..=2100 {
            let d = Holiday::RepentanceDay.date_in(year(y));
            assert_eq!(d.weekday(), Weekday::Wednesday);
            assert!((16..=22).contains(&d.day_of_month()), "{d}");
        }
    }

    #[test]
    fn weights() {
        assert_eq!(Holiday::ChristmasEve.weight(), HolidayWeight::Half);
        assert_eq!(Holiday::NewYearsEve.weight(), HolidayWeight::Half);
        assert_eq!(Holiday::ChristmasDay.weight(), HolidayWeight::Full);
        assert_eq!(HolidayWeight::Half.fraction(), 0.5);
        assert!(Holiday::WhitMonday.is_moveable());
        assert!(!Holiday::AllSaints.is_moveable());
    }

    #[test]
    fn berlin_2025() {
        let set = holidays_for(year(2025), Jurisdiction::Berlin);
        // 11 nationwide + Women's Day
        assert_eq!(set.len(), 12);
        assert_eq!(set.find(Holiday::WomensDay).unwrap().date, date(2025, 3, 8));
        assert_eq!(set.weight_on(date(2025, 12, 24)), Some(HolidayWeight::Half));
        assert_eq!(set.weight_on(date(2025, 12, 25)), Some(HolidayWeight::Full));
        assert_eq!(set.weight_on(date(2025, 12, 23)), None);
    }

    #[test]
    fn collision_keeps_one_entry() {
        // 2008: Ascension Day fell on May 1
        let set = holidays_for(year(2008), Jurisdiction::Hessen);
        let may_day = set.get(date(2008, 5, 1)).unwrap();
        assert_eq!(may_day.holiday, Holiday::LabourDay);
        assert_eq!(may_day.weight, HolidayWeight::Full);
        assert!(set.find(Holiday::AscensionDay).is_none());
        // 11 nationwide + Corpus Christi − one collision
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn full_weight_displaces_half() {
        let mut set = HolidaySet {
            year: 2025,
            jurisdiction: Jurisdiction::Berlin,
            entries: BTreeMap::new(),
        };
        let d = date(2025, 12, 24);
        set.insert(HolidayEntry { date: d, holiday: Holiday::ChristmasEve, weight: HolidayWeight::Half });
        set.insert(HolidayEntry { date: d, holiday: Holiday::ChristmasDay, weight: HolidayWeight::Full });
        set.insert(HolidayEntry { date: d, holiday: Holiday::NewYearsEve, weight: HolidayWeight::Half });
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(d).unwrap().holiday, Holiday::ChristmasDay);
    }

    #[test]
    fn ordered_by_date() {
        let set = holidays_for(year(2025), Jurisdiction::Sachsen);
        let dates = set.dates();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(set.iter().next().unwrap().name(), "Neujahr");
        assert_eq!(set.iter().last().unwrap().name(), "Silvester");
    }
}
