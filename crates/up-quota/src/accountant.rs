//! Yearly quota accounting.
//!
//! The accountant walks the markings of one year, classifies each date
//! against the state's holidays and charges vacation markings in half-day
//! units.  Charging in integers keeps the totals exact; the result only turns
//! them into days at the end.

use tracing::{debug, warn};

use crate::absence::{AbsenceMap, AbsenceType};
use crate::allowance::AllowanceBook;
use crate::settings::{HolidayAbsencePolicy, QuotaSettings};
use up_core::errors::Result;
use up_core::{Days, Natural};
use up_time::{holidays_for, Date, DayKind, Jurisdiction, Year};

/// A marking on a day that has less working time than the marking claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InconsistentAbsence {
    /// The marked date.
    pub date: Date,
    /// What was marked.
    pub absence: AbsenceType,
    /// How the date classifies in the user's state.
    pub day: DayKind,
}

/// Allowance consumption for one year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QuotaResult {
    /// The accounted year.
    pub year: Year,
    /// Allowance granted for the year.
    pub base_allowance: Days,
    /// Days charged 1.0.
    pub consumed_full: Natural,
    /// Days charged 0.5.
    pub consumed_half: Natural,
    /// Special-leave markings, not deducted.
    pub special_leave: Natural,
    /// Unpaid-leave markings, not deducted.
    pub unpaid_leave: Natural,
    /// `base_allowance - consumed()`; negative when overdrawn.
    pub remaining: Days,
    /// Markings that claim more working time than the day has.
    pub inconsistencies: Vec<InconsistentAbsence>,
}

impl QuotaResult {
    /// Total days deducted from the allowance.
    pub fn consumed(&self) -> Days {
        f64::from(self.consumed_full) + 0.5 * f64::from(self.consumed_half)
    }

    /// Whether more was taken than granted.
    pub fn is_overdrawn(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Working time of a day in half days.
fn working_half_days(day: DayKind) -> u8 {
    match day {
        DayKind::Workday => 2,
        DayKind::HolidayHalf => 1,
        DayKind::HolidayFull | DayKind::Weekend => 0,
    }
}

/// Computes [`QuotaResult`]s under fixed [`QuotaSettings`].
#[derive(Debug, Clone, Default)]
pub struct QuotaAccountant {
    settings: QuotaSettings,
}

impl QuotaAccountant {
    /// An accountant with validated `settings`.
    pub fn new(settings: QuotaSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings in use.
    pub fn settings(&self) -> &QuotaSettings {
        &self.settings
    }

    /// Charge the markings dated in `year` against `base_allowance`.
    ///
    /// Markings of other years are ignored.  Markings on weekends and full
    /// holidays, and full-day markings on half holidays, are reported in
    /// [`QuotaResult::inconsistencies`]; what they cost depends on the
    /// configured [`HolidayAbsencePolicy`].
    pub fn accumulate(
        &self,
        year: Year,
        base_allowance: Days,
        absences: &AbsenceMap,
        jurisdiction: Jurisdiction,
    ) -> QuotaResult {
        let holidays = holidays_for(year, jurisdiction);
        let policy = self.settings.holiday_absences();

        let mut full = 0;
        let mut half = 0;
        let mut special_leave = 0;
        let mut unpaid_leave = 0;
        let mut inconsistencies = Vec::new();

        for (date, absence) in absences.in_year(year) {
            let day = DayKind::of(date, &holidays);
            let claimed = absence.half_days();
            let available = working_half_days(day);

            let off_day = matches!(day, DayKind::Weekend | DayKind::HolidayFull);
            if off_day || claimed > available {
                warn!(%date, %absence, ?day, %jurisdiction, "absence marked on a non-working day");
                inconsistencies.push(InconsistentAbsence { date, absence, day });
            }

            match absence {
                AbsenceType::SpecialLeave => special_leave += 1,
                AbsenceType::UnpaidLeave => unpaid_leave += 1,
                AbsenceType::FullVacation | AbsenceType::HalfVacation => {}
            }

            let charged = match policy {
                HolidayAbsencePolicy::Skip => claimed.min(available),
                HolidayAbsencePolicy::Charge => claimed,
            };
            match charged {
                2 => full += 1,
                1 => half += 1,
                _ => {}
            }
        }

        let result = QuotaResult {
            year,
            base_allowance,
            consumed_full: full,
            consumed_half: half,
            special_leave,
            unpaid_leave,
            remaining: base_allowance - f64::from(full) - 0.5 * f64::from(half),
            inconsistencies,
        };
        debug!(
            %year,
            %jurisdiction,
            consumed = result.consumed(),
            remaining = result.remaining,
            inconsistent = result.inconsistencies.len(),
            "accumulated vacation quota"
        );
        result
    }

    /// Like [`accumulate`](Self::accumulate) for a stored user.
    ///
    /// The base allowance comes from `book`, falling back to the settings'
    /// default allowance.  A user without a configured state is accounted in
    /// the settings' default state.
    pub fn accumulate_for(
        &self,
        year: Year,
        book: &AllowanceBook,
        absences: &AbsenceMap,
        jurisdiction: Option<Jurisdiction>,
    ) -> QuotaResult {
        let base = book.allowance_or(year, self.settings.default_allowance());
        let jurisdiction = jurisdiction.unwrap_or(self.settings.default_jurisdiction());
        self.accumulate(year, base, absences, jurisdiction)
    }
}

/// [`QuotaAccountant::accumulate`] under default settings.
pub fn accumulate(
    year: Year,
    base_allowance: Days,
    absences: &AbsenceMap,
    jurisdiction: Jurisdiction,
) -> QuotaResult {
    QuotaAccountant::default().accumulate(year, base_allowance, absences, jurisdiction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn y2025() -> Year {
        Year::new(2025).unwrap()
    }

    #[test]
    fn empty_map_keeps_allowance() {
        let r = accumulate(y2025(), 30.0, &AbsenceMap::new(), Jurisdiction::Bayern);
        assert_eq!(r.consumed_full, 0);
        assert_eq!(r.consumed_half, 0);
        assert_relative_eq!(r.remaining, 30.0);
        assert!(r.inconsistencies.is_empty());
        assert!(!r.is_overdrawn());
    }

    #[test]
    fn half_holiday_policies() {
        // 2025-12-24 is a Wednesday
        let map: AbsenceMap = [(date(2025, 12, 24), AbsenceType::FullVacation)]
            .into_iter()
            .collect();

        let skip = accumulate(y2025(), 30.0, &map, Jurisdiction::Berlin);
        assert_eq!((skip.consumed_full, skip.consumed_half), (0, 1));
        assert_relative_eq!(skip.remaining, 29.5);
        assert_eq!(skip.inconsistencies.len(), 1);
        assert_eq!(skip.inconsistencies[0].day, DayKind::HolidayHalf);

        let charging = QuotaAccountant::new(
            QuotaSettings::default().with_holiday_absences(HolidayAbsencePolicy::Charge),
        )
        .unwrap();
        let charged = charging.accumulate(y2025(), 30.0, &map, Jurisdiction::Berlin);
        assert_eq!((charged.consumed_full, charged.consumed_half), (1, 0));
        assert_relative_eq!(charged.remaining, 29.0);
        assert_eq!(charged.inconsistencies, skip.inconsistencies);
    }

    #[test]
    fn half_marking_on_half_holiday_is_consistent() {
        let map: AbsenceMap = [(date(2025, 12, 31), AbsenceType::HalfVacation)]
            .into_iter()
            .collect();
        let r = accumulate(y2025(), 30.0, &map, Jurisdiction::Hamburg);
        assert!(r.inconsistencies.is_empty());
        assert_relative_eq!(r.consumed(), 0.5);
    }

    #[test]
    fn overdrawn() {
        let map: AbsenceMap = date(2025, 3, 3)
            .iter_through(date(2025, 3, 7))
            .map(|d| (d, AbsenceType::FullVacation))
            .collect();
        let r = accumulate(y2025(), 2.0, &map, Jurisdiction::Bremen);
        assert_relative_eq!(r.remaining, -3.0);
        assert!(r.is_overdrawn());
    }

    #[test]
    fn keeps_settings() {
        let settings = QuotaSettings::default().with_holiday_absences(HolidayAbsencePolicy::Charge);
        let accountant = QuotaAccountant::new(settings.clone()).unwrap();
        assert_eq!(accountant.settings(), &settings);
        assert_eq!(
            QuotaAccountant::default().settings().holiday_absences(),
            HolidayAbsencePolicy::Skip
        );
    }
}
