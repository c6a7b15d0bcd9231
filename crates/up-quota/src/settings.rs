//! Accounting settings.
//!
//! Settings are a plain value handed to [`QuotaAccountant::new`]; nothing is
//! read from process-wide state, so two accountants with different settings
//! can run side by side.
//!
//! [`QuotaAccountant::new`]: crate::accountant::QuotaAccountant::new

use up_core::ensure;
use up_core::errors::Result;
use up_core::Days;
use up_time::Jurisdiction;

/// Allowance granted when a user has neither a personal default nor a
/// per-year override.
pub const DEFAULT_ALLOWANCE: Days = 30.0;

/// What to charge for an absence marked on a day that is not a full
/// working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum HolidayAbsencePolicy {
    /// Charge only the working part of the day: nothing on weekends and full
    /// holidays, at most half a day on half holidays.
    #[default]
    Skip,
    /// Charge the stored type's full weight wherever it was marked.
    Charge,
}

/// Settings for quota accounting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct QuotaSettings {
    default_allowance: Days,
    default_jurisdiction: Jurisdiction,
    holiday_absences: HolidayAbsencePolicy,
}

impl Default for QuotaSettings {
    fn default() -> Self {
        Self {
            default_allowance: DEFAULT_ALLOWANCE,
            default_jurisdiction: Jurisdiction::default(),
            holiday_absences: HolidayAbsencePolicy::default(),
        }
    }
}

impl QuotaSettings {
    /// Allowance for users without a personal default.
    pub fn default_allowance(&self) -> Days {
        self.default_allowance
    }

    /// State for users without a configured one.
    pub fn default_jurisdiction(&self) -> Jurisdiction {
        self.default_jurisdiction
    }

    /// Charging policy for absences on non-working days.
    pub fn holiday_absences(&self) -> HolidayAbsencePolicy {
        self.holiday_absences
    }

    /// Replace the default allowance.
    pub fn with_default_allowance(mut self, days: Days) -> Result<Self> {
        check_allowance(days)?;
        self.default_allowance = days;
        Ok(self)
    }

    /// Replace the default state.
    pub fn with_default_jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.default_jurisdiction = jurisdiction;
        self
    }

    /// Replace the charging policy.
    pub fn with_holiday_absences(mut self, policy: HolidayAbsencePolicy) -> Self {
        self.holiday_absences = policy;
        self
    }

    /// Check values that may have bypassed the setters, e.g. when the
    /// settings were deserialized.
    pub fn validate(&self) -> Result<()> {
        check_allowance(self.default_allowance)
    }
}

/// An allowance must be a finite, non-negative number of days.
pub(crate) fn check_allowance(days: Days) -> Result<()> {
    ensure!(
        days.is_finite() && days >= 0.0,
        "allowance must be a finite, non-negative number of days, got {days}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = QuotaSettings::default();
        assert_eq!(s.default_allowance(), 30.0);
        assert_eq!(s.default_jurisdiction(), Jurisdiction::Bayern);
        assert_eq!(s.holiday_absences(), HolidayAbsencePolicy::Skip);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn builder() {
        let s = QuotaSettings::default()
            .with_default_allowance(27.5)
            .unwrap()
            .with_default_jurisdiction(Jurisdiction::Hessen)
            .with_holiday_absences(HolidayAbsencePolicy::Charge);
        assert_eq!(s.default_allowance(), 27.5);
        assert_eq!(s.default_jurisdiction(), Jurisdiction::Hessen);
        assert_eq!(s.holiday_absences(), HolidayAbsencePolicy::Charge);
    }

    #[test]
    fn rejects_bad_allowance() {
        assert!(QuotaSettings::default().with_default_allowance(-1.0).is_err());
        assert!(QuotaSettings::default().with_default_allowance(f64::NAN).is_err());
        assert!(QuotaSettings::default().with_default_allowance(f64::INFINITY).is_err());
        assert!(QuotaSettings::default().with_default_allowance(0.0).is_ok());
    }
}
