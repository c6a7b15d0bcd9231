//! Per-user vacation allowance with per-year overrides.

use std::collections::BTreeMap;

use crate::settings::{check_allowance, QuotaSettings, DEFAULT_ALLOWANCE};
use up_core::errors::Result;
use up_core::Days;
use up_time::Year;

/// A user's allowance: an optional personal default plus explicit per-year
/// values.
///
/// The allowance for a year is its override if one exists, otherwise the
/// personal default, otherwise the engine-wide default from
/// [`QuotaSettings`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AllowanceBook {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    default_allowance: Option<Days>,
    #[cfg_attr(feature = "serde", serde(default))]
    overrides: BTreeMap<Year, Days>,
}

impl AllowanceBook {
    /// A book with a personal default and no overrides.
    pub fn new(default_allowance: Days) -> Result<Self> {
        check_allowance(default_allowance)?;
        Ok(Self {
            default_allowance: Some(default_allowance),
            overrides: BTreeMap::new(),
        })
    }

    /// A book whose personal default is the settings' default allowance.
    pub fn from_settings(settings: &QuotaSettings) -> Self {
        Self {
            default_allowance: Some(settings.default_allowance()),
            overrides: BTreeMap::new(),
        }
    }

    /// The personal default, if one is set.
    pub fn default_allowance(&self) -> Option<Days> {
        self.default_allowance
    }

    /// Change the personal default.
    pub fn set_default(&mut self, days: Days) -> Result<()> {
        check_allowance(days)?;
        self.default_allowance = Some(days);
        Ok(())
    }

    /// Drop the personal default, returning it.
    pub fn clear_default(&mut self) -> Option<Days> {
        self.default_allowance.take()
    }

    /// Set the allowance for one year, replacing any earlier override.
    pub fn set_override(&mut self, year: Year, days: Days) -> Result<()> {
        check_allowance(days)?;
        self.overrides.insert(year, days);
        Ok(())
    }

    /// Drop the override for `year`, returning it.
    pub fn clear_override(&mut self, year: Year) -> Option<Days> {
        self.overrides.remove(&year)
    }

    /// The override for `year`, if one is set.
    pub fn override_for(&self, year: Year) -> Option<Days> {
        self.overrides.get(&year).copied()
    }

    /// The allowance that applies to `year`, falling back to `fallback`
    /// when neither an override nor a personal default is set.
    pub fn allowance_or(&self, year: Year, fallback: Days) -> Days {
        self.override_for(year)
            .or(self.default_allowance)
            .unwrap_or(fallback)
    }

    /// The allowance that applies to `year`, with [`DEFAULT_ALLOWANCE`] as
    /// the last resort.
    pub fn allowance_for(&self, year: Year) -> Days {
        self.allowance_or(year, DEFAULT_ALLOWANCE)
    }

    /// All overrides in year order.
    pub fn overrides(&self) -> impl Iterator<Item = (Year, Days)> + '_ {
        self.overrides.iter().map(|(&y, &d)| (y, d))
    }
}
