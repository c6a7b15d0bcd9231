//! The 16 German federal states and their regional holiday table.

use std::str::FromStr;

use crate::holiday::Holiday;
use up_core::errors::{Error, Result};

/// A German federal state.
///
/// Each state decides which of the optional holidays it observes; see
/// [`Jurisdiction::regional_holidays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum Jurisdiction {
    /// Baden-Württemberg (BW).
    BadenWuerttemberg,
    /// Bayern (BY).
    #[default]
    Bayern,
    /// Berlin (BE).
    Berlin,
    /// Brandenburg (BB).
    Brandenburg,
    /// Bremen (HB).
    Bremen,
    /// Hamburg (HH).
    Hamburg,
    /// Hessen (HE).
    Hessen,
    /// Mecklenburg-Vorpommern (MV).
    MecklenburgVorpommern,
    /// Niedersachsen (NI).
    Niedersachsen,
    /// Nordrhein-Westfalen (NW).
    NordrheinWestfalen,
    /// Rheinland-Pfalz (RP).
    RheinlandPfalz,
    /// Saarland (SL).
    Saarland,
    /// Sachsen (SN).
    Sachsen,
    /// Sachsen-Anhalt (ST).
    SachsenAnhalt,
    /// Schleswig-Holstein (SH).
    SchleswigHolstein,
    /// Thüringen (TH).
    Thueringen,
}

use Holiday::*;
use Jurisdiction::*;

impl Jurisdiction {
    /// All 16 states.
    pub const ALL: [Jurisdiction; 16] = [
        BadenWuerttemberg,
        Bayern,
        Berlin,
        Brandenburg,
        Bremen,
        Hamburg,
        Hessen,
        MecklenburgVorpommern,
        Niedersachsen,
        NordrheinWestfalen,
        RheinlandPfalz,
        Saarland,
        Sachsen,
        SachsenAnhalt,
        SchleswigHolstein,
        Thueringen,
    ];

    /// Two-letter state code as stored in user settings.
    pub const fn code(self) -> &'static str {
        match self {
            BadenWuerttemberg => "BW",
            Bayern => "BY",
            Berlin => "BE",
            Brandenburg => "BB",
            Bremen => "HB",
            Hamburg => "HH",
            Hessen => "HE",
            MecklenburgVorpommern => "MV",
            Niedersachsen => "NI",
            NordrheinWestfalen => "NW",
            RheinlandPfalz => "RP",
            Saarland => "SL",
            Sachsen => "SN",
            SachsenAnhalt => "ST",
            SchleswigHolstein => "SH",
            Thueringen => "TH",
        }
    }

    /// Official state name.
    pub const fn name(self) -> &'static str {
        match self {
            BadenWuerttemberg => "Baden-Württemberg",
            Bayern => "Bayern",
            Berlin => "Berlin",
            Brandenburg => "Brandenburg",
            Bremen => "Bremen",
            Hamburg => "Hamburg",
            Hessen => "Hessen",
            MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Niedersachsen => "Niedersachsen",
            NordrheinWestfalen => "Nordrhein-Westfalen",
            RheinlandPfalz => "Rheinland-Pfalz",
            Saarland => "Saarland",
            Sachsen => "Sachsen",
            SachsenAnhalt => "Sachsen-Anhalt",
            SchleswigHolstein => "Schleswig-Holstein",
            Thueringen => "Thüringen",
        }
    }

    /// Holidays observed in this state on top of the nationwide ones.
    ///
    /// Partial observances (Assumption Day in Catholic Bavarian
    /// municipalities, Corpus Christi in parts of Saxony and Thuringia) are
    /// not modelled: only statewide holidays appear here.
    pub const fn regional_holidays(self) -> &'static [Holiday] {
        match self {
            BadenWuerttemberg => &[Epiphany, CorpusChristi, AllSaints],
            Bayern => &[Epiphany, CorpusChristi, AllSaints],
            Berlin => &[WomensDay],
            Brandenburg => &[ReformationDay],
            Bremen => &[ReformationDay],
            Hamburg => &[ReformationDay],
            Hessen => &[CorpusChristi],
            MecklenburgVorpommern => &[ReformationDay],
            Niedersachsen => &[ReformationDay],
            NordrheinWestfalen => &[CorpusChristi, AllSaints],
            RheinlandPfalz => &[CorpusChristi, AllSaints],
            Saarland => &[CorpusChristi, AssumptionDay, AllSaints],
            Sachsen => &[ReformationDay, RepentanceDay],
            SachsenAnhalt => &[Epiphany, ReformationDay],
            SchleswigHolstein => &[ReformationDay],
            Thueringen => &[ChildrensDay, ReformationDay],
        }
    }

    /// Whether `holiday` is observed in this state, nationwide or regionally.
    pub fn observes(self, holiday: Holiday) -> bool {
        Holiday::NATIONWIDE.contains(&holiday) || self.regional_holidays().contains(&holiday)
    }
}

impl FromStr for Jurisdiction {
    type Err = Error;

    /// Parse a state code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Jurisdiction::ALL
            .into_iter()
            .find(|j| j.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::InvalidJurisdiction(s.to_string()))
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Jurisdiction> for &'static str {
    fn from(j: Jurisdiction) -> &'static str {
        j.code()
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
