//! Supported countries and their dialling prefixes

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::names::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Kh,
    Th,
    Us,
    Vn,
    Jp,
}

impl CountryCode {
    /// Every supported country, in selector order.
    pub const ALL: [CountryCode; 5] = [
        CountryCode::Kh,
        CountryCode::Th,
        CountryCode::Us,
        CountryCode::Vn,
        CountryCode::Jp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CountryCode::Kh => "KH",
            CountryCode::Th => "TH",
            CountryCode::Us => "US",
            CountryCode::Vn => "VN",
            CountryCode::Jp => "JP",
        }
    }

    /// Dialling prefixes a candidate may start with. US and JP have a single
    /// fixed prefix; the others draw from a pool of mobile ranges.
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            CountryCode::Kh => &["+85596", "+85597", "+85588", "+85571"],
            CountryCode::Th => &["+6691", "+6683", "+6686", "+6687"],
            CountryCode::Us => &["+1"],
            CountryCode::Vn => &["+8491", "+8490", "+8488", "+8493"],
            CountryCode::Jp => &["+81"],
        }
    }

    /// Language used for names when the selector is on "Auto".
    pub fn default_language(self) -> Language {
        match self {
            CountryCode::Kh => Language::Khmer,
            CountryCode::Th => Language::Thai,
            CountryCode::Us => Language::English,
            CountryCode::Vn => Language::Vietnamese,
            CountryCode::Jp => Language::Japanese,
        }
    }

    /// Draw one of the supported countries uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> CountryCode {
        *Self::ALL.choose(rng).unwrap_or(&CountryCode::Us)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KH" => Ok(CountryCode::Kh),
            "TH" => Ok(CountryCode::Th),
            "US" => Ok(CountryCode::Us),
            "VN" => Ok(CountryCode::Vn),
            "JP" => Ok(CountryCode::Jp),
            _ => Err(Error::UnsupportedCountry(s.to_string())),
        }
    }
}

/// Which country each iteration of a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountrySelection {
    Single(CountryCode),
    /// Draw a fresh country for every iteration.
    All,
}

impl CountrySelection {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> CountryCode {
        match self {
            CountrySelection::Single(country) => country,
            CountrySelection::All => CountryCode::random(rng),
        }
    }
}

impl fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountrySelection::Single(country) => fmt::Display::fmt(country, f),
            CountrySelection::All => f.write_str("ALL"),
        }
    }
}

impl FromStr for CountrySelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CountrySelection::All);
        }
        s.parse().map(CountrySelection::Single)
    }
}
