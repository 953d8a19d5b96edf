//! Random phone number candidates

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::country::CountryCode;
use crate::error::Result;

/// Seven digit subscriber part used by KH, TH and VN.
const SHORT_SUFFIX: std::ops::RangeInclusive<u64> = 1_000_000..=9_999_999;
/// Ten digit national number for US, never starting with 0 or 1.
const US_NATIONAL: std::ops::RangeInclusive<u64> = 2_000_000_000..=9_999_999_999;
const JP_LEADING: std::ops::RangeInclusive<u32> = 70..=90;
const JP_SUBSCRIBER: std::ops::RangeInclusive<u64> = 10_000_000..=99_999_999;

/// An unvalidated phone number string in `+<prefix><digits>` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCandidate {
    pub country: CountryCode,
    pub number: String,
}

impl PhoneCandidate {
    pub fn as_str(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for PhoneCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

/// Build a candidate for `country` using the given random source.
pub fn random_phone<R: Rng + ?Sized>(country: CountryCode, rng: &mut R) -> PhoneCandidate {
    let prefixes = country.prefixes();
    let prefix = prefixes.choose(rng).copied().unwrap_or_default();

    let number = match country {
        CountryCode::Us => format!("{}{}", prefix, rng.gen_range(US_NATIONAL)),
        CountryCode::Jp => format!(
            "{}{}{}",
            prefix,
            rng.gen_range(JP_LEADING),
            rng.gen_range(JP_SUBSCRIBER)
        ),
        CountryCode::Kh | CountryCode::Th | CountryCode::Vn => {
            format!("{}{}", prefix, rng.gen_range(SHORT_SUFFIX))
        }
    };

    PhoneCandidate { country, number }
}

/// Generate a random phone candidate for a supported country
pub fn generate_phone(country: CountryCode) -> PhoneCandidate {
    random_phone(country, &mut rand::thread_rng())
}

/// Generate a candidate from a raw country code. Codes outside the supported
/// set yield `Error::UnsupportedCountry` and no candidate.
pub fn generate_phone_for_key(code: &str) -> Result<PhoneCandidate> {
    Ok(generate_phone(code.parse()?))
}
