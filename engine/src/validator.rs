//! Numbering-plan validation
//!
//! The actual plan lookup is delegated to the `phonenumber` crate. Loops take
//! any `PhoneValidator` so tests can swap in fixed answers.

use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::country::CountryCode;
use crate::phone::PhoneCandidate;

/// The validator could not parse the input at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure(pub String);

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseFailure {}

pub trait PhoneValidator: Send + Sync {
    /// `Ok(true)` when `number` is a valid number for the region its prefix
    /// implies, `Ok(false)` when it parses but is not assigned, `Err` when it
    /// does not parse.
    fn check(&self, number: &str) -> Result<bool, ParseFailure>;
}

/// Validator backed by libphonenumber metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberingPlan;

impl PhoneValidator for NumberingPlan {
    fn check(&self, number: &str) -> Result<bool, ParseFailure> {
        let parsed = phonenumber::parse(None, number).map_err(|e| ParseFailure(e.to_string()))?;
        Ok(phonenumber::is_valid(&parsed))
    }
}

/// A candidate that passed the numbering-plan check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidPhone {
    pub country: CountryCode,
    pub number: String,
}

/// Check a candidate. Parse failures and "not valid" answers are both
/// reported as `None`.
pub fn validate<V: PhoneValidator + ?Sized>(
    validator: &V,
    candidate: PhoneCandidate,
) -> Option<ValidPhone> {
    match validator.check(&candidate.number) {
        Ok(true) => Some(ValidPhone {
            country: candidate.country,
            number: candidate.number,
        }),
        Ok(false) => None,
        Err(e) => {
            trace!("parse failure for {}: {}", candidate.number, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl PhoneValidator for Broken {
        fn check(&self, _number: &str) -> Result<bool, ParseFailure> {
            Err(ParseFailure("boom".into()))
        }
    }

    fn candidate(country: CountryCode, number: &str) -> PhoneCandidate {
        PhoneCandidate {
            country,
            number: number.to_string(),
        }
    }

    #[test]
    fn test_known_valid_numbers() {
        let plan = NumberingPlan;
        assert_eq!(plan.check("+12015550123"), Ok(true));
        assert_eq!(plan.check("+819012345678"), Ok(true));
    }

    #[test]
    fn test_invalid_and_unparseable_are_both_rejected() {
        let plan = NumberingPlan;
        assert!(validate(&plan, candidate(CountryCode::Us, "+1123")).is_none());
        assert!(validate(&plan, candidate(CountryCode::Us, "not a number")).is_none());
        assert!(validate(&Broken, candidate(CountryCode::Kh, "+85596123456")).is_none());
    }

    #[test]
    fn test_accepted_candidate_keeps_country_and_number() {
        let plan = NumberingPlan;
        let valid = validate(&plan, candidate(CountryCode::Us, "+12015550123")).unwrap();
        assert_eq!(valid.country, CountryCode::Us);
        assert_eq!(valid.number, "+12015550123");
    }
}
