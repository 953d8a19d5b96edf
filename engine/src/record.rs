//! Accepted records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::country::CountryCode;
use crate::names::PersonName;
use crate::validator::ValidPhone;

/// A validated phone number, optionally paired with a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecord {
    pub country: CountryCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PersonName>,
    pub phone: String,
}

impl GeneratedRecord {
    pub fn new(phone: ValidPhone, name: Option<PersonName>) -> Self {
        Self {
            country: phone.country,
            name,
            phone: phone.number,
        }
    }

    /// Full name for table display, empty when no name is attached.
    pub fn display_name(&self) -> String {
        self.name.as_ref().map(PersonName::full_name).unwrap_or_default()
    }

    /// One line of a country file: `<name> - <phone>` or the bare phone.
    pub fn line(&self) -> String {
        match &self.name {
            Some(name) => format!("{} - {}", name, self.phone),
            None => self.phone.clone(),
        }
    }
}

impl fmt::Display for GeneratedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> ValidPhone {
        ValidPhone {
            country: CountryCode::Us,
            number: "+12015550123".into(),
        }
    }

    #[test]
    fn test_line_with_name() {
        let record = GeneratedRecord::new(phone(), Some(PersonName::new("Jane", "Lee")));
        assert_eq!(record.line(), "Jane Lee - +12015550123");
        assert_eq!(record.display_name(), "Jane Lee");
    }

    #[test]
    fn test_line_without_name() {
        let record = GeneratedRecord::new(phone(), None);
        assert_eq!(record.line(), "+12015550123");
        assert_eq!(record.display_name(), "");
    }
}
