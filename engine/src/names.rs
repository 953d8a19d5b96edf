//! Name Generation
//!
//! Picks a random first and last name from small predefined lists, one pair
//! of lists per language.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::country::CountryCode;
use crate::error::Error;

const KHMER_FIRST_NAMES: &[&str] = &["សុភា", "ចាន់ដា", "រ័ត្ន", "ស្រីពៅ"];
const KHMER_LAST_NAMES: &[&str] = &["ឈឿន", "សោម", "សុខ", "ជាតិ"];

const THAI_FIRST_NAMES: &[&str] = &["สมชาย", "สุดา", "นิรันดร์", "อนงค์"];
const THAI_LAST_NAMES: &[&str] = &["ชัย", "พันธ์", "ลิ้ม", "จันทร์"];

const ENGLISH_FIRST_NAMES: &[&str] = &["John", "Jane", "Alex", "Emily"];
const ENGLISH_LAST_NAMES: &[&str] = &["Smith", "Johnson", "Brown", "Lee"];

const KOREAN_FIRST_NAMES: &[&str] = &["지수", "민호", "현", "수진"];
const KOREAN_LAST_NAMES: &[&str] = &["김", "박", "이", "최"];

const VIETNAMESE_FIRST_NAMES: &[&str] = &["Anh", "Hương", "Nam", "Linh"];
const VIETNAMESE_LAST_NAMES: &[&str] = &["Nguyễn", "Trần", "Lê", "Phạm"];

const JAPANESE_FIRST_NAMES: &[&str] = &["Hiroshi", "Yuki", "Aiko", "Ken"];
const JAPANESE_LAST_NAMES: &[&str] = &["Tanaka", "Yamamoto", "Sato", "Suzuki"];

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Khmer,
    Thai,
    English,
    Korean,
    Vietnamese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Khmer,
        Language::Thai,
        Language::English,
        Language::Korean,
        Language::Vietnamese,
        Language::Japanese,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Khmer => "Khmer",
            Language::Thai => "Thai",
            Language::English => "English",
            Language::Korean => "Korean",
            Language::Vietnamese => "Vietnamese",
            Language::Japanese => "Japanese",
        }
    }

    pub fn first_names(self) -> &'static [&'static str] {
        match self {
            Language::Khmer => KHMER_FIRST_NAMES,
            Language::Thai => THAI_FIRST_NAMES,
            Language::English => ENGLISH_FIRST_NAMES,
            Language::Korean => KOREAN_FIRST_NAMES,
            Language::Vietnamese => VIETNAMESE_FIRST_NAMES,
            Language::Japanese => JAPANESE_FIRST_NAMES,
        }
    }

    pub fn last_names(self) -> &'static [&'static str] {
        match self {
            Language::Khmer => KHMER_LAST_NAMES,
            Language::Thai => THAI_LAST_NAMES,
            Language::English => ENGLISH_LAST_NAMES,
            Language::Korean => KOREAN_LAST_NAMES,
            Language::Vietnamese => VIETNAMESE_LAST_NAMES,
            Language::Japanese => JAPANESE_LAST_NAMES,
        }
    }

    /// Canonical language for a raw country key. Unknown keys fall back to English.
    pub fn for_country_key(key: &str) -> Language {
        key.parse::<CountryCode>()
            .map(CountryCode::default_language)
            .unwrap_or(Language::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Language::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

/// A generated first/last name pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Sentinel returned for a language key with no name lists.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// How a run attaches names to accepted phones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NameMode {
    /// Phones only.
    None,
    /// Language follows the country of each record.
    #[default]
    Auto,
    Language(Language),
}

impl NameMode {
    pub fn resolve<R: Rng + ?Sized>(self, country: CountryCode, rng: &mut R) -> Option<PersonName> {
        match self {
            NameMode::None => None,
            NameMode::Auto => Some(random_name_by_country(country, rng)),
            NameMode::Language(language) => Some(random_name(language, rng)),
        }
    }
}

impl fmt::Display for NameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameMode::None => f.write_str("None"),
            NameMode::Auto => f.write_str("Auto"),
            NameMode::Language(language) => fmt::Display::fmt(language, f),
        }
    }
}

impl FromStr for NameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(NameMode::None),
            "auto" => Ok(NameMode::Auto),
            _ => s.parse().map(NameMode::Language),
        }
    }
}

pub fn random_name<R: Rng + ?Sized>(language: Language, rng: &mut R) -> PersonName {
    let first = language.first_names().choose(rng).unwrap_or(&UNKNOWN);
    let last = language.last_names().choose(rng).unwrap_or(&UNKNOWN);
    PersonName::new(*first, *last)
}

pub fn random_name_by_country<R: Rng + ?Sized>(country: CountryCode, rng: &mut R) -> PersonName {
    random_name(country.default_language(), rng)
}

/// Generate a random name in the given language
pub fn generate_name(language: Language) -> PersonName {
    random_name(language, &mut rand::thread_rng())
}

/// Generate a name from a raw language key, `("Unknown", "Unknown")` when the
/// key has no name lists.
pub fn generate_name_by_key(key: &str) -> PersonName {
    match key.parse::<Language>() {
        Ok(language) => generate_name(language),
        Err(_) => PersonName::unknown(),
    }
}

/// Generate a name in the canonical language of a country
pub fn generate_name_by_country(country: CountryCode) -> PersonName {
    generate_name(country.default_language())
}
