//! Phone Generator Engine
//!
//! Generates synthetic phone numbers and matching personal names for a fixed
//! set of countries, validates them against the numbering plan and persists
//! accepted records to per-country text files.

pub mod config;
pub mod country;
pub mod error;
pub mod names;
pub mod phone;
pub mod record;
pub mod sink;
pub mod validator;
pub mod worker;

pub use config::GeneratorConfig;
pub use country::{CountryCode, CountrySelection};
pub use error::{Error, Result};
pub use names::{Language, NameMode, PersonName};
pub use phone::{generate_phone, PhoneCandidate};
pub use record::GeneratedRecord;
pub use sink::FileSink;
pub use validator::{validate, NumberingPlan, ParseFailure, PhoneValidator, ValidPhone};
pub use worker::{
    run_generation, AttemptOutcome, GenerationEvent, GenerationRequest, GenerationRunner,
    RunSummary,
};
