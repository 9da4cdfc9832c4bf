use crate::domain::model::{NameAgeMap, SuiteMap};
use crate::utils::error::{PartyError, Result};
use crate::utils::validation::{validate_identifier, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Birthday kids and cruise passengers loaded together.
///
/// A table left out of the file falls back to the built-in fixture;
/// unknown tables are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    #[serde(default = "fixture_birthday_kids")]
    pub birthday_kids: NameAgeMap,
    #[serde(default = "fixture_passengers")]
    pub passengers: SuiteMap,
}

pub fn fixture_birthday_kids() -> NameAgeMap {
    [("Timmy", 9), ("Sarah", 6), ("Amanda", 27)]
        .into_iter()
        .collect()
}

pub fn fixture_passengers() -> SuiteMap {
    [
        ("suite_a", "Amanda Presley"),
        ("suite_b", "Seymour Hoffman"),
        ("suite_c", "Alfred Tennyson"),
        ("suite_d", "Charlie Chaplin"),
        ("suite_e", "Crumpet the Elf"),
    ]
    .into_iter()
    .collect()
}

impl Roster {
    pub fn fixtures() -> Self {
        Self {
            birthday_kids: fixture_birthday_kids(),
            passengers: fixture_passengers(),
        }
    }

    /// Loads a roster, choosing the parser from the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(PartyError::UnsupportedRosterFormat {
                    path: path.display().to_string(),
                })
            }
        };

        let content = std::fs::read_to_string(path)?;
        let roster = parse(&content)?;
        tracing::info!(
            "Loaded roster from {}: {} birthday kids, {} passengers",
            path.display(),
            roster.birthday_kids.len(),
            roster.passengers.len()
        );
        Ok(roster)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::fixtures()
    }
}

impl Validate for Roster {
    fn validate(&self) -> Result<()> {
        for (name, _) in self.birthday_kids.iter() {
            validate_non_empty_string("birthday_kids.name", name)?;
        }
        for (suite, passenger) in self.passengers.iter() {
            validate_identifier("passengers.suite", suite)?;
            validate_non_empty_string("passengers.passenger", passenger)?;
        }
        Ok(())
    }
}
