//! Domain types checked by the requirements.

use std::fmt;
use std::str::FromStr;

use optunion::control::Optional;
use serde::{Deserialize, Serialize};

use crate::error::EligibilityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = EligibilityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(EligibilityError::UnknownGender(input.to_string())),
        }
    }
}

/// A subject of the eligibility check.
///
/// The middle name is genuinely optional, so it is an `Optional` rather than
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    middle_name: Optional<String>,
    last_name: String,
    age: u32,
    gender: Gender,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        middle_name: Optional<String>,
        last_name: impl Into<String>,
        age: u32,
        gender: Gender,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name,
            last_name: last_name.into(),
            age,
            gender,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub const fn middle_name(&self) -> &Optional<String> {
        &self.middle_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub const fn age(&self) -> u32 {
        self.age
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// First, middle (when present) and last name joined by spaces.
    pub fn full_name(&self) -> String {
        self.middle_name
            .as_ref()
            .map(|middle| format!("{} {middle} {}", self.first_name, self.last_name))
            .get_or_else(|| format!("{} {}", self.first_name, self.last_name))
    }
}

/// A single rule violation: which field failed and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementNotMet {
    field: String,
    reason: String,
}

impl RequirementNotMet {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for RequirementNotMet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "RequirementNotMet({}, {})", self.field, self.reason)
    }
}
