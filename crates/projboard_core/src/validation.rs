//! Project input validation.
//!
//! # Responsibility
//! - Turn raw form fields into trusted store arguments.
//! - Keep bounds configurable instead of hard-coded in the form.
//!
//! # Invariants
//! - A `ValidProjectInput` always has a non-blank title, a description of at
//!   least `min_description_len` characters and `people` within bounds.
//! - Validation never touches the store.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_MIN_DESCRIPTION_LEN: usize = 5;
pub const DEFAULT_MIN_PEOPLE: u32 = 1;
pub const DEFAULT_MAX_PEOPLE: u32 = 5;

/// Configurable bounds for project input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectInputLimits {
    pub min_description_len: usize,
    pub min_people: u32,
    pub max_people: u32,
}

impl Default for ProjectInputLimits {
    fn default() -> Self {
        Self {
            min_description_len: DEFAULT_MIN_DESCRIPTION_LEN,
            min_people: DEFAULT_MIN_PEOPLE,
            max_people: DEFAULT_MAX_PEOPLE,
        }
    }
}

/// Rejected limit configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// People count must be positive, so the minimum cannot be zero.
    ZeroMinPeople,
    /// Minimum above maximum.
    InvertedPeopleRange { min: u32, max: u32 },
}

impl Display for LimitsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroMinPeople => write!(f, "minimum people must be at least 1"),
            Self::InvertedPeopleRange { min, max } => {
                write!(f, "minimum people ({min}) must be <= maximum people ({max})")
            }
        }
    }
}

impl Error for LimitsError {}

impl ProjectInputLimits {
    /// Checks internal consistency of the configured bounds.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.min_people == 0 {
            return Err(LimitsError::ZeroMinPeople);
        }
        if self.min_people > self.max_people {
            return Err(LimitsError::InvertedPeopleRange {
                min: self.min_people,
                max: self.max_people,
            });
        }
        Ok(())
    }
}

/// Validation failure for one submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectInputError {
    /// Title is blank after trim.
    EmptyTitle,
    /// Description shorter than the configured minimum (trimmed chars).
    DescriptionTooShort { min: usize, actual: usize },
    /// People field is not an unsigned integer.
    InvalidPeople(String),
    /// People count outside the configured bounds.
    PeopleOutOfRange { min: u32, max: u32, actual: u32 },
}

impl Display for ProjectInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be blank"),
            Self::DescriptionTooShort { min, actual } => write!(
                f,
                "description must be at least {min} characters, got {actual}"
            ),
            Self::InvalidPeople(value) => {
                write!(f, "people must be a whole number, got `{value}`")
            }
            Self::PeopleOutOfRange { min, max, actual } => {
                write!(f, "people must be between {min} and {max}, got {actual}")
            }
        }
    }
}

impl Error for ProjectInputError {}

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Trimmed, bounds-checked project fields ready for `ProjectState::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates fields in form order and reports the first failure.
    pub fn validate(
        &self,
        limits: &ProjectInputLimits,
    ) -> Result<ValidProjectInput, ProjectInputError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ProjectInputError::EmptyTitle);
        }

        let description = self.description.trim();
        let description_len = description.chars().count();
        if description_len < limits.min_description_len.max(1) {
            return Err(ProjectInputError::DescriptionTooShort {
                min: limits.min_description_len.max(1),
                actual: description_len,
            });
        }

        let raw_people = self.people.trim();
        let people = raw_people
            .parse::<u32>()
            .map_err(|_| ProjectInputError::InvalidPeople(raw_people.to_string()))?;
        if people < limits.min_people || people > limits.max_people {
            return Err(ProjectInputError::PeopleOutOfRange {
                min: limits.min_people,
                max: limits.max_people,
                actual: people,
            });
        }

        Ok(ValidProjectInput {
            title: title.to_string(),
            description: description.to_string(),
            people,
        })
    }
}
