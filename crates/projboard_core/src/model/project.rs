//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its two-state lifecycle.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - `status` is only writable inside the crate, through the store.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a project on the board.
pub type ProjectId = Uuid;

/// Which list a project is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work still in progress.
    Active,
    /// Work done.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used by commands and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl Display for ParseStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ParseStatusError {}

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One project card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned.
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Human-readable assignment line shown under each card.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.people)
        }
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_starts_active_with_unique_id() {
        let first = Project::new("A", "desc", 3);
        let second = Project::new("A", "desc", 3);

        assert_eq!(first.status(), ProjectStatus::Active);
        assert!(!first.id().is_nil());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn people_label_handles_singular() {
        assert_eq!(Project::new("A", "desc", 1).people_label(), "1 person assigned");
        assert_eq!(Project::new("A", "desc", 4).people_label(), "4 persons assigned");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(" Finished ".parse::<ProjectStatus>(), Ok(ProjectStatus::Finished));
        assert_eq!("ACTIVE".parse::<ProjectStatus>(), Ok(ProjectStatus::Active));
        let err = "done".parse::<ProjectStatus>().unwrap_err();
        assert!(err.to_string().contains("active|finished"));
    }
}
