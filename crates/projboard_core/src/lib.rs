//! Core domain logic for the project board.
//! This crate owns the project list and every rule that governs it.

pub mod board;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;

pub use board::drag::{DragPayload, DragSession};
pub use board::input_form::ProjectInputForm;
pub use board::project_list::ProjectList;
pub use board::short_id;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{ParseStatusError, Project, ProjectId, ProjectStatus};
pub use state::listeners::{ListenerId, Listeners};
pub use state::project_state::ProjectState;
pub use validation::{
    LimitsError, ProjectInput, ProjectInputError, ProjectInputLimits, ValidProjectInput,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
