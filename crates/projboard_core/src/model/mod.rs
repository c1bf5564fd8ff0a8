//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the project record rendered by the active/finished lists.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status transitions are owned by `state::ProjectState`, not the record.

pub mod project;
