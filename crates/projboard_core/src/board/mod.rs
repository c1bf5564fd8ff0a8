//! Board components driven by store snapshots.
//!
//! # Responsibility
//! - Submit validated input to the store.
//! - Render one list per status from subscriber snapshots.
//! - Translate drag-and-drop gestures into status moves.
//!
//! # Invariants
//! - Components never mutate projects directly; every change goes through
//!   `ProjectState`.

pub mod drag;
pub mod input_form;
pub mod project_list;

/// Number of id characters shown on a card.
pub const SHORT_ID_LEN: usize = 8;

/// Returns the display prefix of a project id.
pub fn short_id(id: crate::ProjectId) -> String {
    id.simple().to_string()[..SHORT_ID_LEN].to_string()
}
