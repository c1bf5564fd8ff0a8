//! Observable in-memory state.
//!
//! # Responsibility
//! - Own the ordered project list and be its only mutator.
//! - Broadcast full snapshots to subscribers after every change.
//!
//! # Invariants
//! - Subscribers always receive an owned copy, never the live list.
//! - Redundant mutations do not notify.

pub mod listeners;
pub mod project_state;
