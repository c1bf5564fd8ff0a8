//! Drag-and-drop session.
//!
//! # Responsibility
//! - Carry the dragged project id as a `text/plain` payload.
//! - Turn a drop on a list into a `ProjectState::move_project` call.
//!
//! # Invariants
//! - Drops without a payload, or with a payload that is not a project id, are
//!   silent no-ops.
//! - A drop always ends the drag.

use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_state::ProjectState;
use log::debug;

/// Payload format written on drag start.
pub const DRAG_FORMAT: &str = "text/plain";

/// Transfer data attached to one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: &'static str,
    pub data: String,
}

/// Tracks the current drag gesture, if any.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    payload: Option<DragPayload>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `id`, replacing any drag already in progress.
    pub fn begin(&mut self, id: ProjectId) {
        self.begin_raw(id.to_string());
    }

    /// Starts a drag with arbitrary transfer text.
    pub fn begin_raw(&mut self, data: impl Into<String>) {
        self.payload = Some(DragPayload {
            format: DRAG_FORMAT,
            data: data.into(),
        });
    }

    /// Whether drop targets should show the droppable highlight.
    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    /// Ends the drag without dropping.
    pub fn cancel(&mut self) {
        self.payload = None;
    }

    /// Drops the dragged project on the list for `target`.
    ///
    /// Returns `true` when the store changed.
    pub fn drop_on(&mut self, state: &mut ProjectState, target: ProjectStatus) -> bool {
        let Some(payload) = self.payload.take() else {
            debug!("event=project_drop module=board status=skipped reason=no_drag");
            return false;
        };
        let Ok(id) = payload.data.trim().parse::<ProjectId>() else {
            debug!("event=project_drop module=board status=skipped reason=bad_payload");
            return false;
        };
        state.move_project(id, target)
    }
}

#[cfg(test)]
mod tests {
    use super::DragSession;
    use crate::model::project::ProjectStatus;
    use crate::state::project_state::ProjectState;

    #[test]
    fn drop_moves_dragged_project_and_ends_drag() {
        let mut state = ProjectState::new();
        let id = state.add_project("A", "desc", 3);
        let mut drag = DragSession::new();

        drag.begin(id);
        assert!(drag.is_dragging());
        assert!(drag.drop_on(&mut state, ProjectStatus::Finished));
        assert!(!drag.is_dragging());
        assert_eq!(state.get(id).unwrap().status(), ProjectStatus::Finished);
    }

    #[test]
    fn drop_without_drag_is_noop() {
        let mut state = ProjectState::new();
        state.add_project("A", "desc", 3);
        let mut drag = DragSession::new();

        assert!(!drag.drop_on(&mut state, ProjectStatus::Finished));
        assert_eq!(state.projects()[0].status(), ProjectStatus::Active);
    }

    #[test]
    fn garbage_payload_is_noop() {
        let mut state = ProjectState::new();
        state.add_project("A", "desc", 3);
        let mut drag = DragSession::new();

        drag.begin_raw("not-a-uuid");
        assert!(!drag.drop_on(&mut state, ProjectStatus::Finished));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_clears_payload() {
        let mut state = ProjectState::new();
        let id = state.add_project("A", "desc", 3);
        let mut drag = DragSession::new();

        drag.begin(id);
        drag.cancel();
        assert!(!drag.drop_on(&mut state, ProjectStatus::Finished));
        assert_eq!(state.get(id).unwrap().status(), ProjectStatus::Active);
    }
}
