//! Status list component.
//!
//! # Responsibility
//! - Subscribe to the store and keep the rows matching one status.
//! - Render those rows as plain text.

use crate::board::short_id;
use crate::model::project::{Project, ProjectStatus};
use crate::state::listeners::ListenerId;
use crate::state::project_state::ProjectState;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

/// List of projects in one status, re-rendered on every store notification.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    rows: Rc<RefCell<Vec<Project>>>,
    listener_id: ListenerId,
}

impl ProjectList {
    /// Creates the list and registers its subscriber on `state`.
    ///
    /// Rows start from the store's current contents, so a list attached after
    /// projects were added is not empty until the next mutation.
    pub fn attach(state: &mut ProjectState, status: ProjectStatus) -> Self {
        let rows = Rc::new(RefCell::new(state.projects_with_status(status)));
        let sink = Rc::clone(&rows);
        let listener_id = state.add_listener(move |projects| {
            *sink.borrow_mut() = projects
                .into_iter()
                .filter(|project| project.status() == status)
                .collect();
        });

        Self {
            status,
            rows,
            listener_id,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn listener_id(&self) -> ListenerId {
        self.listener_id
    }

    /// Rows from the latest snapshot.
    pub fn items(&self) -> Vec<Project> {
        self.rows.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }

    /// Renders the heading followed by one line per project.
    pub fn render(&self) -> String {
        let mut out = self.heading();
        out.push('\n');

        let rows = self.rows.borrow();
        if rows.is_empty() {
            out.push_str("  (no projects)\n");
            return out;
        }
        for project in rows.iter() {
            let _ = writeln!(
                out,
                "  [{}] {} ({}): {}",
                short_id(project.id()),
                project.title(),
                project.people_label(),
                project.description()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectList;
    use crate::model::project::ProjectStatus;
    use crate::state::project_state::ProjectState;

    #[test]
    fn lists_split_projects_by_status() {
        let mut state = ProjectState::new();
        let active = ProjectList::attach(&mut state, ProjectStatus::Active);
        let finished = ProjectList::attach(&mut state, ProjectStatus::Finished);

        let a = state.add_project("A", "desc", 3);
        state.add_project("B", "desc2", 1);
        state.move_project(a, ProjectStatus::Finished);

        let active_titles: Vec<_> = active.items().iter().map(|p| p.title().to_string()).collect();
        let finished_titles: Vec<_> = finished
            .items()
            .iter()
            .map(|p| p.title().to_string())
            .collect();
        assert_eq!(active_titles, vec!["B"]);
        assert_eq!(finished_titles, vec!["A"]);
    }

    #[test]
    fn attach_seeds_rows_from_current_state() {
        let mut state = ProjectState::new();
        state.add_project("early", "before attach", 2);

        let active = ProjectList::attach(&mut state, ProjectStatus::Active);
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn render_shows_heading_and_rows() {
        let mut state = ProjectState::new();
        let active = ProjectList::attach(&mut state, ProjectStatus::Active);
        let finished = ProjectList::attach(&mut state, ProjectStatus::Finished);
        state.add_project("Launch", "ship the thing", 1);

        let rendered = active.render();
        assert!(rendered.starts_with("ACTIVE PROJECTS\n"));
        assert!(rendered.contains("Launch (1 person assigned): ship the thing"));
        assert_eq!(finished.render(), "FINISHED PROJECTS\n  (no projects)\n");
    }
}
