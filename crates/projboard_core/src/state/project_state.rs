//! Project store.
//!
//! # Responsibility
//! - Hold the authoritative, creation-ordered project list.
//! - Notify subscribers with a full snapshot after each mutation.
//!
//! # Invariants
//! - `add_project` always appends and always notifies.
//! - `move_project` with an unknown id or an unchanged status is a no-op and
//!   does not notify.
//! - Subscribers are `'static` and cannot borrow the store, so they cannot
//!   mutate it from inside a notification.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listeners::{ListenerId, Listeners};
use log::debug;

/// In-memory observable project store.
///
/// One instance is created by the application and handed to the components
/// that need it.
#[derive(Debug, Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber notified after every successful mutation.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) -> ListenerId {
        let id = self.listeners.subscribe(listener);
        debug!(
            "event=listener_added module=state status=ok listener_id={} listeners={}",
            id.get(),
            self.listeners.len()
        );
        id
    }

    /// Appends a new active project and notifies subscribers.
    ///
    /// Arguments are trusted; callers validate user input first.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id();
        self.projects.push(project);
        debug!(
            "event=project_added module=state status=ok project_id={} total={}",
            id,
            self.projects.len()
        );
        self.notify();
        id
    }

    /// Changes a project's status.
    ///
    /// Returns `true` when the status changed and subscribers were notified.
    /// An unknown id or an unchanged status returns `false` and notifies no one.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|project| project.id() == id) else {
            debug!("event=project_moved module=state status=skipped reason=not_found project_id={id}");
            return false;
        };
        if project.status() == new_status {
            debug!(
                "event=project_moved module=state status=skipped reason=unchanged project_id={id} target={new_status}"
            );
            return false;
        }

        project.set_status(new_status);
        debug!("event=project_moved module=state status=ok project_id={id} target={new_status}");
        self.notify();
        true
    }

    /// Current projects in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Owned copy of the current projects.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Projects with `status`, preserving creation order.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status() == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.projects);
    }
}
