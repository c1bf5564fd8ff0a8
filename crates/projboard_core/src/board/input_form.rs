//! Project input form.

use crate::model::project::ProjectId;
use crate::state::project_state::ProjectState;
use crate::validation::{ProjectInput, ProjectInputError, ProjectInputLimits};
use log::{info, warn};

/// Form component that validates input and forwards it to the store.
#[derive(Debug, Clone, Default)]
pub struct ProjectInputForm {
    limits: ProjectInputLimits,
}

impl ProjectInputForm {
    pub fn new(limits: ProjectInputLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ProjectInputLimits {
        &self.limits
    }

    /// Validates `input` and adds it to `state`.
    ///
    /// # Errors
    /// - Returns the first validation failure; `state` is left untouched.
    pub fn submit(
        &self,
        state: &mut ProjectState,
        input: &ProjectInput,
    ) -> Result<ProjectId, ProjectInputError> {
        let valid = input.validate(&self.limits).inspect_err(|err| {
            warn!("event=project_submit module=board status=rejected reason={err}");
        })?;

        let id = state.add_project(valid.title, valid.description, valid.people);
        info!("event=project_submit module=board status=ok project_id={id}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectInputForm;
    use crate::state::project_state::ProjectState;
    use crate::validation::{ProjectInput, ProjectInputError};

    #[test]
    fn rejected_input_leaves_state_untouched() {
        let mut state = ProjectState::new();
        let form = ProjectInputForm::default();

        let err = form
            .submit(&mut state, &ProjectInput::new("  ", "long enough", "2"))
            .unwrap_err();

        assert_eq!(err, ProjectInputError::EmptyTitle);
        assert!(state.is_empty());
    }

    #[test]
    fn accepted_input_is_trimmed_before_storing() {
        let mut state = ProjectState::new();
        let form = ProjectInputForm::default();

        let id = form
            .submit(&mut state, &ProjectInput::new(" Launch ", " write docs ", " 3 "))
            .unwrap();

        let project = state.get(id).unwrap();
        assert_eq!(project.title(), "Launch");
        assert_eq!(project.description(), "write docs");
        assert_eq!(project.people(), 3);
    }
}
