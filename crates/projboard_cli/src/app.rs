//! Terminal board wiring.
//!
//! # Responsibility
//! - Own the single `ProjectState` and hand it to the board components.
//! - Execute parsed commands and print the re-rendered board.

use crate::command::{Command, USAGE};
use log::info;
use projboard_core::{
    short_id, DragSession, ProjectId, ProjectInputForm, ProjectInputLimits, ProjectList,
    ProjectState, ProjectStatus,
};
use std::io::{self, Write};

/// Whether the command loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Board application: one store plus the components attached to it.
pub struct App {
    state: ProjectState,
    form: ProjectInputForm,
    active: ProjectList,
    finished: ProjectList,
    drag: DragSession,
}

impl App {
    pub fn new(limits: ProjectInputLimits) -> Self {
        let mut state = ProjectState::new();
        let active = ProjectList::attach(&mut state, ProjectStatus::Active);
        let finished = ProjectList::attach(&mut state, ProjectStatus::Finished);
        Self {
            state,
            form: ProjectInputForm::new(limits),
            active,
            finished,
            drag: DragSession::new(),
        }
    }

    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Runs one command, writing user-facing output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Add(input) => match self.form.submit(&mut self.state, &input) {
                Ok(id) => {
                    writeln!(out, "added {}", short_id(id))?;
                    self.render(out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Move { id, status } => match self.resolve_id(&id) {
                Ok(id) => {
                    if self.state.move_project(id, status) {
                        self.render(out)?;
                    } else {
                        writeln!(out, "{} is already {status}", short_id(id))?;
                    }
                }
                Err(message) => writeln!(out, "error: {message}")?,
            },
            Command::Drag(id) => match self.resolve_id(&id) {
                Ok(id) => {
                    self.drag.begin(id);
                    writeln!(out, "dragging {}; drop on active or finished", short_id(id))?;
                }
                Err(message) => writeln!(out, "error: {message}")?,
            },
            Command::Drop(status) => {
                if self.drag.drop_on(&mut self.state, status) {
                    self.render(out)?;
                } else {
                    writeln!(out, "nothing moved")?;
                }
            }
            Command::Cancel => {
                self.drag.cancel();
                writeln!(out, "drag cancelled")?;
            }
            Command::List => self.render(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(self.state.projects())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::Quit => {
                info!(
                    "event=app_quit module=cli status=ok projects={}",
                    self.state.len()
                );
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Prints both lists from their latest snapshots.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.active.render())?;
        write!(out, "{}", self.finished.render())?;
        Ok(())
    }

    /// Resolves a full id or a unique id prefix.
    fn resolve_id(&self, raw: &str) -> Result<ProjectId, String> {
        let needle = raw.trim().to_ascii_lowercase().replace('-', "");
        if needle.is_empty() {
            return Err("project id cannot be empty".to_string());
        }

        let mut matches = self
            .state
            .projects()
            .iter()
            .filter(|project| project.id().simple().to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(project), None) => Ok(project.id()),
            (None, _) => Err(format!("no project matches `{raw}`")),
            (Some(_), Some(_)) => Err(format!("`{raw}` matches several projects")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Flow};
    use crate::command::{parse_command, Command};
    use projboard_core::{short_id, ProjectInputLimits, ProjectStatus};

    fn run(app: &mut App, line: &str) -> String {
        let mut out = Vec::new();
        let command = parse_command(line).unwrap().unwrap();
        app.execute(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_move_by_prefix() {
        let mut app = App::new(ProjectInputLimits::default());
        let output = run(&mut app, "add Launch | ship the thing | 2");
        assert!(output.contains("ACTIVE PROJECTS\n  ["));

        let id = app.state().projects()[0].id();
        let output = run(&mut app, &format!("move {} finished", short_id(id)));
        assert!(output.contains("ACTIVE PROJECTS\n  (no projects)"));
        assert_eq!(app.state().projects()[0].status(), ProjectStatus::Finished);

        let output = run(&mut app, &format!("move {id} finished"));
        assert!(output.contains("is already finished"));
    }

    #[test]
    fn invalid_add_reports_error() {
        let mut app = App::new(ProjectInputLimits::default());
        let output = run(&mut app, "add Launch | tiny | 2");
        assert!(output.starts_with("error: description must be at least 5"));
        assert!(app.state().is_empty());
    }

    #[test]
    fn drag_and_drop_moves_project() {
        let mut app = App::new(ProjectInputLimits::default());
        run(&mut app, "add Launch | ship the thing | 2");
        let id = app.state().projects()[0].id();

        run(&mut app, &format!("drag {}", short_id(id)));
        let output = run(&mut app, "drop finished");
        assert!(output.contains("FINISHED PROJECTS\n  ["));
        assert_eq!(run(&mut app, "drop active"), "nothing moved\n");
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut app = App::new(ProjectInputLimits::default());
        let output = run(&mut app, "move abc finished");
        assert_eq!(output, "error: no project matches `abc`\n");
    }

    #[test]
    fn json_lists_projects() {
        let mut app = App::new(ProjectInputLimits::default());
        run(&mut app, "add Launch | ship the thing | 2");
        let output = run(&mut app, "json");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["status"], "active");
    }

    #[test]
    fn quit_stops_loop() {
        let mut app = App::new(ProjectInputLimits::default());
        let mut out = Vec::new();
        assert_eq!(app.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
