//! Line command parsing.

use projboard_core::{ParseStatusError, ProjectInput, ProjectStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const USAGE: &str = "commands:
  add <title> | <description> | <people>
  move <id> <active|finished>
  drag <id>
  drop <active|finished>
  cancel
  list
  json
  help
  quit";

/// One parsed board command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(ProjectInput),
    Move { id: String, status: ProjectStatus },
    Drag(String),
    Drop(ProjectStatus),
    Cancel,
    List,
    Json,
    Help,
    Quit,
}

/// Malformed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    MalformedAdd,
    Status(ParseStatusError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `{name}`; try `help`"),
            Self::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            Self::MalformedAdd => {
                write!(f, "expected `add <title> | <description> | <people>`")
            }
            Self::Status(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Status(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseStatusError> for CommandError {
    fn from(value: ParseStatusError) -> Self {
        Self::Status(value)
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest)?,
        "move" => {
            let mut args = rest.split_whitespace();
            let id = args.next().ok_or(CommandError::MissingArgument("id"))?;
            let status = args.next().ok_or(CommandError::MissingArgument("status"))?;
            Command::Move {
                id: id.to_string(),
                status: status.parse()?,
            }
        }
        "drag" => {
            let id = rest
                .split_whitespace()
                .next()
                .ok_or(CommandError::MissingArgument("id"))?;
            Command::Drag(id.to_string())
        }
        "drop" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("status"));
            }
            Command::Drop(rest.parse()?)
        }
        "cancel" => Command::Cancel,
        "list" | "ls" => Command::List,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let fields: Vec<&str> = rest.split('|').collect();
    let [title, description, people] = fields.as_slice() else {
        return Err(CommandError::MalformedAdd);
    };
    Ok(Command::Add(ProjectInput::new(*title, *description, *people)))
}
