//! Terminal project board.
//!
//! # Responsibility
//! - Parse startup flags and configure logging and input limits.
//! - Feed stdin lines to the board until `quit` or end of input.

mod app;
mod command;

use app::{App, Flow};
use clap::Parser;
use command::parse_command;
use log::warn;
use projboard_core::{default_log_level, init_logging, ProjectInputLimits};
use std::error::Error;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "projboard", version)]
#[command(about = "Track active and finished projects from the terminal")]
struct Cli {
    /// Log level (trace|debug|info|warn|error). Defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    /// Minimum people per project.
    #[arg(long, default_value_t = ProjectInputLimits::default().min_people)]
    min_people: u32,

    /// Maximum people per project.
    #[arg(long, default_value_t = ProjectInputLimits::default().max_people)]
    max_people: u32,

    /// Minimum description length in characters.
    #[arg(long, default_value_t = ProjectInputLimits::default().min_description_len)]
    min_description_len: usize,
}

impl Cli {
    fn limits(&self) -> ProjectInputLimits {
        ProjectInputLimits {
            min_description_len: self.min_description_len,
            min_people: self.min_people,
            max_people: self.max_people,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let limits = cli.limits();
    limits.validate()?;

    let mut app = App::new(limits);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "projboard {}; type `help` for commands",
        projboard_core::core_version()
    )?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if app.execute(command, &mut out)? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!("event=command_parse module=cli status=rejected");
                writeln!(out, "error: {err}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
