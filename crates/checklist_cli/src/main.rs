mod cli;

use checklist_core::error::CoreError;
use checklist_core::ops;
use clap::Parser;
use cli::{Cli, Command, read_description, store_path};
use std::fmt;
use std::io;

enum CliError {
    Usage(String),
    Core(CoreError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "invalid_input - {message}"),
            Self::Core(err) => write!(f, "{err}"),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = store_path()?;

    match cli.command {
        Command::Add { description } => {
            let description = match description {
                Some(value) if !value.trim().is_empty() => value.trim().to_string(),
                _ => {
                    let stdin = io::stdin();
                    read_description(&mut stdin.lock()).map_err(CliError::Usage)?
                }
            };

            let (ordinal, task) = ops::add_with_path(&path, &description)?;
            println!("Added task #{}: {}", ordinal, task.description);
        }
        Command::Done { ordinal } => {
            let task = ops::complete_with_path(&path, ordinal)?;
            println!("Completed task #{}: {}", ordinal, task.description);
        }
        Command::Delete { ordinal } => {
            let task = ops::delete_with_path(&path, ordinal)?;
            println!("Deleted task #{}: {}", ordinal, task.description);
        }
        Command::List => {
            let list = ops::load_with_path(&path)?;
            print!("{}", list.render());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
