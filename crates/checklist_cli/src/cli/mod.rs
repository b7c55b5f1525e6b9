use checklist_core::error::CoreError;
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: checklist add "Buy milk"
    /// With no description, one line is read from stdin instead.
    Add { description: Option<String> },
    /// Mark a task as completed
    ///
    /// Example: checklist done 1
    Done { ordinal: usize },
    /// Delete a task
    ///
    /// Example: checklist delete 1
    Delete { ordinal: usize },
    /// List all tasks
    ///
    /// Example: checklist list
    List,
}

/// Environment variable overriding the store location.
pub const STORE_ENV_VAR: &str = "CHECKLIST_STORE_PATH";
const STORE_FILE_NAME: &str = "tasks.json";

/// Resolve where the task store lives. The resulting path is handed to
/// the core verbatim; this is the only place that reads the environment.
pub fn store_path() -> Result<PathBuf, CoreError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| CoreError::storage_read("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("checklist")
            .join(STORE_FILE_NAME))
    } else {
        let home =
            std::env::var("HOME").map_err(|_| CoreError::storage_read("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("checklist")
            .join(STORE_FILE_NAME))
    }
}

/// Read one task description line from `reader`. An empty or blank
/// line is a usage error, not a task.
pub fn read_description<R: BufRead>(reader: &mut R) -> Result<String, String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|err| err.to_string())?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("description is required".to_string());
    }

    Ok(trimmed.to_string())
}
