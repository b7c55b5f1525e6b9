//! One command invocation per function: load the list from the given
//! path, apply a single mutation, save it back. The path comes from
//! the caller verbatim; the core never consults the environment.

use crate::error::CoreError;
use crate::model::{Task, TaskList};
use crate::storage::json_store;
use std::path::Path;

pub fn add_with_path(path: &Path, description: &str) -> Result<(usize, Task), CoreError> {
    let mut list = json_store::load(path)?;
    let task = Task::new(description);
    list.push(task.clone());
    json_store::save(path, &list)?;

    Ok((list.len(), task))
}

pub fn complete_with_path(path: &Path, ordinal: usize) -> Result<Task, CoreError> {
    let mut list = json_store::load(path)?;
    list.complete(ordinal)?;
    let task = list
        .get(ordinal)
        .cloned()
        .ok_or(CoreError::ItemNotFound(ordinal))?;
    json_store::save(path, &list)?;

    Ok(task)
}

pub fn delete_with_path(path: &Path, ordinal: usize) -> Result<Task, CoreError> {
    let mut list = json_store::load(path)?;
    let removed = list
        .get(ordinal)
        .cloned()
        .ok_or(CoreError::ItemNotFound(ordinal))?;
    list.delete(ordinal)?;
    json_store::save(path, &list)?;

    Ok(removed)
}

pub fn load_with_path(path: &Path) -> Result<TaskList, CoreError> {
    json_store::load(path)
}
