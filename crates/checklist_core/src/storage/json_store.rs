use crate::error::CoreError;
use crate::model::TaskList;
use std::io::ErrorKind;
use std::path::Path;

/// Read the whole list back from `path`. An absent file is the
/// first-run bootstrap case and yields an empty list; an empty or
/// whitespace-only file is treated the same way.
pub fn load(path: &Path) -> Result<TaskList, CoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TaskList::new()),
        Err(err) => return Err(CoreError::storage_read(err.to_string())),
    };

    if content.trim().is_empty() {
        return Ok(TaskList::new());
    }

    serde_json::from_str(&content).map_err(|err| CoreError::storage_decode(err.to_string()))
}

/// Replace whatever is at `path` with the full encoding of `list`,
/// creating the parent directory if needed.
pub fn save(path: &Path, list: &TaskList) -> Result<(), CoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| CoreError::storage_write(err.to_string()))?;
    }

    let content = serde_json::to_string_pretty(list)
        .map_err(|err| CoreError::storage_write(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| CoreError::storage_write(err.to_string()))
}
