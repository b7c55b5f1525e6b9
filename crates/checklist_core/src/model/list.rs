use crate::error::CoreError;
use crate::model::Task;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use time::OffsetDateTime;

/// An insertion-ordered list of tasks. Positions are 1-based ordinals,
/// valid only until the next delete; the list itself owns all mutation
/// so callers never hold references into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task at the given 1-based ordinal, if any.
    pub fn get(&self, ordinal: usize) -> Option<&Task> {
        if ordinal < 1 {
            return None;
        }
        self.tasks.get(ordinal - 1)
    }

    /// Append a new pending task. Never fails and never disturbs the
    /// ordinals of existing tasks.
    pub fn add(&mut self, description: &str) {
        self.push(Task::new(description));
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Mark the task at `ordinal` as completed. Existence is checked
    /// before state, so an out-of-range ordinal is always
    /// `ItemNotFound` and re-completing is always `ItemAlreadyCompleted`.
    pub fn complete(&mut self, ordinal: usize) -> Result<(), CoreError> {
        if ordinal < 1 || ordinal > self.tasks.len() {
            return Err(CoreError::ItemNotFound(ordinal));
        }

        let task = &mut self.tasks[ordinal - 1];
        if task.done {
            return Err(CoreError::ItemAlreadyCompleted(ordinal));
        }

        task.done = true;
        task.completed_at = Some(OffsetDateTime::now_utc());

        Ok(())
    }

    /// Remove the task at `ordinal`; every later task shifts down by
    /// one ordinal.
    pub fn delete(&mut self, ordinal: usize) -> Result<(), CoreError> {
        if ordinal < 1 || ordinal > self.tasks.len() {
            return Err(CoreError::ItemNotFound(ordinal));
        }

        self.tasks.remove(ordinal - 1);

        Ok(())
    }

    /// Human-readable projection, one `[ ] N: description` line per
    /// task. Not the persisted encoding.
    pub fn render(&self) -> String {
        let mut formatted = String::new();
        for (index, task) in self.tasks.iter().enumerate() {
            let marker = if task.done { "[X]" } else { "[ ]" };
            let _ = writeln!(formatted, "{} {}: {}", marker, index + 1, task.description);
        }
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::TaskList;
    use crate::error::CoreError;

    #[test]
    fn add_appends_pending_task() {
        let mut list = TaskList::new();
        list.add("buy milk");

        assert_eq!(list.len(), 1);
        let task = list.get(1).unwrap();
        assert_eq!(task.description, "buy milk");
        assert!(!task.done);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).unwrap().description, "a");
        assert_eq!(list.get(2).unwrap().description, "b");
        assert_eq!(list.get(3).unwrap().description, "c");
    }

    #[test]
    fn complete_marks_done_and_sets_timestamp() {
        let mut list = TaskList::new();
        list.add("buy milk");

        list.complete(1).unwrap();

        let task = list.get(1).unwrap();
        assert!(task.done);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn complete_rejects_already_completed_task() {
        let mut list = TaskList::new();
        list.add("buy milk");
        list.complete(1).unwrap();

        let err = list.complete(1).unwrap_err();

        assert_eq!(err, CoreError::ItemAlreadyCompleted(1));
    }

    #[test]
    fn complete_rejects_out_of_range_ordinals() {
        let mut list = TaskList::new();
        list.add("buy milk");

        assert_eq!(list.complete(0).unwrap_err(), CoreError::ItemNotFound(0));
        assert_eq!(list.complete(2).unwrap_err(), CoreError::ItemNotFound(2));
    }

    #[test]
    fn complete_on_empty_list_reports_not_found() {
        let mut list = TaskList::new();

        assert_eq!(list.complete(1).unwrap_err(), CoreError::ItemNotFound(1));
    }

    #[test]
    fn complete_touches_only_the_target_task() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        list.complete(2).unwrap();

        assert!(!list.get(1).unwrap().done);
        assert!(list.get(2).unwrap().done);
        assert!(!list.get(3).unwrap().done);
    }

    #[test]
    fn delete_shifts_later_ordinals_down() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        list.delete(2).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description, "a");
        assert_eq!(list.get(2).unwrap().description, "c");
    }

    #[test]
    fn delete_rejects_out_of_range_ordinals() {
        let mut list = TaskList::new();
        list.add("a");

        assert_eq!(list.delete(0).unwrap_err(), CoreError::ItemNotFound(0));
        assert_eq!(list.delete(2).unwrap_err(), CoreError::ItemNotFound(2));
    }

    #[test]
    fn delete_then_stale_ordinal_reports_not_found() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.delete(2).unwrap();

        assert_eq!(list.delete(2).unwrap_err(), CoreError::ItemNotFound(2));
    }

    #[test]
    fn render_marks_pending_and_completed_tasks() {
        let mut list = TaskList::new();
        list.add("buy milk");

        assert_eq!(list.render(), "[ ] 1: buy milk\n");

        list.complete(1).unwrap();

        assert_eq!(list.render(), "[X] 1: buy milk\n");
    }

    #[test]
    fn render_uses_current_ordinals_after_delete() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        list.delete(2).unwrap();

        assert_eq!(list.render(), "[ ] 1: a\n[ ] 2: c\n");
    }

    #[test]
    fn render_of_empty_list_is_empty() {
        assert_eq!(TaskList::new().render(), "");
    }
}
