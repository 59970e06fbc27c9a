//! Checklist of tasks for the current session

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PomodoroError, Result};

/// Stable handle for a task, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub usize);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Ordered task collection. Tasks are never removed, so an id is its index.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Blank input is ignored and yields `None`.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = TaskId(self.tasks.len());
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        info!("Added task {}: {}", id, text);
        Some(id)
    }

    /// Flip a task's completed flag and return the new value
    pub fn toggle_task(&mut self, id: TaskId) -> Result<bool> {
        let task = self
            .tasks
            .get_mut(id.0)
            .ok_or(PomodoroError::TaskNotFound(id))?;

        task.completed = !task.completed;
        info!("Task {} marked {}", id, if task.completed { "done" } else { "open" });
        Ok(task.completed)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.0)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TaskList::new();
        assert_eq!(list.add_task(""), None);
        assert_eq!(list.add_task("   \t"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        let id = list.add_task("  write report  ").unwrap();
        assert_eq!(list.len(), 1);

        let task = list.get(id).unwrap();
        assert_eq!(task.text, "write report");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut list = TaskList::new();
        let a = list.add_task("first").unwrap();
        let b = list.add_task("second").unwrap();
        assert_ne!(a, b);

        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut list = TaskList::new();
        let id = list.add_task("review PR").unwrap();
        assert_eq!(list.toggle_task(id), Ok(true));
        assert_eq!(list.toggle_task(id), Ok(false));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown() {
        let mut list = TaskList::new();
        list.add_task("only one");
        assert_eq!(
            list.toggle_task(TaskId(7)),
            Err(PomodoroError::TaskNotFound(TaskId(7)))
        );
        assert!(!list.tasks()[0].completed);
    }
}
