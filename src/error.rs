//! Error types for the task list.
//!
//! Every failure a store or persistence operation can report is a variant of
//! [`TaskListError`]. None of them are fatal to the process: the session
//! reports them and shows the menu again.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskId;

/// Main error type for task list operations.
#[derive(Error, Debug)]
pub enum TaskListError {
    /// The store already holds the configured maximum number of tasks
    #[error("Task list is full ({capacity} tasks). Cannot add more tasks.")]
    CapacityExceeded { capacity: usize },

    /// Blank task text
    #[error("Task description cannot be empty.")]
    EmptyDescription,

    /// Task text longer than the configured bound
    #[error("Task description cannot exceed {max} characters.")]
    DescriptionTooLong { max: usize },

    /// Task text containing a line break, which the record format cannot hold
    #[error("Task description cannot contain line breaks.")]
    MultilineDescription,

    /// No task with this id
    #[error("Task with ID {0} not found.")]
    NotFound(TaskId),

    /// The backing file could not be opened, read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted line that does not parse into a task
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl TaskListError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskListError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        TaskListError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for task list operations.
pub type TaskResult<T> = Result<T, TaskListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        assert_eq!(
            TaskListError::NotFound(42).to_string(),
            "Task with ID 42 not found."
        );
    }

    #[test]
    fn test_io_message_names_the_path() {
        let err = TaskListError::io(
            "/nope/tasks.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/nope/tasks.txt"));
        assert!(message.contains("denied"));
    }
}
