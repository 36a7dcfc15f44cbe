/// Task identifier. Positive, never reused within a store's lifetime.
pub type TaskId = u64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    /// Only ever goes from `false` to `true`; there is no unmark operation.
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    /// Status marker used by the task table.
    pub fn status_marker(&self) -> &'static str {
        if self.completed { "[X]" } else { "[ ]" }
    }
}
