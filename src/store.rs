//! In-memory task collection.
//!
//! [`TaskStore`] keeps tasks in insertion order and assigns ids from a
//! monotonic counter. The counter is seeded from the highest id ever loaded
//! or assigned, so deleting the last task never frees its id for reuse.

use crate::config::StoreConfig;
use crate::error::{TaskListError, TaskResult};
use crate::models::{Task, TaskId};
use crate::validation::validate_description;

/// Ordered, capacity-bounded collection of tasks owned by one session.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    limits: StoreConfig,
    /// Highest id seen so far; 0 when none was ever assigned.
    last_id: TaskId,
}

impl TaskStore {
    pub fn new(limits: StoreConfig) -> Self {
        Self {
            tasks: Vec::new(),
            limits,
            last_id: 0,
        }
    }

    /// Appends a new open task and returns it.
    ///
    /// The description may still carry the trailing line terminator it was
    /// read with; it is stripped before validation.
    pub fn add(&mut self, description: &str) -> TaskResult<&Task> {
        if self.is_full() {
            return Err(TaskListError::CapacityExceeded {
                capacity: self.limits.max_tasks,
            });
        }

        let description = validate_description(description, self.limits.max_description_len)?;

        // An exhausted id space is reported the same way as a full store.
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(TaskListError::CapacityExceeded {
                capacity: self.limits.max_tasks,
            })?;

        self.last_id = id;
        self.tasks.push(Task::new(id, description));
        log::debug!("Added task {}", id);

        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// All tasks, in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Marks a task as completed. Completing it again is not an error.
    pub fn complete(&mut self, id: TaskId) -> TaskResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskListError::NotFound(id))?;

        task.completed = true;
        log::debug!("Completed task {}", id);
        Ok(())
    }

    /// Removes a task, keeping the remaining tasks in order, and returns it.
    pub fn delete(&mut self, id: TaskId) -> TaskResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskListError::NotFound(id))?;

        let removed = self.tasks.remove(index);
        log::debug!("Deleted task {}", id);
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tasks.len() >= self.limits.max_tasks
    }

    pub fn limits(&self) -> StoreConfig {
        self.limits
    }

    /// Id the next successful [`add`](Self::add) will assign.
    pub fn next_id(&self) -> TaskId {
        self.last_id.saturating_add(1)
    }

    /// Appends a task read from persisted state, keeping its id and flag.
    ///
    /// Returns a reason string when the task cannot be accepted: a full
    /// store, an invalid description or an id that is already present.
    pub(crate) fn insert_loaded(&mut self, task: Task) -> Result<(), String> {
        if self.is_full() {
            return Err(format!(
                "task list is full ({} tasks)",
                self.limits.max_tasks
            ));
        }

        validate_description(&task.description, self.limits.max_description_len)
            .map_err(|e| e.to_string())?;

        if self.find(task.id).is_some() {
            return Err(format!("duplicate task id {}", task.id));
        }

        self.last_id = self.last_id.max(task.id);
        self.tasks.push(task);
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
