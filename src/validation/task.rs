use crate::error::{TaskListError, TaskResult};
use crate::models::TaskId;

use super::constants::{COMPLETED_FLAG, OPEN_FLAG};

/// Validates a task description and returns it without its line terminator.
///
/// One trailing `\n` (or `\r\n`) is removed first, so a line read straight
/// from a terminal can be passed in as is.
pub fn validate_description(raw: &str, max_len: usize) -> TaskResult<&str> {
    let description = strip_line_terminator(raw);

    if description.is_empty() {
        return Err(TaskListError::EmptyDescription);
    }

    if description.contains(['\n', '\r']) {
        return Err(TaskListError::MultilineDescription);
    }

    if description.chars().count() > max_len {
        return Err(TaskListError::DescriptionTooLong { max: max_len });
    }

    Ok(description)
}

/// Parses the id field of a record. Ids are positive decimal integers.
pub fn parse_task_id(field: &str) -> Result<TaskId, String> {
    let field = field.trim();
    match field.parse::<TaskId>() {
        Ok(0) => Err("task id must be positive".to_string()),
        Ok(id) => Ok(id),
        Err(_) => Err(format!("invalid task id '{}'", field)),
    }
}

/// Parses the completed field of a record, which must be `0` or `1`.
pub fn parse_completed_flag(field: &str) -> Result<bool, String> {
    match field.trim() {
        COMPLETED_FLAG => Ok(true),
        OPEN_FLAG => Ok(false),
        other => Err(format!("invalid completed flag '{}', expected 0 or 1", other)),
    }
}

fn strip_line_terminator(raw: &str) -> &str {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    raw.strip_suffix('\r').unwrap_or(raw)
}
