/// Default maximum length for task descriptions, in characters.
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 255;

/// Default maximum number of tasks the store holds.
pub const DEFAULT_MAX_TASKS: usize = 100;

/// Field delimiter of the task file.
pub const FIELD_DELIMITER: char = ',';

/// Flag written for a completed task.
pub const COMPLETED_FLAG: &str = "1";

/// Flag written for an open task.
pub const OPEN_FLAG: &str = "0";
