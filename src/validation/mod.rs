//! Input validation for task descriptions and persisted record fields.
//!
//! Descriptions are validated before they reach the store; record fields are
//! validated while a task file is parsed.

pub mod constants;
mod task;

pub use task::{parse_completed_flag, parse_task_id, validate_description};
