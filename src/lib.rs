pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{TaskListError, TaskResult};
pub use models::{Task, TaskId};
pub use persistence::{LoadOutcome, TaskFile};
pub use store::TaskStore;
