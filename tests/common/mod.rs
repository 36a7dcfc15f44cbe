#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use task_list::config::{Config, StoreConfig};
use task_list::session::Session;
use task_list::TaskStore;
use tempfile::TempDir;

/// Scratch directory holding a task file that does not exist yet.
pub fn scratch() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tasks.txt");
    (dir, path)
}

/// Configuration pointing at `path` with default limits.
pub fn config_for(path: &Path) -> Config {
    Config {
        tasks_file: path.to_path_buf(),
        store: StoreConfig::default(),
    }
}

/// Store limits with a custom capacity.
pub fn limits(max_tasks: usize) -> StoreConfig {
    StoreConfig {
        max_tasks,
        ..StoreConfig::default()
    }
}

/// Store with the given descriptions added in order.
pub fn store_with(descriptions: &[&str]) -> TaskStore {
    let mut store = TaskStore::default();
    for description in descriptions {
        store.add(description).expect("Failed to add task");
    }
    store
}

/// Opens a session on `config`, feeds it `input` and returns everything it
/// printed together with the final store.
pub fn run_session(config: &Config, input: &str) -> (String, TaskStore) {
    let mut output = Vec::new();
    let store = {
        let mut session = Session::open(config, Cursor::new(input.as_bytes()), &mut output)
            .expect("Failed to open session");
        session.run().expect("Session failed");
        session.into_store()
    };
    (String::from_utf8(output).expect("Output is not UTF-8"), store)
}
