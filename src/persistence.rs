//! Task file persistence.
//!
//! Each task is one line of the form `<id>,<completed>,<description>`, where
//! `completed` is `0` or `1` and the description runs to the end of the
//! line. There is no header and no escaping; descriptions never contain a
//! line break because the store rejects them, and commas survive a round
//! trip because only the first two delimiters split fields.
//!
//! Saving truncates and rewrites the whole file. A crash mid-write can leave
//! it truncated.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::{TaskListError, TaskResult};
use crate::models::Task;
use crate::store::TaskStore;
use crate::validation::constants::{COMPLETED_FLAG, FIELD_DELIMITER, OPEN_FLAG};
use crate::validation::{parse_completed_flag, parse_task_id};

/// Result of loading a task file.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Store populated with every well-formed record
    pub store: TaskStore,

    /// False when the file did not exist yet
    pub existed: bool,

    /// One `MalformedRecord` per skipped line
    pub warnings: Vec<TaskListError>,

    /// Non-empty lines left unread because the store was full
    pub ignored: usize,
}

impl LoadOutcome {
    fn empty(limits: StoreConfig) -> Self {
        Self {
            store: TaskStore::new(limits),
            existed: false,
            warnings: Vec::new(),
            ignored: 0,
        }
    }

    /// Number of records loaded into the store.
    pub fn loaded(&self) -> usize {
        self.store.len()
    }
}

/// The backing file of a task list.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the file with every task of the store, in store order.
    pub fn save(&self, store: &TaskStore) -> TaskResult<()> {
        let file = File::create(&self.path).map_err(|e| {
            log::error!("Could not open {} for writing: {}", self.path.display(), e);
            TaskListError::io(&self.path, e)
        })?;

        let mut writer = BufWriter::new(file);
        write_records(&mut writer, store.list())
            .and_then(|_| writer.flush())
            .map_err(|e| {
                log::error!("Could not write {}: {}", self.path.display(), e);
                TaskListError::io(&self.path, e)
            })?;

        log::info!("Saved {} tasks to {}", store.len(), self.path.display());
        Ok(())
    }

    /// Reads the file into a new store bounded by `limits`.
    ///
    /// A missing file is the first-run state and yields an empty store.
    /// Malformed lines are skipped and collected in
    /// [`LoadOutcome::warnings`]; only I/O failures are errors.
    pub fn load(&self, limits: StoreConfig) -> TaskResult<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No tasks file at {}, starting empty",
                    self.path.display()
                );
                return Ok(LoadOutcome::empty(limits));
            }
            Err(e) => {
                log::error!("Could not open {} for reading: {}", self.path.display(), e);
                return Err(TaskListError::io(&self.path, e));
            }
        };

        let outcome = read_records(BufReader::new(file), limits)
            .map_err(|e| TaskListError::io(&self.path, e))?;

        log::info!(
            "Loaded {} tasks from {} ({} skipped, {} ignored)",
            outcome.loaded(),
            self.path.display(),
            outcome.warnings.len(),
            outcome.ignored
        );
        Ok(outcome)
    }
}

/// Encodes one task as a record, without the line terminator.
pub fn encode_record(task: &Task) -> String {
    let flag = if task.completed { COMPLETED_FLAG } else { OPEN_FLAG };
    format!(
        "{}{}{}{}{}",
        task.id, FIELD_DELIMITER, flag, FIELD_DELIMITER, task.description
    )
}

/// Parses one record. `line_no` is 1-based and only used for reporting.
pub fn parse_record(line: &str, line_no: usize) -> TaskResult<Task> {
    let mut fields = line.splitn(3, FIELD_DELIMITER);
    let (Some(id), Some(flag), Some(description)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(TaskListError::malformed(
            line_no,
            "expected 3 comma-separated fields",
        ));
    };

    let id = parse_task_id(id).map_err(|reason| TaskListError::malformed(line_no, reason))?;
    let completed =
        parse_completed_flag(flag).map_err(|reason| TaskListError::malformed(line_no, reason))?;

    if description.is_empty() {
        return Err(TaskListError::malformed(line_no, "empty description"));
    }

    Ok(Task {
        id,
        description: description.to_string(),
        completed,
    })
}

/// Writes one record per task, each terminated by `\n`.
pub fn write_records<W: Write>(writer: &mut W, tasks: &[Task]) -> io::Result<()> {
    for task in tasks {
        writeln!(writer, "{}", encode_record(task))?;
    }
    Ok(())
}

/// Reads records into a new store until the input ends or the store is full.
pub fn read_records<R: BufRead>(reader: R, limits: StoreConfig) -> io::Result<LoadOutcome> {
    let mut outcome = LoadOutcome {
        existed: true,
        ..LoadOutcome::empty(limits)
    };

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let mut bytes = chunk?;
        let line_no = index + 1;

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        if outcome.store.is_full() {
            if !bytes.is_empty() {
                outcome.ignored += 1;
            }
            continue;
        }

        let result = String::from_utf8(bytes)
            .map_err(|_| TaskListError::malformed(line_no, "not valid UTF-8"))
            .and_then(|line| parse_record(&line, line_no))
            .and_then(|task| {
                outcome
                    .store
                    .insert_loaded(task)
                    .map_err(|reason| TaskListError::malformed(line_no, reason))
            });

        if let Err(e) = result {
            log::warn!("Skipping record: {}", e);
            outcome.warnings.push(e);
        }
    }

    if outcome.ignored > 0 {
        log::warn!(
            "Task list is full ({} tasks), ignored {} remaining records",
            limits.max_tasks,
            outcome.ignored
        );
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> LoadOutcome {
        read_records(Cursor::new(input.as_bytes().to_vec()), StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_encode_record() {
        let mut task = Task::new(2, "Walk dog");
        assert_eq!(encode_record(&task), "2,0,Walk dog");
        task.completed = true;
        assert_eq!(encode_record(&task), "2,1,Walk dog");
    }

    #[test]
    fn test_parse_record_keeps_commas_in_description() {
        let task = parse_record("5,1,eggs, milk, bread", 1).unwrap();
        assert_eq!(task.id, 5);
        assert!(task.completed);
        assert_eq!(task.description, "eggs, milk, bread");
    }

    #[test]
    fn test_parse_record_two_fields() {
        let err = parse_record("3,0", 4).unwrap_err();
        assert!(matches!(err, TaskListError::MalformedRecord { line: 4, .. }));
    }

    #[test]
    fn test_parse_record_bad_fields() {
        assert!(parse_record("x,0,text", 1).is_err());
        assert!(parse_record("0,0,text", 1).is_err());
        assert!(parse_record("1,2,text", 1).is_err());
        assert!(parse_record("1,0,", 1).is_err());
        assert!(parse_record("", 1).is_err());
    }

    #[test]
    fn test_write_records() {
        let mut done = Task::new(1, "Buy milk");
        done.completed = true;
        let tasks = vec![done, Task::new(2, "Walk dog")];

        let mut buf = Vec::new();
        write_records(&mut buf, &tasks).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,1,Buy milk\n2,0,Walk dog\n");
    }

    #[test]
    fn test_read_records_skips_malformed_lines() {
        let outcome = read("1,0,first\n2,1\n3,1,third\n");

        assert_eq!(outcome.loaded(), 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            outcome.warnings[0],
            TaskListError::MalformedRecord { line: 2, .. }
        ));
        let ids: Vec<_> = outcome.store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(outcome.store.next_id(), 4);
    }

    #[test]
    fn test_read_records_handles_crlf_and_missing_final_newline() {
        let outcome = read("1,0,first\r\n2,1,second");
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.store.list()[0].description, "first");
        assert_eq!(outcome.store.list()[1].description, "second");
    }

    #[test]
    fn test_read_records_rejects_duplicate_ids() {
        let outcome = read("4,0,one\n4,0,two\n");
        assert_eq!(outcome.loaded(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.store.list()[0].description, "one");
    }

    #[test]
    fn test_read_records_invalid_utf8() {
        let mut input = b"1,0,ok\n2,0,".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b"\n3,0,also ok\n");

        let outcome = read_records(Cursor::new(input), StoreConfig::default()).unwrap();
        assert_eq!(outcome.loaded(), 2);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_read_records_stops_at_capacity() {
        let limits = StoreConfig {
            max_tasks: 2,
            ..StoreConfig::default()
        };
        let input = "1,0,a\n2,0,b\n3,0,c\n\n4,0,d\n";
        let outcome = read_records(Cursor::new(input.as_bytes().to_vec()), limits).unwrap();

        assert_eq!(outcome.loaded(), 2);
        assert_eq!(outcome.ignored, 2);
        assert!(outcome.warnings.is_empty());
    }
}
