//! Interactive menu session.
//!
//! The session owns the store for the lifetime of the process. It reads one
//! line per prompt, so anything typed after a number is discarded with the
//! rest of the line and never mistaken for the next menu choice.

use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::error::TaskListError;
use crate::models::TaskId;
use crate::persistence::TaskFile;
use crate::store::TaskStore;

const RULE: &str = "----------------------------------------";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Complete,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::View),
            3 => Some(MenuChoice::Complete),
            4 => Some(MenuChoice::Delete),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over a task store and its backing file.
pub struct Session<R, W> {
    store: TaskStore,
    file: TaskFile,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: TaskStore, file: TaskFile, input: R, output: W) -> Self {
        Self {
            store,
            file,
            input,
            output,
        }
    }

    /// Loads the configured task file and reports the outcome.
    ///
    /// Load failures are reported and the session starts with an empty
    /// store.
    pub fn open(config: &Config, input: R, mut output: W) -> io::Result<Self> {
        writeln!(output, "Welcome to the To-Do List Manager!")?;

        let file = TaskFile::new(config.tasks_file.clone());
        let store = match file.load(config.store) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    writeln!(output, "Warning: {}", warning)?;
                }
                if !outcome.existed {
                    writeln!(
                        output,
                        "No existing tasks file found. Starting with an empty list."
                    )?;
                } else {
                    writeln!(
                        output,
                        "Loaded {} tasks from {}.",
                        outcome.loaded(),
                        file.path().display()
                    )?;
                }
                if outcome.ignored > 0 {
                    writeln!(
                        output,
                        "Warning: Task list is full. Ignored {} remaining records.",
                        outcome.ignored
                    )?;
                }
                outcome.store
            }
            Err(e) => {
                writeln!(output, "Error: {}. Starting with an empty list.", e)?;
                TaskStore::new(config.store)
            }
        };

        Ok(Self::new(store, file, input, output))
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Runs the menu until Exit is chosen or input ends, then saves.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return self.exit();
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(n) => MenuChoice::from_number(n),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            match choice {
                Some(MenuChoice::Add) => self.add_task()?,
                Some(MenuChoice::View) => self.view_tasks()?,
                Some(MenuChoice::Complete) => self.complete_task()?,
                Some(MenuChoice::Delete) => self.delete_task()?,
                Some(MenuChoice::Exit) => return self.exit(),
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
            writeln!(self.output)?;
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "--- To-Do List Menu ---")?;
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. View Tasks")?;
        writeln!(self.output, "3. Mark Task as Complete")?;
        writeln!(self.output, "4. Delete Task")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "-----------------------")
    }

    /// Prints `message` and reads one line. `None` once input has ended.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts for a task id. Invalid input is reported and yields `None`.
    fn prompt_id(&mut self, message: &str) -> io::Result<Option<TaskId>> {
        let Some(line) = self.prompt(message)? else {
            return Ok(None);
        };
        match line.trim().parse::<TaskId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                Ok(None)
            }
        }
    }

    fn add_task(&mut self) -> io::Result<()> {
        if self.store.is_full() {
            let err = TaskListError::CapacityExceeded {
                capacity: self.store.limits().max_tasks,
            };
            return writeln!(self.output, "{}", err);
        }

        let Some(description) = self.prompt("Enter task description: ")? else {
            return writeln!(self.output, "Error reading task description.");
        };

        match self.store.add(&description) {
            Ok(task) => {
                let id = task.id;
                writeln!(self.output, "Task added successfully! (ID: {})", id)
            }
            Err(e) => writeln!(self.output, "{} Task not added.", e),
        }
    }

    fn view_tasks(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "No tasks to display. Add some tasks first!");
        }

        writeln!(self.output, "--- Your To-Do Tasks ---")?;
        writeln!(self.output, "{:<5} {:<10} {}", "ID", "Status", "Description")?;
        writeln!(self.output, "{}", RULE)?;
        for task in self.store.list() {
            writeln!(
                self.output,
                "{:<5} {} {}",
                task.id,
                task.status_marker(),
                task.description
            )?;
        }
        writeln!(self.output, "{}", RULE)
    }

    fn complete_task(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "No tasks to mark complete. Add tasks first!");
        }

        let Some(id) = self.prompt_id("Enter the ID of the task to mark as complete: ")? else {
            return Ok(());
        };

        match self.store.complete(id) {
            Ok(()) => writeln!(self.output, "Task ID {} marked as complete.", id),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn delete_task(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "No tasks to delete.");
        }

        let Some(id) = self.prompt_id("Enter the ID of the task to delete: ")? else {
            return Ok(());
        };

        match self.store.delete(id) {
            Ok(_) => writeln!(self.output, "Task ID {} deleted successfully.", id),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        writeln!(self.output, "Exiting program. Saving tasks...")?;
        match self.file.save(&self.store) {
            Ok(()) => writeln!(self.output, "Tasks saved successfully. Goodbye!"),
            Err(e) => writeln!(self.output, "Error: Could not save tasks. {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(6), None);
    }
}
