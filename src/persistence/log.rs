use super::files::append_to_file;
use crate::domain::{Task, TaskMap};
use crate::error::TaskError;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::debug;

/// How a task left the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Completed,
    Incomplete,
}

impl LogOutcome {
    /// Tag written in the log line
    pub fn tag(&self) -> &'static str {
        match self {
            LogOutcome::Completed => "COMPLETED",
            LogOutcome::Incomplete => "INCOMPLETE",
        }
    }

    /// Past-tense description for user messages
    pub fn describe(&self) -> &'static str {
        match self {
            LogOutcome::Completed => "completed",
            LogOutcome::Incomplete => "incomplete",
        }
    }
}

/// Format one completion log line (with trailing newline)
pub fn serialize_log_entry(task: &Task, outcome: LogOutcome, now: NaiveDateTime) -> String {
    format!(
        "{} {} {}, started on {}\n",
        now.format("%a %d-%m-%y %H:%M:%S"),
        outcome.tag(),
        task.name(),
        task.start_date().format("%a %d-%m-%y")
    )
}

/// Parse a comma-separated list of task ids ("1,3,4")
pub fn parse_selection(value: &str) -> Result<Vec<usize>, TaskError> {
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| TaskError::invalid_selection(value.trim()))
        })
        .collect()
}

/// Log the selected tasks and remove them from the working set
///
/// Every id must exist before anything is written. Tasks are logged in id
/// order; the first log failure is returned and the caller must not save.
/// Returns the removed ids.
pub fn process_tasks(
    ids: &[usize],
    tasks: &mut TaskMap,
    log_path: &Path,
    outcome: LogOutcome,
    now: NaiveDateTime,
) -> Result<Vec<usize>> {
    if let Some(&missing) = ids.iter().find(|id| !tasks.contains_key(*id)) {
        return Err(TaskError::UnknownTask { id: missing }.into());
    }

    let selected: Vec<usize> = tasks
        .keys()
        .copied()
        .filter(|id| ids.contains(id))
        .collect();

    for id in &selected {
        let entry = serialize_log_entry(&tasks[id], outcome, now);
        append_to_file(log_path, &entry)?;
        debug!(id, outcome = outcome.tag(), "logged task");
    }

    for id in &selected {
        tasks.remove(id);
    }

    Ok(selected)
}
