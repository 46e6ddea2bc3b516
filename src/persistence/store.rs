use super::files::{atomic_write, read_file};
use super::parser::parse_task_file;
use super::serializer::serialize_task_file;
use crate::domain::TaskMap;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

/// Load the task file as seen on `today` (a missing file is an empty set)
pub fn load_tasks(path: &Path, today: NaiveDate) -> Result<TaskMap> {
    let content = read_file(path)?;
    let tasks = parse_task_file(&content, today)
        .with_context(|| format!("Invalid task file: {}", path.display()))?;
    debug!(count = tasks.len(), path = %path.display(), "loaded tasks");
    Ok(tasks)
}

/// Overwrite the task file with the whole working set
pub fn save_tasks(path: &Path, tasks: &TaskMap) -> Result<()> {
    atomic_write(path, &serialize_task_file(tasks))?;
    debug!(count = tasks.len(), path = %path.display(), "saved tasks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_date, Urgency};
    use crate::error::TaskError;

    fn today() -> NaiveDate {
        parse_date("01-06-25").unwrap()
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = load_tasks(&temp_dir.path().join("tasks"), today()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("var").join("tasks");
        let content = "Buy milk,01-06-25,01-06-25,4\nWrite report,01-06-25,10-06-25,4\n";
        atomic_write(&path, content).unwrap();

        let mut tasks = load_tasks(&path, today()).unwrap();
        assert_eq!(tasks[&1].urgency(), Urgency::Critical);
        tasks.remove(&1);
        save_tasks(&path, &tasks).unwrap();

        assert_eq!(read_file(&path).unwrap(), "Write report,01-06-25,10-06-25,4\n");
        let reloaded = load_tasks(&path, today()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[&1].name(), "Write report");
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks");
        atomic_write(&path, "Buy milk,01-06-25,01-06-25,9\n").unwrap();

        let err = load_tasks(&path, today()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::MalformedRecord { line: 1, .. })
        ));
    }
}
