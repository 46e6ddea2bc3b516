use crate::domain::{Task, TaskMap};
use crate::error::TaskError;
use chrono::NaiveDate;

/// Parse one `name,start,end,urgency` record as seen on `today`
///
/// Fields are split from the right, so a name may itself contain commas.
pub fn parse_record(line: &str, today: NaiveDate) -> Result<Task, TaskError> {
    let fields: Vec<&str> = line.rsplitn(4, ',').collect();

    if let [urgency, end_date, start_date, name] = fields[..] {
        Task::from_fields(name, start_date, end_date, urgency, today)
    } else {
        Err(TaskError::MalformedRecord {
            line: 0,
            reason: format!("expected 4 comma-separated fields, found {}", fields.len()),
        })
    }
}

/// Parse the task file into a map keyed by ids 1, 2, ... in file order
///
/// Blank lines are skipped without consuming an id. The first bad record
/// fails the whole file, tagged with its line number.
pub fn parse_task_file(content: &str, today: NaiveDate) -> Result<TaskMap, TaskError> {
    let mut tasks = TaskMap::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let task = parse_record(line, today).map_err(|e| match e {
            TaskError::MalformedRecord { reason, .. } => TaskError::MalformedRecord {
                line: index + 1,
                reason,
            },
            other => other.at_line(index + 1),
        })?;
        tasks.insert(tasks.len() + 1, task);
    }

    Ok(tasks)
}
