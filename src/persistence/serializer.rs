use crate::domain::TaskMap;

/// Serialize tasks into the task file format, one record per line in id order
pub fn serialize_task_file(tasks: &TaskMap) -> String {
    let mut output = String::new();

    for task in tasks.values() {
        output.push_str(&task.to_record());
        output.push('\n');
    }

    output
}
