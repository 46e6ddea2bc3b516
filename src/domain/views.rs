use super::enums::Urgency;
use super::task::{Task, TaskMap};

/// Group tasks by urgency bucket and order each group by days left
///
/// Always returns one group per bucket, in listing order, so empty groups
/// stay visible to the renderer. The sort is stable: ties keep id order.
pub fn group_and_order(tasks: &TaskMap) -> Vec<Vec<&Task>> {
    let mut groups: Vec<Vec<&Task>> = vec![Vec::new(); Urgency::COUNT];

    for task in tasks.values() {
        groups[task.urgency().id() as usize].push(task);
    }

    for group in &mut groups {
        group.sort_by_key(|task| task.days_left());
    }

    groups
}
