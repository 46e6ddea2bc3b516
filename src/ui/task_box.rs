use super::layout::LayoutConfig;
use super::styles::Styler;
use super::wrap::wrap_name;
use crate::domain::Task;

/// Blank status column for the continuation rows of a wrapped task
const BLANK_STATUS: &str = "          ";

/// Render one task as rows of its bordered box
///
/// Only the first row carries the status label and the days-left figure;
/// continuation rows show a blank status column so the border stays aligned.
pub fn render_task_rows(task: &Task, layout: &LayoutConfig, styler: &dyn Styler) -> Vec<String> {
    let box_width = layout.box_width();
    let tone = task.urgency().tone();

    wrap_name(task.name(), box_width)
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let cell = name_cell(line, box_width);
            let info = if index == 0 {
                format!("|{}|{:>6}", task.urgency().label(), task.days_left())
            } else {
                format!("|{}|", BLANK_STATUS)
            };
            format!("{}{}", styler.paint(&cell, tone), styler.bold(&info))
        })
        .collect()
}

/// One leading space, then the line padded to the box width
fn name_cell(line: &str, box_width: usize) -> String {
    let padding = box_width.saturating_sub(line.chars().count());
    format!(" {}{}", line, " ".repeat(padding))
}
