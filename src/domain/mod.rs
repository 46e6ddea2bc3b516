pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Tone, Urgency};
pub use task::{parse_date, Task, TaskEdit, TaskMap};
pub use views::group_and_order;
