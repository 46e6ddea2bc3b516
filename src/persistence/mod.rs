pub mod files;
pub mod log;
pub mod parser;
pub mod serializer;
pub mod store;

pub use files::{default_log_file, default_task_file};
pub use log::{parse_selection, process_tasks, LogOutcome};
pub use store::{load_tasks, save_tasks};
