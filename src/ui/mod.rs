pub mod layout;
pub mod listing;
pub mod styles;
pub mod task_box;
pub mod wrap;

pub use layout::{LayoutConfig, DEFAULT_INFO_WIDTH};
pub use listing::{Renderer, TitleStyle};
pub use styles::PlainStyler;
