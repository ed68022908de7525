pub mod enums;
pub mod settings;
pub mod task;
pub mod theme;
pub mod views;

pub use enums::{Mode, UiMode};
pub use settings::{parse_minutes, Settings};
pub use task::{parse_estimate, Task, TaskId, TaskList};
pub use theme::Theme;
pub use views::{format_clock, progress_fraction, task_glyph, unit_track, units_label};
