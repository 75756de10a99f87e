pub mod clock;
pub mod date_window;
pub mod habit;
pub mod scroll;
pub mod timeline;
pub mod tracker;

pub use habit::{Habit, HabitFilter, Todo};
pub use scroll::{CalendarScroll, PageDirection};
pub use timeline::TimelineGeometry;
pub use tracker::Tracker;
