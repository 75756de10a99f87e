pub mod calendar_view;
pub mod dialogs;
pub mod habit_editor;
pub mod habit_list;
pub mod theme;
pub mod todo_list;
pub mod toolbar;
