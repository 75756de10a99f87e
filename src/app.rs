use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::config::AppSettings;
use crate::model::Tracker;
use crate::ui;
use crate::ui::calendar_view::CalendarView;
use crate::ui::habit_editor::{EditorAction, HabitDraft};
use crate::ui::habit_list::HabitListAction;
use crate::ui::todo_list::{TodoAction, TodoInput};

/// Repaint cadence while a notification or coin badge is showing.
const FLASH_REPAINT: Duration = Duration::from_millis(100);

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Habits,
    Todo,
    Calendar,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Habits, View::Todo, View::Calendar]
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Habits => "HABITS",
            View::Todo => "TODO",
            View::Calendar => "CALENDAR",
        }
    }
}

/// Main application state.
pub struct HabitApp {
    pub settings: AppSettings,
    pub tracker: Tracker,
    pub view: View,
    /// Present only while the calendar view is shown.
    pub calendar: Option<CalendarView>,

    // Habit editor panel
    pub editor: Option<HabitDraft>,

    // Dialog state
    pub show_add_category: bool,
    pub new_category_name: String,
    pub category_to_delete: Option<String>,
    pub habit_to_delete: Option<Uuid>,

    pub todo_input: TodoInput,
}

impl HabitApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            settings,
            tracker: Tracker::sample(),
            view: View::Habits,
            calendar: None,
            editor: None,
            show_add_category: false,
            new_category_name: String::new(),
            category_to_delete: None,
            habit_to_delete: None,
            todo_input: TodoInput::default(),
        }
    }

    /// Heading for the app bar.
    pub fn title(&self) -> &'static str {
        match self.view {
            View::Habits => self.tracker.filter.title(),
            View::Todo => "Todo",
            View::Calendar => "Calendar",
        }
    }

    /// Switch screens. The calendar is built fresh on entry and dropped on
    /// exit, which also stops its time indicator.
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = ?self.view, to = ?view, "switching view");
        self.view = view;
        self.calendar = match view {
            View::Calendar => Some(CalendarView::new(&self.settings.calendar)),
            _ => None,
        };
        if view != View::Habits {
            self.editor = None;
        }
    }

    pub fn apply_habit_action(&mut self, action: HabitListAction, now: Instant) {
        match action {
            HabitListAction::None => {}
            HabitListAction::SelectCategory(name) => self.tracker.active_category = name,
            HabitListAction::AddCategory => self.show_add_category = true,
            HabitListAction::DeleteCategory(name) => self.category_to_delete = Some(name),
            HabitListAction::ToggleShowCompleted => self.tracker.toggle_show_completed(now),
            HabitListAction::SetFilter(filter) => self.tracker.set_filter(filter, now),
            HabitListAction::Complete(id) => {
                self.tracker.complete_habit(id, now);
            }
            HabitListAction::Reset(id) => self.tracker.reset_habit(id),
            HabitListAction::Edit(id) => {
                self.editor = self.tracker.habit(id).map(HabitDraft::edit);
            }
            HabitListAction::Delete(id) => self.habit_to_delete = Some(id),
            HabitListAction::Stats(id) => {
                if let Some(habit) = self.tracker.habit(id) {
                    let message = format!(
                        "{} {}: {}/{} today, {:.1} coins each",
                        habit.icon,
                        habit.text,
                        habit.daily_completions,
                        habit.target_completions,
                        habit.coins
                    );
                    self.tracker.notify(message, now);
                }
            }
            HabitListAction::Add => self.editor = Some(HabitDraft::default()),
        }
    }

    /// Add the category typed into the dialog. Returns false, leaving the
    /// dialog open, while the name is blank. Duplicates are dropped.
    pub fn submit_category(&mut self) -> bool {
        if self.new_category_name.trim().is_empty() {
            return false;
        }
        let name = std::mem::take(&mut self.new_category_name);
        if !self.tracker.add_category(&name) {
            tracing::debug!(name, "category already exists");
        }
        true
    }

    pub fn apply_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::None => {}
            EditorAction::Save(habit) => {
                let editing = self.editor.as_ref().and_then(|d| d.editing_id());
                match editing {
                    Some(_) => self.tracker.edit_habit(habit),
                    None => {
                        self.tracker.add_habit(habit);
                    }
                }
                self.editor = None;
            }
            EditorAction::Cancel => self.editor = None,
        }
    }

    pub fn apply_todo_action(&mut self, action: TodoAction) {
        match action {
            TodoAction::None => {}
            TodoAction::Add { text, points } => {
                self.tracker.add_todo(&text, points);
            }
            TodoAction::Toggle(id) => self.tracker.toggle_todo(id),
            TodoAction::Delete(id) => self.tracker.delete_todo(id),
        }
    }
}

impl eframe::App for HabitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);
        let now = Instant::now();

        // Top panel: app bar and view switcher
        egui::TopBottomPanel::top("app_bar")
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui::toolbar::show_app_bar(self, ui);
                ui.add_space(6.0);
                ui::toolbar::show_nav(self, ui);
            });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let status = self.tracker.notification(now).unwrap_or("Ready");
                    ui.label(
                        egui::RichText::new(status)
                            .size(10.5)
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let done = self.tracker.habits.iter().filter(|h| h.is_completed()).count();
                        ui.label(
                            egui::RichText::new(format!(
                                "Habits: {}/{} done",
                                done,
                                self.tracker.habits.len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Right panel: habit editor
        if self.view == View::Habits {
            let mut editor_action = EditorAction::None;
            if let Some(draft) = self.editor.as_mut() {
                let category = self.tracker.active_category.clone();
                egui::SidePanel::right("habit_editor")
                    .exact_width(ui::theme::EDITOR_WIDTH)
                    .resizable(false)
                    .frame(
                        egui::Frame::default()
                            .fill(ui::theme::BG_PANEL)
                            .inner_margin(egui::Margin::same(8.0))
                            .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
                    )
                    .show(ctx, |ui| {
                        editor_action = ui::habit_editor::show_habit_editor(draft, &category, ui);
                    });
            }
            self.apply_editor_action(editor_action);
        }

        let content_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(8.0));
        egui::CentralPanel::default().frame(content_frame).show(ctx, |ui| match self.view {
            View::Habits => {
                let action = ui::habit_list::show_habit_list(&self.tracker, ui);
                self.apply_habit_action(action, now);
            }
            View::Todo => {
                let action =
                    ui::todo_list::show_todo_list(&self.tracker.todos, &mut self.todo_input, ui);
                self.apply_todo_action(action);
            }
            View::Calendar => {
                if let Some(calendar) = self.calendar.as_mut() {
                    calendar.show(ui);
                }
            }
        });

        // Dialogs
        if self.show_add_category {
            ui::dialogs::show_add_category_dialog(self, ctx);
        }
        if self.category_to_delete.is_some() {
            ui::dialogs::show_delete_category_dialog(self, ctx);
        }
        if self.habit_to_delete.is_some() {
            ui::dialogs::show_delete_habit_dialog(self, ctx);
        }

        if self.tracker.expire(now) {
            ctx.request_repaint_after(FLASH_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Habit, HabitFilter};
    use pretty_assertions::assert_eq;

    fn app() -> HabitApp {
        HabitApp::with_settings(AppSettings::default())
    }

    #[test]
    fn calendar_lives_only_while_shown() {
        let mut app = app();
        assert!(app.calendar.is_none());

        app.set_view(View::Calendar);
        assert!(app.calendar.is_some());
        assert_eq!(app.title(), "Calendar");

        app.set_view(View::Todo);
        assert!(app.calendar.is_none());
        assert_eq!(app.title(), "Todo");
    }

    #[test]
    fn title_follows_the_habit_filter() {
        let mut app = app();
        assert_eq!(app.title(), "All Habits");
        app.apply_habit_action(HabitListAction::SetFilter(HabitFilter::Ongoing), Instant::now());
        assert_eq!(app.title(), "On-going Habits");
    }

    #[test]
    fn delete_waits_for_confirmation() {
        let mut app = app();
        let id = app.tracker.habits[0].id;
        app.apply_habit_action(HabitListAction::Delete(id), Instant::now());
        assert_eq!(app.habit_to_delete, Some(id));
        assert!(app.tracker.habit(id).is_some());

        app.apply_habit_action(HabitListAction::DeleteCategory("Study".into()), Instant::now());
        assert_eq!(app.category_to_delete.as_deref(), Some("Study"));
        assert!(app.tracker.categories.iter().any(|c| c == "Study"));
    }

    #[test]
    fn blank_category_name_keeps_the_dialog_open() {
        let mut app = app();
        app.show_add_category = true;
        app.new_category_name = "   ".into();
        assert!(!app.submit_category());
        assert_eq!(app.tracker.categories.len(), 3);

        app.new_category_name = "Daily".into();
        assert!(app.submit_category());
        assert_eq!(app.tracker.categories.len(), 3);

        app.new_category_name = " Work ".into();
        assert!(app.submit_category());
        assert_eq!(app.tracker.active_category, "Work");
        assert!(app.new_category_name.is_empty());
    }

    #[test]
    fn editor_adds_then_edits() {
        let mut app = app();
        app.apply_habit_action(HabitListAction::Add, Instant::now());
        assert!(app.editor.is_some());
        app.apply_editor_action(EditorAction::Save(Habit::new("Walk", "🚶", "Daily")));
        assert!(app.editor.is_none());
        let walk = app.tracker.habits.iter().find(|h| h.text == "Walk").unwrap().clone();

        app.apply_habit_action(HabitListAction::Edit(walk.id), Instant::now());
        let mut renamed = walk.clone();
        renamed.text = "Long walk".into();
        app.apply_editor_action(EditorAction::Save(renamed));
        assert_eq!(app.tracker.habit(walk.id).unwrap().text, "Long walk");
        assert_eq!(app.tracker.habits.len(), 4);
    }

    #[test]
    fn stats_posts_a_notification() {
        let mut app = app();
        let now = Instant::now();
        let id = app.tracker.habits[0].id;
        app.apply_habit_action(HabitListAction::Stats(id), now);
        assert_eq!(
            app.tracker.notification(now),
            Some("🏃 Exercise: 3/10 today, 0.3 coins each")
        );
    }

    #[test]
    fn leaving_habits_closes_the_editor() {
        let mut app = app();
        app.apply_habit_action(HabitListAction::Add, Instant::now());
        app.set_view(View::Todo);
        assert!(app.editor.is_none());

        app.apply_todo_action(TodoAction::Add {
            text: "Buy milk".into(),
            points: 1.0,
        });
        assert_eq!(app.tracker.todos.len(), 1);
    }
}
