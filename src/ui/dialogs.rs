use crate::app::HabitApp;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};
use std::time::Instant;

const DIALOG_WIDTH: f32 = 320.0;

/// Render the "Add Category" dialog.
pub fn show_add_category_dialog(app: &mut HabitApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Add Category").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            let edit = ui.add_sized(
                [ui.available_width(), 24.0],
                egui::TextEdit::singleline(&mut app.new_category_name)
                    .hint_text("Category name..."),
            );
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let add_btn = egui::Button::new(RichText::new("Add").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if (ui.add_sized([80.0, 28.0], add_btn).clicked() || submitted)
                    && app.submit_category()
                {
                    should_close = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_category = false;
        app.new_category_name.clear();
    }
}

/// Ask before deleting a category along with its habits.
pub fn show_delete_category_dialog(app: &mut HabitApp, ctx: &Context) {
    let Some(category) = app.category_to_delete.clone() else {
        return;
    };
    let message = format!(
        "This will also delete all habits in the \"{}\" category.",
        category
    );
    match confirm(ctx, "delete_category", &message) {
        Some(true) => {
            app.tracker.delete_category(&category);
            app.tracker
                .notify(format!("Deleted category {}", category), Instant::now());
            app.category_to_delete = None;
        }
        Some(false) => app.category_to_delete = None,
        None => {}
    }
}

/// Ask before deleting a habit.
pub fn show_delete_habit_dialog(app: &mut HabitApp, ctx: &Context) {
    let Some(id) = app.habit_to_delete else {
        return;
    };
    match confirm(ctx, "delete_habit", "Are you sure you want to delete this habit?") {
        Some(true) => {
            app.tracker.delete_habit(id);
            app.habit_to_delete = None;
        }
        Some(false) => app.habit_to_delete = None,
        None => {}
    }
}

/// Modal yes/no prompt. `Some(true)` on confirm, `Some(false)` on cancel or
/// Escape, `None` while still open.
fn confirm(ctx: &Context, id: &str, message: &str) -> Option<bool> {
    let mut answer = None;
    Window::new(RichText::new("Are you sure?").strong().size(14.0))
        .id(egui::Id::new(("confirm", id)))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(theme::TEXT_SECONDARY));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let delete_btn = egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(theme::DANGER)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], delete_btn).clicked() {
                    answer = Some(true);
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    answer = Some(false);
                }
            });
            ui.add_space(2.0);
        });

    if answer.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer = Some(false);
    }
    answer
}
