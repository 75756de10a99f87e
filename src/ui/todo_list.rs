use crate::model::Todo;
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use uuid::Uuid;

/// Actions that the todo list can request.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    None,
    Add { text: String, points: f64 },
    Toggle(Uuid),
    Delete(Uuid),
}

/// Input row state, kept by the app between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoInput {
    pub text: String,
    pub points: f64,
}

impl Default for TodoInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            points: 1.0,
        }
    }
}

/// Render the todo list with its add row.
pub fn show_todo_list(todos: &[Todo], input: &mut TodoInput, ui: &mut Ui) -> TodoAction {
    let mut action = TodoAction::None;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let edit = ui.add_sized(
            [ui.available_width() - 150.0, 26.0],
            egui::TextEdit::singleline(&mut input.text).hint_text("Add a task..."),
        );
        ui.add(
            egui::DragValue::new(&mut input.points)
                .speed(0.5)
                .range(0.0..=100.0)
                .fixed_decimals(1)
                .prefix("💰 "),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let add_btn = egui::Button::new(RichText::new("Add").color(Color32::WHITE))
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
        if (ui.add_sized([56.0, 26.0], add_btn).clicked() || submitted)
            && !input.text.trim().is_empty()
        {
            action = TodoAction::Add {
                text: std::mem::take(&mut input.text),
                points: input.points,
            };
        }
    });
    ui.add_space(6.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if todos.is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Nothing to do").color(theme::TEXT_DIM));
                });
            }
            for todo in todos {
                ui.horizontal(|ui| {
                    let mut done = todo.is_completed;
                    let text = if done {
                        RichText::new(&todo.text).strikethrough().color(theme::TEXT_DIM)
                    } else {
                        RichText::new(&todo.text).color(theme::TEXT_PRIMARY)
                    };
                    if ui.checkbox(&mut done, text).changed() {
                        action = TodoAction::Toggle(todo.id);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = ui.add(
                            egui::Button::new(
                                RichText::new(egui_phosphor::regular::TRASH).color(theme::TEXT_DIM),
                            )
                            .frame(false),
                        );
                        if delete.on_hover_text("Delete").clicked() {
                            action = TodoAction::Delete(todo.id);
                        }
                        ui.label(
                            RichText::new(format!("💰 {:.1}", todo.points))
                                .size(11.0)
                                .color(theme::COIN),
                        );
                    });
                });
                ui.add_space(2.0);
            }
        });

    action
}
