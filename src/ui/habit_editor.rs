use crate::model::Habit;
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use uuid::Uuid;

/// Actions the editor can request.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    None,
    Save(Habit),
    Cancel,
}

/// Form state of the add/edit habit panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitDraft {
    /// Habit being edited, `None` when adding.
    editing: Option<Habit>,
    pub text: String,
    pub icon: String,
    pub coins: f64,
    pub penalty: f64,
    pub target_completions: u32,
}

impl Default for HabitDraft {
    fn default() -> Self {
        Self {
            editing: None,
            text: String::new(),
            icon: "⭐".to_string(),
            coins: 0.1,
            penalty: 0.0,
            target_completions: 1,
        }
    }
}

impl HabitDraft {
    pub fn edit(habit: &Habit) -> Self {
        Self {
            editing: Some(habit.clone()),
            text: habit.text.clone(),
            icon: habit.icon.clone(),
            coins: habit.coins,
            penalty: habit.penalty,
            target_completions: habit.target_completions,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing.as_ref().map(|h| h.id)
    }

    /// Build the habit to store, or `None` while the name is blank. Edits
    /// keep the id, category and today's completions of the original.
    pub fn to_habit(&self, category: &str) -> Option<Habit> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        let icon = match self.icon.trim() {
            "" => "⭐",
            icon => icon,
        };
        let mut habit = match &self.editing {
            Some(original) => original.clone(),
            None => Habit::new(text, icon, category),
        };
        habit.text = text.to_string();
        habit.icon = icon.to_string();
        habit.coins = self.coins.max(0.0);
        habit.penalty = self.penalty.max(0.0);
        habit.target_completions = self.target_completions.max(1);
        Some(habit)
    }
}

/// Render the add/edit habit panel.
pub fn show_habit_editor(draft: &mut HabitDraft, category: &str, ui: &mut Ui) -> EditorAction {
    let mut action = EditorAction::None;

    ui.add_space(6.0);
    ui.label(
        RichText::new(if draft.is_edit() { "Edit Habit" } else { "New Habit" })
            .strong()
            .size(13.0)
            .color(theme::TEXT_PRIMARY),
    );
    if !draft.is_edit() {
        ui.label(
            RichText::new(format!("Adds to {}", category))
                .size(10.0)
                .color(theme::TEXT_DIM),
        );
    }
    ui.add_space(4.0);

    let frame = egui::Frame {
        fill: theme::BG_DARK,
        rounding: egui::Rounding::same(6.0),
        inner_margin: egui::Margin::same(10.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    frame.show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 6.0;

        field_label(ui, "Name");
        ui.add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(&mut draft.text).hint_text("Habit name..."),
        );

        field_label(ui, "Icon");
        ui.add_sized(
            [48.0, 24.0],
            egui::TextEdit::singleline(&mut draft.icon).char_limit(4),
        );

        egui::Grid::new("habit_editor_numbers")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                field_label(ui, "Coins");
                ui.add(
                    egui::DragValue::new(&mut draft.coins)
                        .speed(0.1)
                        .range(0.0..=100.0)
                        .fixed_decimals(1),
                );
                ui.end_row();

                field_label(ui, "Penalty");
                ui.add(
                    egui::DragValue::new(&mut draft.penalty)
                        .speed(0.1)
                        .range(0.0..=100.0)
                        .fixed_decimals(1),
                );
                ui.end_row();

                field_label(ui, "Daily target");
                ui.add(egui::DragValue::new(&mut draft.target_completions).range(1..=100));
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let habit = draft.to_habit(category);
            let save_btn = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(4.0));
            if ui
                .add_enabled_ui(habit.is_some(), |ui| ui.add_sized([80.0, 28.0], save_btn))
                .inner
                .clicked()
            {
                if let Some(habit) = habit {
                    action = EditorAction::Save(habit);
                }
            }
            if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                action = EditorAction::Cancel;
            }
        });
    });

    action
}

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::TEXT_DIM).strong());
}
