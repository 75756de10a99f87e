use crate::model::{HabitFilter, Tracker};
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use uuid::Uuid;

/// Actions that the habit list can request.
#[derive(Debug, Clone, PartialEq)]
pub enum HabitListAction {
    None,
    SelectCategory(String),
    AddCategory,
    DeleteCategory(String),
    ToggleShowCompleted,
    SetFilter(HabitFilter),
    Complete(Uuid),
    Reset(Uuid),
    Edit(Uuid),
    Delete(Uuid),
    Stats(Uuid),
    Add,
}

/// Render the category bar and the habits of the active category.
pub fn show_habit_list(tracker: &Tracker, ui: &mut Ui) -> HabitListAction {
    let mut action = HabitListAction::None;

    ui.add_space(4.0);
    show_category_bar(tracker, ui, &mut action);
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(2.0);

    let habits = tracker.visible_habits();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 40.0).max(0.0))
        .show(ui, |ui| {
            if habits.is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No habits here yet").color(theme::TEXT_DIM));
                });
            }

            for (i, habit) in habits.iter().enumerate() {
                let completed = habit.is_completed();
                let row_bg = if completed {
                    theme::BG_COMPLETED
                } else if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };

                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(6.0),
                    inner_margin: egui::Margin::symmetric(10.0, 6.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
                    shadow: egui::epaint::Shadow::NONE,
                };

                let frame_resp = frame.show(ui, |ui| {
                    ui.set_min_height(theme::ROW_HEIGHT - 12.0);
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 8.0;
                        ui.label(RichText::new(&habit.icon).size(20.0));

                        ui.vertical(|ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(&habit.text).size(13.0).color(if completed {
                                        theme::TEXT_SECONDARY
                                    } else {
                                        theme::TEXT_PRIMARY
                                    }),
                                )
                                .truncate(),
                            );
                            ui.label(
                                RichText::new(format!("💰 {:.1}", habit.coins))
                                    .size(10.0)
                                    .color(theme::COIN),
                            );
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "{}/{}",
                                        habit.daily_completions, habit.target_completions
                                    ))
                                    .size(11.0)
                                    .color(theme::TEXT_SECONDARY),
                                );
                                let fill = if completed { theme::COIN_GAIN } else { theme::ACCENT };
                                ui.add(
                                    egui::ProgressBar::new(habit.progress())
                                        .desired_width(64.0)
                                        .fill(fill)
                                        .rounding(egui::Rounding::same(3.0)),
                                );
                            },
                        );
                    });
                });

                // Whole row completes on click, right click opens the menu.
                let row_click = ui.interact(
                    frame_resp.response.rect,
                    egui::Id::new(("habit-row", habit.id)),
                    egui::Sense::click(),
                );
                if row_click.clicked() {
                    action = HabitListAction::Complete(habit.id);
                }
                row_click.context_menu(|ui| {
                    if ui.button(format!("{}  Delete", egui_phosphor::regular::TRASH)).clicked() {
                        action = HabitListAction::Delete(habit.id);
                        ui.close_menu();
                    }
                    if ui.button(format!("{}  Edit", egui_phosphor::regular::PENCIL_SIMPLE)).clicked() {
                        action = HabitListAction::Edit(habit.id);
                        ui.close_menu();
                    }
                    if ui.button(format!("{}  Stats", egui_phosphor::regular::CHART_BAR)).clicked() {
                        action = HabitListAction::Stats(habit.id);
                        ui.close_menu();
                    }
                    if ui
                        .button(format!("{}  Reset", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE))
                        .clicked()
                    {
                        action = HabitListAction::Reset(habit.id);
                        ui.close_menu();
                    }
                });

                ui.add_space(3.0);
            }
        });

    ui.add_space(6.0);
    let btn = egui::Button::new(
        RichText::new(format!("{}  Add Habit", egui_phosphor::regular::PLUS))
            .color(Color32::WHITE)
            .size(12.0),
    )
    .fill(theme::ACCENT)
    .rounding(egui::Rounding::same(5.0));
    if ui.add_sized([ui.available_width(), 30.0], btn).clicked() {
        action = HabitListAction::Add;
    }

    action
}

fn show_category_bar(tracker: &Tracker, ui: &mut Ui, action: &mut HabitListAction) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for category in &tracker.categories {
            let active = *category == tracker.active_category;
            let button = egui::Button::new(RichText::new(category).size(12.0).color(if active {
                Color32::WHITE
            } else {
                theme::TEXT_SECONDARY
            }))
            .fill(if active { theme::ACCENT } else { theme::BG_HEADER })
            .rounding(egui::Rounding::same(12.0));
            if ui.add(button).clicked() && !active {
                *action = HabitListAction::SelectCategory(category.clone());
            }
            let delete = ui.add(
                egui::Button::new(RichText::new("×").size(11.0).color(theme::TEXT_DIM)).frame(false),
            );
            if delete.on_hover_text("Delete category").clicked() {
                *action = HabitListAction::DeleteCategory(category.clone());
            }
        }

        if ui
            .button(egui_phosphor::regular::PLUS)
            .on_hover_text("Add category")
            .clicked()
        {
            *action = HabitListAction::AddCategory;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button(egui_phosphor::regular::FUNNEL, |ui| {
                for filter in HabitFilter::all() {
                    if ui.radio(tracker.filter == *filter, filter.label()).clicked() {
                        *action = HabitListAction::SetFilter(*filter);
                        ui.close_menu();
                    }
                }
            });

            let eye = if tracker.show_completed {
                egui_phosphor::regular::EYE
            } else {
                egui_phosphor::regular::EYE_SLASH
            };
            let hint = if tracker.show_completed {
                "Hide completed"
            } else {
                "Show completed"
            };
            if ui.button(eye).on_hover_text(hint).clicked() {
                *action = HabitListAction::ToggleShowCompleted;
            }
        });
    });
}
