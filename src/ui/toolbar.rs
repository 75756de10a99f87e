use crate::app::{HabitApp, View};
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use std::time::Instant;

/// Render the app bar: settings, title, coin total and profile.
pub fn show_app_bar(app: &mut HabitApp, ui: &mut Ui) {
    let now = Instant::now();
    ui.horizontal(|ui| {
        ui.add_enabled(
            false,
            egui::Button::new(RichText::new(egui_phosphor::regular::GEAR).size(16.0)).frame(false),
        )
        .on_disabled_hover_text("Settings");

        ui.label(
            RichText::new(app.title())
                .font(theme::font_title())
                .strong()
                .color(theme::TEXT_PRIMARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_enabled(
                false,
                egui::Button::new(RichText::new(egui_phosphor::regular::USER).size(16.0))
                    .frame(false),
            )
            .on_disabled_hover_text("Profile");

            if let Some(gained) = app.tracker.last_increment(now) {
                ui.label(
                    RichText::new(format!("+{:.1}", gained))
                        .size(12.0)
                        .strong()
                        .color(theme::COIN_GAIN),
                );
            }
            ui.label(
                RichText::new(format!("💰 {:.1}", app.tracker.total_coins))
                    .size(14.0)
                    .strong()
                    .color(theme::COIN),
            );
        });
    });
}

/// Render the HABITS / TODO / CALENDAR switcher.
pub fn show_nav(app: &mut HabitApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let width = ui.available_width() / View::all().len() as f32 - ui.spacing().item_spacing.x;
        for view in View::all() {
            let active = app.view == *view;
            let text = RichText::new(view.label()).size(12.0).strong().color(if active {
                Color32::WHITE
            } else {
                theme::TEXT_SECONDARY
            });
            let button = egui::Button::new(text)
                .fill(if active { theme::ACCENT } else { theme::BG_HEADER })
                .rounding(egui::Rounding::same(5.0));
            if ui.add_sized([width.max(60.0), 28.0], button).clicked() && !active {
                app.set_view(*view);
            }
        }
    });
}
