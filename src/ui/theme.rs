use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_ROW_EVEN: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 6);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);
pub const BG_WEEKEND: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 4);
pub const BG_TODAY: Color32 = Color32::from_rgba_premultiplied(0, 60, 120, 40);
pub const BG_COMPLETED: Color32 = Color32::from_rgb(28, 44, 36);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(90, 140, 220);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const COIN: Color32 = Color32::from_rgb(255, 193, 7);
pub const COIN_GAIN: Color32 = Color32::from_rgb(52, 168, 83);
pub const DANGER: Color32 = Color32::from_rgb(229, 57, 53);
pub const NOW_LINE: Color32 = Color32::from_rgb(240, 75, 75);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);
pub const GRID_LINE_HALF: Color32 = Color32::from_rgb(34, 36, 46);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const HEADER_HEIGHT: f32 = 44.0;
pub const TIME_GUTTER_WIDTH: f32 = 64.0;
pub const STATUS_BAR_HEIGHT: f32 = 22.0;
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const EDITOR_WIDTH: f32 = 280.0;
pub const ROW_HEIGHT: f32 = 44.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_title() -> FontId {
    FontId::proportional(16.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 28); // TextEdit bg
    visuals.faint_bg_color = BG_ROW_EVEN;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 54, 68);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 62, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
