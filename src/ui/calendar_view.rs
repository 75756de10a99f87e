use crate::config::CalendarConfig;
use crate::model::clock::{TimeIndicator, TimeSource, ZonedClock};
use crate::model::{CalendarScroll, PageDirection, TimelineGeometry};
use crate::ui::theme;
use chrono::{Datelike, NaiveDate, Weekday};
use egui::{Align2, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, UiBuilder, Vec2};
use std::time::Instant;

const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const GUTTER_WIDTH: f32 = theme::TIME_GUTTER_WIDTH;

/// The scrolling day-by-day calendar. Lives only while the calendar view
/// is shown: dropping it stops the "now" marker refresh.
pub struct CalendarView {
    scroll: CalendarScroll,
    indicator: TimeIndicator,
    clock: Box<dyn TimeSource>,
    /// Date chosen in the sidebar month picker.
    picked: NaiveDate,
}

impl CalendarView {
    pub fn new(config: &CalendarConfig) -> Self {
        let tz = config.tz().unwrap_or_else(|e| {
            tracing::warn!("{e}, falling back to Asia/Kolkata");
            chrono_tz::Asia::Kolkata
        });
        Self::with_clock(config, Box::new(ZonedClock::new(tz)))
    }

    pub fn with_clock(config: &CalendarConfig, clock: Box<dyn TimeSource>) -> Self {
        let today = clock.today();
        tracing::debug!(%today, "calendar mounted");
        Self {
            scroll: CalendarScroll::new(today, config.clone()),
            indicator: TimeIndicator::new(config.hour_height),
            clock,
            picked: today,
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let now = Instant::now();
        let today = self.clock.today();
        self.indicator.tick(now, self.clock.as_ref());

        egui::SidePanel::left("calendar-sidebar")
            .resizable(false)
            .exact_width(theme::SIDEBAR_WIDTH)
            .show_inside(ui, |ui| self.show_sidebar(ui));

        self.show_nav_bar(ui, today, now);
        ui.add_space(4.0);

        let area = ui.available_rect_before_wrap();
        if area.width() <= GUTTER_WIDTH || area.height() <= HEADER_HEIGHT {
            return;
        }
        let header_rect = Rect::from_min_max(
            Pos2::new(area.left() + GUTTER_WIDTH, area.top()),
            Pos2::new(area.right(), area.top() + HEADER_HEIGHT),
        );
        let gutter_rect = Rect::from_min_max(
            Pos2::new(area.left(), area.top() + HEADER_HEIGHT),
            Pos2::new(area.left() + GUTTER_WIDTH, area.bottom()),
        );
        let body_rect = Rect::from_min_max(
            Pos2::new(area.left() + GUTTER_WIDTH, area.top() + HEADER_HEIGHT),
            area.max,
        );

        self.handle_paging_wheel(ui, body_rect, now);

        let forced = self.scroll.prepare_frame(now);
        let vertical_offset = ui
            .allocate_new_ui(UiBuilder::new().max_rect(body_rect), |ui| {
                self.show_body(ui, forced, today, now)
            })
            .inner;

        // Header and gutter are painted after the body so they use the
        // offsets measured this frame.
        draw_header(
            &ui.painter_at(header_rect),
            header_rect,
            &self.scroll,
            today,
        );
        draw_hour_gutter(
            &ui.painter_at(gutter_rect),
            gutter_rect,
            self.scroll.geometry(),
            vertical_offset,
        );
        ui.advance_cursor_after_rect(area);

        let extended = self.scroll.settle(now);
        if !extended.is_empty() {
            tracing::debug!(?extended, days = self.scroll.window().len(), "loaded more days");
        }

        let mut wake = self.indicator.until_next(now);
        if let Some(d) = self.scroll.next_wake(now) {
            wake = wake.min(d);
        }
        ui.ctx().request_repaint_after(wake);
    }

    fn show_sidebar(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.label(RichText::new("Go to date").strong().color(theme::TEXT_PRIMARY));
        ui.add_space(4.0);
        let response = ui.add(
            egui_extras::DatePickerButton::new(&mut self.picked)
                .id_salt("calendar-mini-picker")
                .calendar_week(false),
        );
        if response.changed() {
            // Only the focus marker moves; the grid keeps its position.
            self.scroll.select_date(self.picked);
        }
        ui.add_space(8.0);
        if let Some(focus) = self.scroll.focus() {
            ui.label(
                RichText::new(format!("Focused: {}", focus.format("%a %d %b %Y")))
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
            );
        }
    }

    fn show_nav_bar(&mut self, ui: &mut Ui, today: NaiveDate, now: Instant) {
        ui.horizontal(|ui| {
            let label = self
                .scroll
                .displayed_month()
                .map(|m| m.label())
                .unwrap_or_default();
            ui.label(RichText::new(label).font(theme::font_title()).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui_phosphor::regular::CARET_RIGHT)
                    .on_hover_text("Next days")
                    .clicked()
                {
                    self.scroll.page(PageDirection::Right, now);
                }
                if ui.button("Today").clicked() {
                    self.scroll.jump_to_today(today, now);
                }
                if ui
                    .button(egui_phosphor::regular::CARET_LEFT)
                    .on_hover_text("Previous days")
                    .clicked()
                {
                    self.scroll.page(PageDirection::Left, now);
                }
                ui.label(
                    RichText::new("Shift+Scroll to step one day")
                        .size(10.0)
                        .color(theme::TEXT_DIM),
                );
            });
        });
    }

    /// Shift+wheel over the grid pages one column at a time instead of
    /// scrolling freely.
    fn handle_paging_wheel(&mut self, ui: &mut Ui, body_rect: Rect, now: Instant) {
        if !ui.rect_contains_pointer(body_rect) || !ui.input(|i| i.modifiers.shift) {
            return;
        }
        let delta = ui.input_mut(|i| {
            let delta = i.raw_scroll_delta;
            i.raw_scroll_delta = Vec2::ZERO;
            i.smooth_scroll_delta = Vec2::ZERO;
            delta
        });
        // Shift may already have turned the wheel into horizontal motion.
        let amount = if delta.x.abs() > delta.y.abs() {
            delta.x
        } else {
            delta.y
        };
        // Wheel down (negative) heads towards later days.
        self.scroll.wheel(-amount, now);
    }

    /// Draw the scrollable grid and report its measured state. Returns the
    /// vertical scroll offset.
    fn show_body(&mut self, ui: &mut Ui, forced: Option<f32>, today: NaiveDate, now: Instant) -> f32 {
        let geometry = *self.scroll.geometry();
        let content = Vec2::new(self.scroll.content_width(), geometry.day_height());

        let mut area = egui::ScrollArea::both()
            .id_salt("calendar-body")
            .auto_shrink([false, false]);
        if let Some(offset) = forced {
            area = area.horizontal_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(content, Sense::hover());
            let origin = response.rect.min;
            let visible = ui.clip_rect();
            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            let first = geometry
                .x_to_index((visible.left() - origin.x).max(0.0))
                .unwrap_or(0);
            let last = geometry
                .x_to_index((visible.right() - origin.x).max(0.0))
                .unwrap_or(0);

            for index in first..=last {
                let Some(date) = self.scroll.window().get(index) else {
                    continue;
                };
                let column = Rect::from_min_size(
                    Pos2::new(origin.x + geometry.index_to_x(index), origin.y),
                    Vec2::new(geometry.column_width, content.y),
                );
                draw_day_column(&painter, column, &geometry, date, today, self.scroll.focus());
            }

            // The "now" marker spans every visible column.
            let y = origin.y + self.indicator.position();
            painter.line_segment(
                [Pos2::new(visible.left(), y), Pos2::new(visible.right(), y)],
                Stroke::new(1.5, theme::NOW_LINE),
            );
            if let Some(index) = self.scroll.window().index_of(today) {
                let x = origin.x + geometry.index_to_x(index);
                painter.circle_filled(Pos2::new(x, y), 4.0, theme::NOW_LINE);
            }
        });

        self.scroll
            .on_scroll(output.state.offset.x, output.inner_rect.width(), now);
        output.state.offset.y
    }
}

fn draw_day_column(
    painter: &egui::Painter,
    column: Rect,
    geometry: &TimelineGeometry,
    date: NaiveDate,
    today: NaiveDate,
    focus: Option<NaiveDate>,
) {
    if date == today {
        painter.rect_filled(column, 0.0, theme::BG_TODAY);
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        painter.rect_filled(column, 0.0, theme::BG_WEEKEND);
    }

    for hour in 0..24 {
        let y = column.top() + hour as f32 * geometry.hour_height;
        painter.line_segment(
            [Pos2::new(column.left(), y), Pos2::new(column.right(), y)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        let half = y + geometry.hour_height / 2.0;
        painter.line_segment(
            [Pos2::new(column.left(), half), Pos2::new(column.right(), half)],
            Stroke::new(0.5, theme::GRID_LINE_HALF),
        );
    }

    painter.line_segment(
        [column.left_top(), column.left_bottom()],
        Stroke::new(0.5, theme::BORDER_SUBTLE),
    );

    if focus == Some(date) {
        painter.rect_stroke(
            column.shrink(1.5),
            Rounding::same(3.0),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }
}

fn draw_header(painter: &egui::Painter, rect: Rect, scroll: &CalendarScroll, today: NaiveDate) {
    painter.rect_filled(rect, 0.0, theme::BG_HEADER);
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let geometry = scroll.geometry();
    let offset = scroll.header_offset();
    let Some(first) = geometry.x_to_index(offset.max(0.0)) else {
        return;
    };
    let last = geometry
        .x_to_index(offset + rect.width())
        .unwrap_or(first);

    for index in first..=last {
        let Some(date) = scroll.window().get(index) else {
            continue;
        };
        let x = rect.left() + geometry.index_to_x(index) - offset;

        painter.line_segment(
            [Pos2::new(x, rect.top() + 6.0), Pos2::new(x, rect.bottom())],
            Stroke::new(0.5, theme::GRID_LINE),
        );

        let is_today = date == today;
        let weekday_color = if is_today {
            theme::ACCENT
        } else {
            theme::TEXT_SECONDARY
        };
        painter.text(
            Pos2::new(x + 8.0, rect.top() + 12.0),
            Align2::LEFT_CENTER,
            date.format("%a").to_string().to_uppercase(),
            theme::font_small(),
            weekday_color,
        );

        let day_text = if date.day() == 1 {
            date.format("%d %b").to_string()
        } else {
            date.format("%d").to_string()
        };
        if is_today {
            painter.rect_filled(
                Rect::from_min_size(
                    Pos2::new(x + 4.0, rect.top() + 20.0),
                    Vec2::new(if date.day() == 1 { 52.0 } else { 26.0 }, 18.0),
                ),
                Rounding::same(9.0),
                theme::ACCENT,
            );
        }
        painter.text(
            Pos2::new(x + 8.0, rect.top() + 29.0),
            Align2::LEFT_CENTER,
            day_text,
            theme::font_header(),
            if is_today {
                egui::Color32::WHITE
            } else {
                theme::TEXT_PRIMARY
            },
        );
    }
}

fn draw_hour_gutter(painter: &egui::Painter, rect: Rect, geometry: &TimelineGeometry, offset: f32) {
    painter.rect_filled(rect, 0.0, theme::BG_PANEL);
    for hour in 0..24 {
        let y = rect.top() + hour as f32 * geometry.hour_height - offset;
        if y < rect.top() - geometry.hour_height || y > rect.bottom() {
            continue;
        }
        painter.text(
            Pos2::new(rect.right() - 8.0, y + 4.0),
            Align2::RIGHT_TOP,
            format!("{:02}:00", hour),
            theme::font_sub(),
            theme::TEXT_DIM,
        );
    }
}
