//! Scroll state machine behind the infinite calendar grid.
//!
//! The grid body scrolls horizontally over a [`DateWindow`] that grows by a
//! chunk whenever the view settles near either edge. The UI reports what it
//! measured after each layout pass ([`CalendarScroll::on_scroll`]) and asks at
//! the start of each frame whether the offset must be forced
//! ([`CalendarScroll::prepare_frame`]): that is where prepend compensation and
//! smooth-scroll animation are applied, before anything is painted.

use chrono::NaiveDate;
use std::time::{Duration, Instant};

use super::date_window::{DateWindow, Direction, DisplayedMonth};
use super::timeline::{TimelineGeometry, ViewportState};
use crate::config::CalendarConfig;

/// Offset changes smaller than this are layout noise, not scrolling.
const SCROLL_EPSILON: f32 = 0.5;

/// Distance from either content edge that triggers loading more days.
pub const EDGE_THRESHOLD: f32 = 1000.0;
/// Quiet period after the last scroll change before edges are checked.
pub const LOAD_DEBOUNCE: Duration = Duration::from_millis(150);
/// Minimum spacing between modifier-wheel steps.
pub const WHEEL_RATE_LIMIT: Duration = Duration::from_millis(100);
/// Columns moved by the paging buttons.
pub const PAGE_STEP: i64 = 4;
/// Columns moved by one modifier-wheel gesture.
pub const WHEEL_STEP: i64 = 1;

/// Horizontal paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Left,
    Right,
}

impl PageDirection {
    fn sign(self) -> i64 {
        match self {
            PageDirection::Left => -1,
            PageDirection::Right => 1,
        }
    }
}

/// Scroll position captured right before a backward extension.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Compensation {
    pre_width: f32,
    pre_offset: f32,
}

/// Eased scroll from one offset to another.
#[derive(Debug, Clone, Copy)]
struct ScrollTween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl ScrollTween {
    fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Keep moving from wherever the tween currently is towards a new target.
    fn retarget(&mut self, now: Instant, to: f32, duration: Duration) {
        *self = Self::new(self.sample(now), to, now, duration);
    }

    fn shift(&mut self, delta: f32) {
        self.from += delta;
        self.to += delta;
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// State of the horizontally scrolling calendar grid.
#[derive(Debug, Clone)]
pub struct CalendarScroll {
    config: CalendarConfig,
    geometry: TimelineGeometry,
    window: DateWindow,
    /// Last measured layout; `None` until the first layout pass.
    viewport: Option<ViewportState>,
    header_offset: f32,
    displayed: Option<DisplayedMonth>,
    /// Time of the last offset change not yet followed by an edge check.
    last_scroll: Option<Instant>,
    pending_forward: bool,
    pending_backward: Option<Compensation>,
    animation: Option<ScrollTween>,
    last_wheel_step: Option<Instant>,
    forced_offset: Option<f32>,
    focus: Option<NaiveDate>,
}

impl CalendarScroll {
    /// A grid centered on `today`, positioned so that today is the second
    /// visible column on the first frame.
    pub fn new(today: NaiveDate, config: CalendarConfig) -> Self {
        let geometry = TimelineGeometry::new(config.column_width, config.hour_height);
        let window = DateWindow::around(today);
        let mut scroll = Self {
            geometry,
            window,
            viewport: None,
            header_offset: 0.0,
            displayed: Some(DisplayedMonth::of(today)),
            last_scroll: None,
            pending_forward: false,
            pending_backward: None,
            animation: None,
            last_wheel_step: None,
            forced_offset: None,
            focus: None,
            config,
        };
        scroll.forced_offset = scroll.today_offset(today);
        scroll
    }

    pub fn geometry(&self) -> &TimelineGeometry {
        &self.geometry
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn viewport(&self) -> Option<ViewportState> {
        self.viewport
    }

    /// Offset the header row must be drawn at to line up with the body.
    pub fn header_offset(&self) -> f32 {
        self.header_offset
    }

    pub fn displayed_month(&self) -> Option<DisplayedMonth> {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_loading(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.pending_forward,
            Direction::Backward => self.pending_backward.is_some(),
        }
    }

    /// Width of the body for the current window.
    pub fn content_width(&self) -> f32 {
        self.geometry.content_width(self.window.len())
    }

    /// Date under the horizontal center of the viewport.
    pub fn centered_date(&self) -> Option<NaiveDate> {
        let index = self.viewport?.centered_index(&self.geometry)?;
        self.window.get(index)
    }

    /// Date highlighted by the month picker.
    pub fn focus(&self) -> Option<NaiveDate> {
        self.focus
    }

    /// Move the focus marker to `date`. This deliberately leaves the scroll
    /// position alone.
    pub fn select_date(&mut self, date: NaiveDate) {
        tracing::debug!(%date, "focus date selected");
        self.focus = Some(date);
    }

    /// Called at the start of every frame, before the body is laid out.
    /// Returns the offset the body must be forced to this frame, if any.
    pub fn prepare_frame(&mut self, now: Instant) -> Option<f32> {
        self.settle_layout();

        if let Some(tween) = self.animation {
            self.forced_offset = Some(tween.sample(now));
            if tween.is_done(now) {
                tracing::debug!(offset = tween.to, "scroll animation finished");
                self.animation = None;
            }
        }

        self.forced_offset.take()
    }

    /// Finish outstanding extensions against the width about to be laid out.
    fn settle_layout(&mut self) {
        self.pending_forward = false;

        let delta = self.pending_shift();
        let Some(comp) = self.pending_backward.take() else {
            return;
        };
        if delta > 0.0 {
            let offset = comp.pre_offset + delta;
            tracing::debug!(
                from = comp.pre_offset,
                to = offset,
                "compensating scroll offset after prepend"
            );
            self.forced_offset = Some(offset);
            if let Some(tween) = &mut self.animation {
                tween.shift(delta);
            }
        }
    }

    /// Report the body's measured scroll state after layout. Runs every
    /// frame; only actual offset changes count as scroll events.
    pub fn on_scroll(&mut self, offset: f32, viewport_width: f32, now: Instant) {
        if viewport_width <= 0.0 || !offset.is_finite() {
            return;
        }
        let previous = self.viewport.map(|v| v.offset);
        let viewport = ViewportState {
            offset,
            viewport_width,
            content_width: self.content_width(),
        };
        self.viewport = Some(viewport);

        let moved = previous.map_or(true, |p| (p - offset).abs() > SCROLL_EPSILON);
        if !moved {
            return;
        }

        self.header_offset = offset;
        self.last_scroll = Some(now);

        let Some(date) = viewport
            .centered_index(&self.geometry)
            .and_then(|index| self.window.get(index))
        else {
            return;
        };
        let month = DisplayedMonth::of(date);
        if self.displayed != Some(month) {
            tracing::debug!(month = %month.label(), "displayed month changed");
            self.displayed = Some(month);
        }
    }

    /// Once scrolling has been quiet for the debounce interval, check both
    /// edges and extend the window where the view is close to running out.
    /// Returns the directions that were extended.
    pub fn settle(&mut self, now: Instant) -> Vec<Direction> {
        let Some(last) = self.last_scroll else {
            return Vec::new();
        };
        if now.saturating_duration_since(last) < LOAD_DEBOUNCE {
            return Vec::new();
        }
        self.last_scroll = None;

        let Some(viewport) = self.viewport else {
            return Vec::new();
        };
        let threshold = EDGE_THRESHOLD;
        let mut extended = Vec::new();

        if viewport.distance_ahead() < threshold && !self.pending_forward {
            self.pending_forward = true;
            self.window.extend(Direction::Forward);
            extended.push(Direction::Forward);
        }

        if viewport.distance_behind() < threshold && self.pending_backward.is_none() {
            // Measured after any forward chunk above, which never shifts offsets.
            self.pending_backward = Some(Compensation {
                pre_width: self.content_width(),
                pre_offset: viewport.offset,
            });
            self.window.extend(Direction::Backward);
            extended.push(Direction::Backward);
        }

        extended
    }

    /// Page the grid by [`PAGE_STEP`] columns. Ignored while a previous
    /// animated scroll is still running.
    pub fn page(&mut self, direction: PageDirection, now: Instant) -> bool {
        if self.animation.is_some() {
            return false;
        }
        let Some(viewport) = self.viewport else {
            return false;
        };
        let steps = PAGE_STEP * direction.sign();
        let index = self.geometry.nearest_index(viewport.offset) + steps;
        tracing::debug!(?direction, index, "paging");
        self.animate_to(self.index_offset(index), now);
        true
    }

    /// Handle a modifier-held wheel gesture. At most one gesture per rate
    /// limit window moves the grid, by [`WHEEL_STEP`] columns, and none
    /// while an animated scroll is running. Positive `delta` moves towards
    /// later dates.
    pub fn wheel(&mut self, delta: f32, now: Instant) -> bool {
        if delta == 0.0 || !delta.is_finite() || self.animation.is_some() {
            return false;
        }
        if let Some(last) = self.last_wheel_step {
            if now.saturating_duration_since(last) < WHEEL_RATE_LIMIT {
                return false;
            }
        }
        let Some(viewport) = self.viewport else {
            return false;
        };
        self.last_wheel_step = Some(now);

        let direction = if delta > 0.0 {
            PageDirection::Right
        } else {
            PageDirection::Left
        };
        let steps = WHEEL_STEP * direction.sign();
        let index = self.geometry.nearest_index(viewport.offset) + steps;
        self.animate_to(self.index_offset(index), now);
        true
    }

    /// Animate so that `today` becomes the second visible column.
    pub fn jump_to_today(&mut self, today: NaiveDate, now: Instant) -> bool {
        let Some(target) = self.today_offset(today) else {
            tracing::debug!(%today, "today is outside the loaded window");
            return false;
        };
        if self.viewport.is_none() {
            self.forced_offset = Some(target);
            return true;
        }
        // Targets are in the coordinates of the last layout; an unapplied
        // prepend shifts the whole tween later.
        self.animate_to(target - self.pending_shift(), now);
        true
    }

    /// Offset correction the next frame will apply for a prepend that has
    /// not been laid out yet.
    fn pending_shift(&self) -> f32 {
        let Some(comp) = self.pending_backward else {
            return 0.0;
        };
        let delta = self.content_width() - comp.pre_width;
        if delta > 0.0 && comp.pre_offset < EDGE_THRESHOLD {
            delta
        } else {
            0.0
        }
    }

    fn today_offset(&self, today: NaiveDate) -> Option<f32> {
        let index = self.window.index_of(today)?;
        Some(self.geometry.index_to_x(index.saturating_sub(1)))
    }

    /// Pixel offset of a column index, clamped to the scrollable range.
    fn index_offset(&self, index: i64) -> f32 {
        let x = self.geometry.index_to_x(index.max(0) as usize);
        match self.viewport {
            Some(viewport) => x.min(viewport.max_offset()),
            None => x,
        }
    }

    fn animate_to(&mut self, target: f32, now: Instant) {
        let duration = self.config.scroll_animation();
        match &mut self.animation {
            Some(tween) => tween.retarget(now, target, duration),
            None => {
                let from = self.viewport.map_or(0.0, |v| v.offset);
                self.animation = Some(ScrollTween::new(from, target, now, duration));
            }
        }
    }

    /// How soon the UI should run another frame without new input.
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        if self.animation.is_some() || self.forced_offset.is_some() {
            return Some(Duration::ZERO);
        }
        if self.pending_forward || self.pending_backward.is_some() {
            return Some(Duration::ZERO);
        }
        self.last_scroll.map(|last| {
            (last + LOAD_DEBOUNCE).saturating_duration_since(now)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::date_window::CHUNK_SIZE;
    use pretty_assertions::assert_eq;

    const VIEWPORT: f32 = 1200.0;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// A grid around 2024-03-15 that has completed its first layout pass.
    fn mounted(t0: Instant) -> CalendarScroll {
        let mut scroll = CalendarScroll::new(ymd(2024, 3, 15), CalendarConfig::default());
        let offset = scroll.prepare_frame(t0).unwrap();
        scroll.on_scroll(offset, VIEWPORT, t0);
        scroll.settle(t0 + ms(200));
        scroll
    }

    /// Feed a user scroll to `offset` and let the frame loop settle it.
    fn scroll_to(scroll: &mut CalendarScroll, offset: f32, at: Instant) -> Vec<Direction> {
        scroll.prepare_frame(at);
        scroll.on_scroll(offset, VIEWPORT, at);
        scroll.settle(at + ms(150))
    }

    /// Run frames until the running animation has finished.
    fn finish_animation(scroll: &mut CalendarScroll, mut at: Instant) -> (f32, Instant) {
        let mut last = None;
        for _ in 0..100 {
            if let Some(offset) = scroll.prepare_frame(at) {
                scroll.on_scroll(offset, VIEWPORT, at);
                last = Some(offset);
            }
            if !scroll.is_animating() {
                break;
            }
            at += ms(16);
        }
        (last.unwrap(), at)
    }

    #[test]
    fn mounts_with_today_as_the_second_column() {
        let t0 = Instant::now();
        let scroll = mounted(t0);
        // Today is index 30; one prior day stays visible.
        assert_eq!(scroll.viewport().unwrap().offset, 29.0 * 200.0);
        assert_eq!(scroll.window().len(), 61);
        assert_eq!(
            scroll.displayed_month(),
            Some(DisplayedMonth { year: 2024, month: 3 })
        );
        assert!(!scroll.is_animating());
    }

    #[test]
    fn header_follows_the_body_on_every_scroll() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        scroll.on_scroll(6123.0, VIEWPORT, t0 + ms(300));
        assert_eq!(scroll.header_offset(), 6123.0);
        scroll.on_scroll(6130.0, VIEWPORT, t0 + ms(310));
        assert_eq!(scroll.header_offset(), 6130.0);
    }

    #[test]
    fn displayed_month_changes_only_on_boundary_crossings() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        // Window starts 2024-02-14; index 16 is 2024-03-01.
        let center_on = |index: f32| index * 200.0 + 100.0 - VIEWPORT / 2.0;

        scroll.on_scroll(center_on(16.0), VIEWPORT, t0 + ms(300));
        assert_eq!(scroll.centered_date(), Some(ymd(2024, 3, 1)));
        assert_eq!(scroll.displayed_month().unwrap().month, 3);

        scroll.on_scroll(center_on(15.0), VIEWPORT, t0 + ms(310));
        assert_eq!(scroll.centered_date(), Some(ymd(2024, 2, 29)));
        assert_eq!(
            scroll.displayed_month(),
            Some(DisplayedMonth { year: 2024, month: 2 })
        );
    }

    #[test]
    fn nearing_the_right_edge_loads_exactly_one_forward_chunk() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let last_before = scroll.window().last().unwrap();

        // 12200 wide; 10500 + 1200 leaves 500 px ahead.
        let at = t0 + ms(500);
        scroll.prepare_frame(at);
        scroll.on_scroll(10_500.0, VIEWPORT, at);

        // Nothing happens until scrolling has been quiet for 150 ms.
        assert!(scroll.settle(at + ms(100)).is_empty());
        assert_eq!(scroll.settle(at + ms(150)), vec![Direction::Forward]);
        assert!(scroll.is_loading(Direction::Forward));
        assert!(scroll.settle(at + ms(400)).is_empty());

        assert_eq!(scroll.window().len(), 61 + CHUNK_SIZE);
        let added = &scroll.window().dates()[61..];
        assert_eq!(added[0], last_before.succ_opt().unwrap());
        assert_eq!(added.len(), 30);

        // Forward loads never move the view.
        assert_eq!(scroll.prepare_frame(at + ms(420)), None);
        assert!(!scroll.is_loading(Direction::Forward));
    }

    #[test]
    fn debounce_restarts_on_every_scroll_change() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        scroll.on_scroll(10_400.0, VIEWPORT, at);
        scroll.on_scroll(10_450.0, VIEWPORT, at + ms(100));
        assert!(scroll.settle(at + ms(200)).is_empty());
        assert_eq!(scroll.settle(at + ms(250)), vec![Direction::Forward]);
    }

    #[test]
    fn backward_load_keeps_the_centered_date_in_place() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);

        let at = t0 + ms(500);
        scroll.prepare_frame(at);
        scroll.on_scroll(500.0, VIEWPORT, at);
        let centered_before = scroll.centered_date().unwrap();
        let width_before = scroll.content_width();

        assert_eq!(scroll.settle(at + ms(150)), vec![Direction::Backward]);
        assert!(scroll.is_loading(Direction::Backward));
        let width_after = scroll.content_width();
        assert_eq!(width_after - width_before, 30.0 * 200.0);

        let corrected = scroll.prepare_frame(at + ms(160)).unwrap();
        assert_eq!(corrected, 500.0 + (width_after - width_before));
        assert!(!scroll.is_loading(Direction::Backward));

        scroll.on_scroll(corrected, VIEWPORT, at + ms(160));
        assert_eq!(scroll.centered_date(), Some(centered_before));
    }

    #[test]
    fn both_edges_can_load_from_one_settle() {
        let t0 = Instant::now();
        let mut scroll = CalendarScroll::new(ymd(2024, 3, 15), CalendarConfig::default());
        scroll.prepare_frame(t0);
        // A viewport wider than the whole window is near both edges.
        scroll.on_scroll(200.0, 12_000.0, t0);
        assert_eq!(
            scroll.settle(t0 + ms(150)),
            vec![Direction::Forward, Direction::Backward]
        );
        assert_eq!(scroll.window().len(), 61 + 2 * CHUNK_SIZE);
    }

    #[test]
    fn page_right_snaps_to_four_columns_past_the_nearest() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        scroll_to(&mut scroll, 2010.0, at);
        let at = at + ms(200);

        assert!(scroll.page(PageDirection::Right, at));
        assert!(scroll.is_animating());
        let (offset, _) = finish_animation(&mut scroll, at);
        assert_eq!(offset, 2800.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn paging_is_ignored_while_animating() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        scroll_to(&mut scroll, 4000.0, at);

        assert!(scroll.page(PageDirection::Left, at + ms(200)));
        assert!(!scroll.page(PageDirection::Left, at + ms(250)));
        let (offset, done) = finish_animation(&mut scroll, at + ms(200));
        assert_eq!(offset, 3200.0);

        assert!(scroll.page(PageDirection::Left, done + ms(16)));
    }

    #[test]
    fn rapid_wheel_gestures_are_rate_limited() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        scroll_to(&mut scroll, 4000.0, at);
        let at = at + ms(200);

        assert!(scroll.wheel(1.0, at));
        assert!(!scroll.wheel(1.0, at + ms(30)));
        assert!(!scroll.wheel(1.0, at + ms(60)));
        assert!(!scroll.wheel(1.0, at + ms(99)));

        let (offset, _) = finish_animation(&mut scroll, at);
        assert_eq!(offset, 4200.0);
    }

    #[test]
    fn wheel_is_ignored_while_a_page_animation_runs() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        scroll_to(&mut scroll, 4000.0, at);
        let at = at + ms(200);

        assert!(scroll.page(PageDirection::Right, at));
        assert!(!scroll.wheel(1.0, at + ms(150)));
        let (offset, done) = finish_animation(&mut scroll, at);
        assert_eq!(offset, 4800.0);

        // The ignored gesture did not start a rate-limit window.
        assert!(scroll.wheel(1.0, done + ms(16)));
        let (offset, _) = finish_animation(&mut scroll, done + ms(16));
        assert_eq!(offset, 5000.0);
    }

    #[test]
    fn no_compensation_when_the_prepend_started_away_from_the_edge() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        scroll.pending_backward = Some(Compensation {
            pre_width: scroll.content_width(),
            pre_offset: EDGE_THRESHOLD,
        });
        scroll.window.extend(Direction::Backward);

        assert_eq!(scroll.prepare_frame(t0 + ms(300)), None);
        assert!(!scroll.is_loading(Direction::Backward));
    }

    #[test]
    fn prepend_during_a_page_animation_keeps_its_target_date() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        assert_eq!(scroll_to(&mut scroll, 960.0, at), vec![Direction::Backward]);

        // Nearest column 5, four back: column 1 of the old window.
        assert!(scroll.page(PageDirection::Left, at + ms(160)));
        let (offset, _) = finish_animation(&mut scroll, at + ms(160));
        assert_eq!(offset, 200.0 + 6000.0);
        assert_eq!(scroll.window().get(31), Some(ymd(2024, 2, 15)));
    }

    #[test]
    fn jump_to_today_right_after_a_prepend_lands_on_today() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        assert_eq!(scroll_to(&mut scroll, 960.0, at), vec![Direction::Backward]);

        let today = ymd(2024, 3, 15);
        assert!(scroll.jump_to_today(today, at + ms(160)));
        let (offset, _) = finish_animation(&mut scroll, at + ms(160));
        assert_eq!(scroll.window().index_of(today), Some(60));
        assert_eq!(offset, 59.0 * 200.0);
    }

    #[test]
    fn jump_to_today_shows_one_prior_day() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        let at = t0 + ms(500);
        scroll_to(&mut scroll, 9000.0, at);

        assert!(scroll.jump_to_today(ymd(2024, 3, 15), at + ms(200)));
        let (offset, _) = finish_animation(&mut scroll, at + ms(200));
        assert_eq!(offset, 5800.0);
        assert!(!scroll.jump_to_today(ymd(2030, 1, 1), at + ms(900)));
    }

    #[test]
    fn selecting_a_date_only_moves_the_focus_marker() {
        let t0 = Instant::now();
        let mut scroll = mounted(t0);
        scroll.select_date(ymd(2024, 3, 20));
        assert_eq!(scroll.focus(), Some(ymd(2024, 3, 20)));
        assert_eq!(scroll.prepare_frame(t0 + ms(300)), None);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn measurements_before_layout_are_ignored() {
        let t0 = Instant::now();
        let mut scroll = CalendarScroll::new(ymd(2024, 3, 15), CalendarConfig::default());
        scroll.on_scroll(100.0, 0.0, t0);
        assert_eq!(scroll.viewport(), None);
        assert_eq!(scroll.centered_date(), None);
        assert!(!scroll.page(PageDirection::Right, t0));
        assert!(!scroll.wheel(1.0, t0));
    }
}
