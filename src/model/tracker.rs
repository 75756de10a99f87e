use std::time::{Duration, Instant};
use uuid::Uuid;

use super::habit::{Habit, HabitFilter, Todo};

/// How long a toast notification stays up.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);
/// How long the "+coins" badge floats next to the total.
pub const INCREMENT_TTL: Duration = Duration::from_millis(1500);

/// Category created when the last one is deleted.
pub const FALLBACK_CATEGORY: &str = "Untitled";

/// A short-lived message with the time it was posted.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash<T> {
    pub value: T,
    pub posted: Instant,
}

impl<T> Flash<T> {
    fn new(value: T, posted: Instant) -> Self {
        Self { value, posted }
    }

    fn alive(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.posted) < ttl
    }
}

/// All in-memory habit, todo and coin state.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub habits: Vec<Habit>,
    pub todos: Vec<Todo>,
    pub categories: Vec<String>,
    pub active_category: String,
    pub total_coins: f64,
    pub show_completed: bool,
    pub filter: HabitFilter,
    last_increment: Option<Flash<f64>>,
    notification: Option<Flash<String>>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            todos: Vec::new(),
            categories: vec!["Daily".into(), "Health".into(), "Study".into()],
            active_category: "Daily".into(),
            total_coins: 10.0,
            show_completed: true,
            filter: HabitFilter::All,
            last_increment: None,
            notification: None,
        }
    }
}

impl Tracker {
    /// Starting state with a few example habits.
    pub fn sample() -> Self {
        let mut tracker = Self::default();

        let mut exercise = Habit::new("Exercise", "🏃", "Daily");
        exercise.coins = 0.3;
        exercise.penalty = 0.1;
        exercise.target_completions = 10;
        exercise.daily_completions = 3;

        let mut read = Habit::new("Read a book", "📚", "Study");
        read.coins = 0.5;
        read.penalty = 0.2;
        read.daily_completions = 1;

        let mut meditate = Habit::new("Meditate", "🧘", "Health");
        meditate.coins = 0.2;
        meditate.penalty = 0.1;

        tracker.habits = vec![exercise, read, meditate];
        tracker
    }

    // --- Habits ---

    /// Log one completion. Returns the coins earned, zero if the habit was
    /// already complete or does not exist.
    pub fn complete_habit(&mut self, id: Uuid, now: Instant) -> f64 {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return 0.0;
        };
        if habit.is_completed() {
            return 0.0;
        }
        habit.daily_completions += 1;
        let gained = habit.coins;
        if gained > 0.0 {
            self.total_coins += gained;
            self.last_increment = Some(Flash::new(gained, now));
        }
        tracing::debug!(habit = %habit.text, gained, total = self.total_coins, "habit completed");
        gained
    }

    /// Clear today's completions and take back the coins they earned.
    pub fn reset_habit(&mut self, id: Uuid) {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return;
        };
        let refund = habit.coins * habit.daily_completions as f64;
        habit.daily_completions = 0;
        if refund > 0.0 {
            self.total_coins -= refund;
        }
    }

    /// Add a habit to the active category.
    pub fn add_habit(&mut self, mut habit: Habit) -> Uuid {
        habit.id = Uuid::new_v4();
        habit.daily_completions = 0;
        habit.category = self.active_category.clone();
        let id = habit.id;
        self.habits.push(habit);
        id
    }

    /// Replace the habit with the same id.
    pub fn edit_habit(&mut self, updated: Habit) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == updated.id) {
            *habit = updated;
        }
    }

    pub fn delete_habit(&mut self, id: Uuid) {
        self.habits.retain(|h| h.id != id);
    }

    pub fn habit(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Habits to list: the active category after visibility and filter
    /// rules, incomplete ones first.
    pub fn visible_habits(&self) -> Vec<&Habit> {
        let mut visible: Vec<&Habit> = self
            .habits
            .iter()
            .filter(|h| h.category == self.active_category)
            .filter(|h| self.show_completed || !h.is_completed())
            .filter(|h| self.filter.admits(h))
            .collect();
        visible.sort_by_key(|h| h.is_completed());
        visible
    }

    // --- Categories ---

    /// Add and activate a category. Blank or duplicate names are ignored.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|c| c == name) {
            return false;
        }
        self.categories.push(name.to_string());
        self.active_category = name.to_string();
        true
    }

    /// Remove a category together with all of its habits.
    pub fn delete_category(&mut self, name: &str) {
        self.categories.retain(|c| c != name);
        self.habits.retain(|h| h.category != name);

        if self.active_category == name {
            match self.categories.first() {
                Some(first) => self.active_category = first.clone(),
                None => {
                    self.categories.push(FALLBACK_CATEGORY.to_string());
                    self.active_category = FALLBACK_CATEGORY.to_string();
                }
            }
        }
    }

    // --- Filtering ---

    pub fn toggle_show_completed(&mut self, now: Instant) {
        let message = if self.show_completed {
            "Hiding completed habits"
        } else {
            "Showing completed habits"
        };
        self.show_completed = !self.show_completed;
        self.notify(message, now);
    }

    pub fn set_filter(&mut self, filter: HabitFilter, now: Instant) {
        self.filter = filter;
        self.notify(format!("Showing: {}", filter.title()), now);
    }

    // --- Todos ---

    pub fn add_todo(&mut self, text: &str, points: f64) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let todo = Todo::new(text, points);
        let id = todo.id;
        self.todos.push(todo);
        Some(id)
    }

    /// Flip a todo between done and not done, moving its points in or out
    /// of the coin total.
    pub fn toggle_todo(&mut self, id: Uuid) {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if todo.is_completed {
            self.total_coins -= todo.points;
        } else {
            self.total_coins += todo.points;
        }
        todo.is_completed = !todo.is_completed;
    }

    pub fn delete_todo(&mut self, id: Uuid) {
        self.todos.retain(|t| t.id != id);
    }

    // --- Transient messages ---

    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notification = Some(Flash::new(message.into(), now));
    }

    /// Current notification, if it has not expired yet.
    pub fn notification(&self, now: Instant) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| n.alive(now, NOTIFICATION_TTL))
            .map(|n| n.value.as_str())
    }

    /// Coins from the most recent completion, while the badge is showing.
    pub fn last_increment(&self, now: Instant) -> Option<f64> {
        self.last_increment
            .as_ref()
            .filter(|i| i.alive(now, INCREMENT_TTL))
            .map(|i| i.value)
    }

    /// Drop expired transient messages. Returns true if anything is still
    /// showing.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.notification(now).is_none() {
            self.notification = None;
        }
        if self.last_increment(now).is_none() {
            self.last_increment = None;
        }
        self.notification.is_some() || self.last_increment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn find(tracker: &Tracker, text: &str) -> Uuid {
        tracker.habits.iter().find(|h| h.text == text).unwrap().id
    }

    #[test]
    fn completing_earns_coins_until_the_target() {
        let now = Instant::now();
        let mut tracker = Tracker::sample();
        let read = find(&tracker, "Read a book");
        let exercise = find(&tracker, "Exercise");

        // Already complete: nothing happens.
        assert_eq!(tracker.complete_habit(read, now), 0.0);
        assert!(approx(tracker.total_coins, 10.0));

        assert!(approx(tracker.complete_habit(exercise, now), 0.3));
        assert!(approx(tracker.total_coins, 10.3));
        assert_eq!(tracker.habit(exercise).unwrap().daily_completions, 4);
        assert_eq!(tracker.last_increment(now), Some(0.3));
        assert_eq!(tracker.last_increment(now + INCREMENT_TTL), None);
    }

    #[test]
    fn reset_refunds_every_completion() {
        let mut tracker = Tracker::sample();
        let exercise = find(&tracker, "Exercise");
        tracker.reset_habit(exercise);
        assert_eq!(tracker.habit(exercise).unwrap().daily_completions, 0);
        assert!(approx(tracker.total_coins, 10.0 - 0.9));
    }

    #[test]
    fn visible_habits_follow_category_and_filters() {
        let now = Instant::now();
        let mut tracker = Tracker::sample();
        let mut done = Habit::new("Stretch", "🤸", "Daily");
        done.target_completions = 1;
        tracker.add_habit(done);
        let stretch = find(&tracker, "Stretch");
        tracker.complete_habit(stretch, now);

        // Put the completed habit first in storage order.
        tracker.habits.rotate_right(1);
        let names: Vec<_> = tracker.visible_habits().iter().map(|h| h.text.as_str()).collect();
        assert_eq!(names, vec!["Exercise", "Stretch"]);

        tracker.set_filter(HabitFilter::Completed, now);
        let names: Vec<_> = tracker.visible_habits().iter().map(|h| h.text.as_str()).collect();
        assert_eq!(names, vec!["Stretch"]);
        assert_eq!(tracker.notification(now), Some("Showing: Completed Habits"));

        tracker.set_filter(HabitFilter::All, now);
        tracker.toggle_show_completed(now);
        let names: Vec<_> = tracker.visible_habits().iter().map(|h| h.text.as_str()).collect();
        assert_eq!(names, vec!["Exercise"]);
        assert_eq!(tracker.notification(now), Some("Hiding completed habits"));
        assert_eq!(tracker.notification(now + NOTIFICATION_TTL), None);
    }

    #[test]
    fn new_habits_join_the_active_category() {
        let mut tracker = Tracker::sample();
        tracker.active_category = "Health".into();
        let id = tracker.add_habit(Habit::new("Walk", "🚶", "Daily"));
        assert_eq!(tracker.habit(id).unwrap().category, "Health");
    }

    #[test]
    fn categories_are_trimmed_and_unique() {
        let mut tracker = Tracker::default();
        assert!(tracker.add_category("  Work "));
        assert_eq!(tracker.active_category, "Work");
        assert!(!tracker.add_category("Work"));
        assert!(!tracker.add_category("   "));
        assert_eq!(tracker.categories, vec!["Daily", "Health", "Study", "Work"]);
    }

    #[test]
    fn deleting_a_category_removes_its_habits() {
        let mut tracker = Tracker::sample();
        tracker.delete_category("Daily");
        assert_eq!(tracker.active_category, "Health");
        assert!(tracker.habits.iter().all(|h| h.category != "Daily"));
        assert_eq!(tracker.habits.len(), 2);
    }

    #[test]
    fn deleting_the_last_category_leaves_untitled() {
        let mut tracker = Tracker::default();
        for name in ["Daily", "Health", "Study"] {
            tracker.active_category = name.into();
            tracker.delete_category(name);
        }
        assert_eq!(tracker.categories, vec![FALLBACK_CATEGORY]);
        assert_eq!(tracker.active_category, FALLBACK_CATEGORY);
    }

    #[test]
    fn todos_move_points_both_ways() {
        let mut tracker = Tracker::default();
        let id = tracker.add_todo("File taxes", 2.0).unwrap();
        assert_eq!(tracker.add_todo("  ", 1.0), None);

        tracker.toggle_todo(id);
        assert!(approx(tracker.total_coins, 12.0));
        tracker.toggle_todo(id);
        assert!(approx(tracker.total_coins, 10.0));

        tracker.delete_todo(id);
        assert!(tracker.todos.is_empty());
    }
}
