use uuid::Uuid;

/// A repeatable daily habit.
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: Uuid,
    pub text: String,
    /// Emoji shown next to the name.
    pub icon: String,
    /// Coins earned per completion.
    pub coins: f64,
    pub penalty: f64,
    /// Completions needed to finish the habit for the day.
    pub target_completions: u32,
    pub daily_completions: u32,
    pub category: String,
}

impl Habit {
    /// Create a new habit with no completions yet.
    pub fn new(text: impl Into<String>, icon: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            icon: icon.into(),
            coins: 0.1,
            penalty: 0.0,
            target_completions: 1,
            daily_completions: 0,
            category: category.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.daily_completions >= self.target_completions
    }

    /// Completion ratio for progress bars, capped at 1.0.
    pub fn progress(&self) -> f32 {
        if self.target_completions == 0 {
            return 1.0;
        }
        (self.daily_completions as f32 / self.target_completions as f32).min(1.0)
    }
}

/// A one-off item on the todo list, worth `points` coins once done.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub points: f64,
    pub is_completed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>, points: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            points,
            is_completed: false,
        }
    }
}

/// Which habits the list shows, in addition to the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HabitFilter {
    #[default]
    All,
    Ongoing,
    Completed,
}

impl HabitFilter {
    pub fn all() -> &'static [HabitFilter] {
        &[HabitFilter::All, HabitFilter::Ongoing, HabitFilter::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitFilter::All => "All Habits",
            HabitFilter::Ongoing => "On-going",
            HabitFilter::Completed => "Completed",
        }
    }

    /// Heading shown in the app bar while this filter is active.
    pub fn title(&self) -> &'static str {
        match self {
            HabitFilter::All => "All Habits",
            HabitFilter::Ongoing => "On-going Habits",
            HabitFilter::Completed => "Completed Habits",
        }
    }

    pub fn admits(&self, habit: &Habit) -> bool {
        match self {
            HabitFilter::All => true,
            HabitFilter::Ongoing => !habit.is_completed(),
            HabitFilter::Completed => habit.is_completed(),
        }
    }
}
