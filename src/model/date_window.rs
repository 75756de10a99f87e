use chrono::{Datelike, Duration, NaiveDate};

/// Number of days added to either end of the window in one extension.
pub const CHUNK_SIZE: usize = 30;

/// Which end of the window to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// The ordered run of calendar days currently materialized as columns.
///
/// Consecutive entries are always exactly one day apart. The window only
/// ever grows, one chunk at a time, at either end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    dates: Vec<NaiveDate>,
}

impl DateWindow {
    /// A window spanning one chunk on both sides of `center`.
    pub fn around(center: NaiveDate) -> Self {
        let span = CHUNK_SIZE as i64;
        let dates = (-span..=span)
            .map(|offset| center + Duration::days(offset))
            .collect();
        Self { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Out-of-range indices yield `None` instead of panicking; the
    /// first frames can compute indices before layout has settled.
    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    /// Column index of `date`, if it is materialized.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.first()?;
        let offset = (date - first).num_days();
        if offset < 0 || offset as usize >= self.dates.len() {
            return None;
        }
        Some(offset as usize)
    }

    /// Grow the window by one chunk and return the days that were added,
    /// in chronological order.
    pub fn extend(&mut self, direction: Direction) -> Vec<NaiveDate> {
        let chunk = match direction {
            Direction::Forward => {
                let Some(last) = self.last() else {
                    return Vec::new();
                };
                let chunk = next_days(last, CHUNK_SIZE, 1);
                self.dates.extend_from_slice(&chunk);
                chunk
            }
            Direction::Backward => {
                let Some(first) = self.first() else {
                    return Vec::new();
                };
                // Generated nearest-first, so flip before splicing.
                let mut chunk = next_days(first, CHUNK_SIZE, -1);
                chunk.reverse();
                self.dates.splice(0..0, chunk.iter().copied());
                chunk
            }
        };
        tracing::debug!(
            ?direction,
            added = chunk.len(),
            total = self.dates.len(),
            "extended date window"
        );
        chunk
    }
}

/// `count` days stepping away from `from` (exclusive) by `step` days each.
fn next_days(from: NaiveDate, count: usize, step: i64) -> Vec<NaiveDate> {
    (1..=count as i64)
        .map(|n| from + Duration::days(n * step))
        .collect()
}

/// Month and year shown in the calendar header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    pub year: i32,
    pub month: u32,
}

impl DisplayedMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Label such as "March 2024".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_contiguous(window: &DateWindow) {
        for pair in window.dates().windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1), "gap at {}", pair[0]);
        }
    }

    #[test]
    fn initial_window_spans_both_sides_of_center() {
        let window = DateWindow::around(ymd(2024, 3, 15));
        assert_eq!(window.len(), 61);
        assert_eq!(window.first(), Some(ymd(2024, 2, 14)));
        assert_eq!(window.last(), Some(ymd(2024, 4, 14)));
        assert_eq!(window.index_of(ymd(2024, 3, 15)), Some(30));
        assert_contiguous(&window);
    }

    #[test]
    fn forward_extension_starts_the_day_after_the_last_date() {
        let mut window = DateWindow::around(ymd(2024, 3, 15));
        let added = window.extend(Direction::Forward);
        assert_eq!(added.len(), CHUNK_SIZE);
        assert_eq!(added[0], ymd(2024, 4, 15));
        assert_eq!(added[29], ymd(2024, 5, 14));
        assert_eq!(window.len(), 91);
        assert_contiguous(&window);
    }

    #[test]
    fn backward_extension_crosses_the_year_boundary() {
        let mut window = DateWindow::around(ymd(2024, 1, 31));
        assert_eq!(window.first(), Some(ymd(2024, 1, 1)));

        let added = window.extend(Direction::Backward);
        assert_eq!(added.first(), Some(&ymd(2023, 12, 2)));
        assert_eq!(added.last(), Some(&ymd(2023, 12, 31)));
        assert_eq!(window.first(), Some(ymd(2023, 12, 2)));
        assert_eq!(window.index_of(ymd(2024, 1, 1)), Some(30));
        assert_contiguous(&window);
    }

    #[test]
    fn repeated_extensions_stay_contiguous_across_months() {
        let mut window = DateWindow::around(ymd(2024, 2, 28));
        for _ in 0..5 {
            window.extend(Direction::Forward);
            window.extend(Direction::Backward);
        }
        assert_eq!(window.len(), 61 + 10 * CHUNK_SIZE);
        assert!(window.index_of(ymd(2024, 2, 29)).is_some());
        assert_contiguous(&window);
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let window = DateWindow::around(ymd(2024, 3, 15));
        assert_eq!(window.get(61), None);
        assert_eq!(window.index_of(ymd(2020, 1, 1)), None);
        assert_eq!(window.index_of(ymd(2030, 1, 1)), None);
    }

    #[test]
    fn month_label() {
        assert_eq!(DisplayedMonth::of(ymd(2024, 3, 15)).label(), "March 2024");
    }
}
