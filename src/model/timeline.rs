/// Pixel geometry of the day-column grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    /// Width of one day column.
    pub column_width: f32,
    /// Height of one hour row.
    pub hour_height: f32,
}

impl TimelineGeometry {
    pub fn new(column_width: f32, hour_height: f32) -> Self {
        Self {
            column_width: column_width.max(1.0),
            hour_height,
        }
    }

    /// Left edge of the column at `index`.
    pub fn index_to_x(&self, index: usize) -> f32 {
        index as f32 * self.column_width
    }

    /// Column whose span contains `x`. Negative positions have no column.
    pub fn x_to_index(&self, x: f32) -> Option<usize> {
        if x < 0.0 || !x.is_finite() {
            return None;
        }
        Some((x / self.column_width).floor() as usize)
    }

    /// Column whose left edge is closest to `x`.
    pub fn nearest_index(&self, x: f32) -> i64 {
        (x / self.column_width).round() as i64
    }

    /// Total width of `columns` day columns.
    pub fn content_width(&self, columns: usize) -> f32 {
        self.index_to_x(columns)
    }

    /// Height of a full day on the hour axis.
    pub fn day_height(&self) -> f32 {
        self.hour_height * 24.0
    }
}

/// Horizontal scroll state of the grid body as measured after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub offset: f32,
    pub viewport_width: f32,
    pub content_width: f32,
}

impl ViewportState {
    /// Largest offset the body can be scrolled to.
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Scrollable distance remaining to the right of the viewport.
    pub fn distance_ahead(&self) -> f32 {
        self.content_width - (self.offset + self.viewport_width)
    }

    /// Scrollable distance to the left of the viewport.
    pub fn distance_behind(&self) -> f32 {
        self.offset
    }

    /// Column spanning the horizontal center of the viewport.
    pub fn centered_index(&self, geometry: &TimelineGeometry) -> Option<usize> {
        geometry.x_to_index(self.offset + self.viewport_width / 2.0)
    }
}
