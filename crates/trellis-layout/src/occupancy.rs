//! Column occupancy left behind by multi-row spans.

const INITIAL_COLUMNS: usize = 32;

/// Per-column countdown of rows still reserved by earlier placements.
///
/// A positive entry is the number of rows (including the current one) the
/// column stays reserved for. A negative entry reserves the column until a
/// later placement overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOccupancy {
    rows_remaining: Vec<i32>,
    /// Highest column ever marked
    high_water: Option<usize>,
}

impl Default for ColumnOccupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnOccupancy {
    pub fn new() -> Self {
        Self {
            rows_remaining: vec![0; INITIAL_COLUMNS],
            high_water: None,
        }
    }

    /// Whether `column` is reserved. Untracked columns are free.
    pub fn is_occupied(&self, column: usize) -> bool {
        self.remaining(column) != 0
    }

    /// Raw countdown for `column` (0 when free or untracked).
    pub fn remaining(&self, column: usize) -> i32 {
        self.rows_remaining.get(column).copied().unwrap_or(0)
    }

    /// Reserve columns `first..=last` for `rows` rows.
    ///
    /// An empty range leaves the tracker untouched.
    pub fn mark_occupied(&mut self, first: usize, last: usize, rows: i32) {
        if last < first {
            return;
        }
        self.grow_to(last + 1);
        self.rows_remaining[first..=last].fill(rows);
        self.high_water = Some(self.high_water.map_or(last, |high| high.max(last)));
    }

    /// One row has elapsed: count down every positive entry.
    pub fn advance(&mut self) {
        let Some(high) = self.high_water else {
            return;
        };
        for rows in &mut self.rows_remaining[..=high] {
            if *rows > 0 {
                *rows -= 1;
            }
        }
    }

    /// Number of currently reserved columns.
    pub fn occupied_count(&self) -> usize {
        self.rows_remaining.iter().filter(|&&rows| rows != 0).count()
    }

    /// Number of tracked columns.
    pub fn tracked_columns(&self) -> usize {
        self.rows_remaining.len()
    }

    /// Release every column.
    pub fn clear(&mut self) {
        self.rows_remaining.fill(0);
        self.high_water = None;
    }

    fn grow_to(&mut self, min_len: usize) {
        let mut len = self.rows_remaining.len().max(1);
        if len >= min_len {
            return;
        }
        while len < min_len {
            len <<= 1;
        }
        self.rows_remaining.resize(len, 0);
    }
}
