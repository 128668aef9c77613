//! Single-column sort state.

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Which column rows are ordered by, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: Option<SortDirection>,
}

impl SortState {
    /// Sorted column and direction, or `None` when unsorted.
    pub fn active(&self) -> Option<(&str, SortDirection)> {
        match (&self.column, self.direction) {
            (Some(col), Some(dir)) => Some((col.as_str(), dir)),
            _ => None,
        }
    }

    /// Direction applied to `column_id`, if it is the sorted column.
    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        self.active()
            .filter(|(col, _)| *col == column_id)
            .map(|(_, dir)| dir)
    }

    /// Cycles the sort on `column_id`.
    ///
    /// A different column starts ascending. The same column goes
    /// ascending, descending, then back to unsorted.
    pub fn toggle(&mut self, column_id: &str) {
        let next = match self.direction_for(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        match next {
            Some(dir) => {
                self.column = Some(column_id.to_string());
                self.direction = Some(dir);
            }
            None => self.clear(),
        }
    }

    pub fn set(&mut self, column_id: impl Into<String>, direction: SortDirection) {
        self.column = Some(column_id.into());
        self.direction = Some(direction);
    }

    pub fn clear(&mut self) {
        self.column = None;
        self.direction = None;
    }
}
