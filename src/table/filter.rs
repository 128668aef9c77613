//! Single-column text filter.

/// Case-insensitive substring filter bound to one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    column_id: String,
    value: String,
}

impl ColumnFilter {
    pub fn new(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            value: String::new(),
        }
    }

    /// Column the filter applies to.
    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    /// Current filter text. Empty when no filter is active.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when the filter text is non-blank.
    pub fn is_active(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Placeholder shown by an empty filter input.
    pub fn placeholder(&self) -> String {
        format!("Filter {}...", self.column_id)
    }

    /// Whether a cell with the given text passes the filter.
    ///
    /// Surrounding whitespace in the filter text is ignored.
    pub fn matches(&self, cell_text: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        cell_text
            .to_lowercase()
            .contains(&self.value.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ColumnFilter::new("vessels");
        assert!(!filter.is_active());
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let mut filter = ColumnFilter::new("vessels");
        filter.set("lEo");
        assert!(filter.is_active());
        assert!(filter.matches("Hafnia Leo"));
        assert!(filter.matches("LEONORA"));
        assert!(!filter.matches("Nord Star"));
    }

    #[test]
    fn whitespace_only_is_inactive() {
        let mut filter = ColumnFilter::new("vessels");
        filter.set("   ");
        assert!(!filter.is_active());
        assert!(filter.matches("Nord Star"));
        filter.clear();
        assert_eq!(filter.value(), "");
    }

    #[test]
    fn placeholder_names_column() {
        assert_eq!(ColumnFilter::new("vessels").placeholder(), "Filter vessels...");
    }
}
