//! Column visibility with an "at least one visible column" guarantee.

use std::collections::BTreeSet;

use super::ColumnDef;

/// Visibility state over the hideable columns of a table.
///
/// Columns not listed as hideable are always visible and never toggle
/// targets. Among the hideable ones, at least one stays visible.
#[derive(Debug, Clone, Default)]
pub struct ColumnVisibility {
    /// Hideable column ids in definition order.
    hideable: Vec<String>,
    hidden: BTreeSet<String>,
}

impl ColumnVisibility {
    pub fn new(hideable: Vec<String>) -> Self {
        Self {
            hideable,
            hidden: BTreeSet::new(),
        }
    }

    /// Builds the controller from column definitions, all visible.
    pub fn from_columns<T>(columns: &[ColumnDef<T>]) -> Self {
        Self::new(
            columns
                .iter()
                .filter(|c| c.hideable)
                .map(|c| c.id.clone())
                .collect(),
        )
    }

    fn is_hideable(&self, id: &str) -> bool {
        self.hideable.iter().any(|h| h == id)
    }

    /// Returns true unless `id` is a hidden hideable column.
    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }

    /// Number of visible hideable columns.
    pub fn visible_count(&self) -> usize {
        self.hideable.iter().filter(|id| self.is_visible(id)).count()
    }

    /// `(id, visible)` for every hideable column, in definition order.
    pub fn entries(&self) -> Vec<(&str, bool)> {
        self.hideable
            .iter()
            .map(|id| (id.as_str(), self.is_visible(id)))
            .collect()
    }

    /// Shows or hides one hideable column. Returns false when the request
    /// was rejected.
    ///
    /// Hiding the last visible column is rejected. If nothing is visible,
    /// the first hideable column is forced visible instead.
    pub fn toggle(&mut self, id: &str, visible: bool) -> bool {
        if !self.is_hideable(id) {
            return false;
        }
        if visible {
            self.hidden.remove(id);
            return true;
        }

        match self.visible_count() {
            0 => {
                self.show_first();
                false
            }
            1 if self.is_visible(id) => false,
            _ => {
                self.hidden.insert(id.to_string());
                true
            }
        }
    }

    /// Toggles `id` to the opposite of its current state.
    pub fn flip(&mut self, id: &str) -> bool {
        let visible = self.is_visible(id);
        self.toggle(id, !visible)
    }

    /// Makes every hideable column visible.
    pub fn select_all(&mut self) {
        self.hidden.clear();
    }

    /// Keeps only the first visible hideable column. If none is visible,
    /// shows the first hideable column.
    pub fn deselect_all(&mut self) {
        let keep = self
            .hideable
            .iter()
            .find(|id| self.is_visible(id))
            .or_else(|| self.hideable.first())
            .cloned();

        self.hidden = self
            .hideable
            .iter()
            .filter(|id| Some(*id) != keep.as_ref())
            .cloned()
            .collect();
    }

    fn show_first(&mut self) {
        if let Some(first) = self.hideable.first() {
            self.hidden.remove(first);
        }
    }

    /// Restores the invariant if the state was built with every column hidden.
    pub fn ensure_one_visible(&mut self) {
        if self.visible_count() == 0 {
            self.show_first();
        }
    }

    /// Replaces the hidden set, then restores the invariant.
    pub fn set_hidden<I: IntoIterator<Item = String>>(&mut self, hidden: I) {
        self.hidden = hidden
            .into_iter()
            .filter(|id| self.is_hideable(id))
            .collect();
        self.ensure_one_visible();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> ColumnVisibility {
        ColumnVisibility::new(
            ["vessels", "segment", "pool", "participant", "age"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn last_visible_column_cannot_be_hidden() {
        let mut vis = five();
        assert!(vis.toggle("vessels", false));
        assert!(vis.toggle("segment", false));
        assert!(vis.toggle("pool", false));
        assert!(vis.toggle("participant", false));
        assert_eq!(vis.visible_count(), 1);

        assert!(!vis.toggle("age", false));
        assert_eq!(vis.visible_count(), 1);
        assert!(vis.is_visible("age"));
    }

    #[test]
    fn hiding_an_already_hidden_column_with_one_visible() {
        let mut vis = five();
        vis.set_hidden(["vessels", "segment", "pool", "participant"].map(String::from));
        assert!(vis.toggle("vessels", false));
        assert_eq!(vis.visible_count(), 1);
    }

    #[test]
    fn zero_visible_forces_first_visible() {
        let mut vis = five();
        vis.hidden = vis.hideable.iter().cloned().collect();
        assert_eq!(vis.visible_count(), 0);
        assert!(!vis.toggle("pool", false));
        assert!(vis.is_visible("vessels"));
        assert_eq!(vis.visible_count(), 1);
    }

    #[test]
    fn set_hidden_restores_invariant() {
        let mut vis = five();
        vis.set_hidden(["vessels", "segment", "pool", "participant", "age"].map(String::from));
        assert_eq!(vis.visible_count(), 1);
        assert!(vis.is_visible("vessels"));
    }

    #[test]
    fn deselect_all_keeps_first_visible() {
        let mut vis = five();
        vis.toggle("vessels", false);
        vis.deselect_all();
        assert_eq!(vis.visible_count(), 1);
        assert!(vis.is_visible("segment"));
        assert!(!vis.is_visible("vessels"));
    }

    #[test]
    fn deselect_then_select_all_restores() {
        let mut vis = five();
        vis.deselect_all();
        assert_eq!(vis.visible_count(), 1);
        vis.select_all();
        assert_eq!(vis.visible_count(), 5);
    }

    #[test]
    fn at_least_one_visible_over_sequences() {
        let mut vis = five();
        let ids = ["vessels", "segment", "pool", "participant", "age"];
        for step in 0..60usize {
            let id = ids[step % ids.len()];
            match step % 4 {
                0 | 1 => {
                    vis.toggle(id, false);
                }
                2 => {
                    vis.flip(ids[(step * 3) % ids.len()]);
                }
                _ => vis.deselect_all(),
            }
            assert!(vis.visible_count() >= 1, "step {step}");
        }
    }

    #[test]
    fn non_hideable_ids_are_ignored() {
        let mut vis = five();
        assert!(!vis.toggle("earnings", false));
        assert!(vis.is_visible("earnings"));
    }

    #[test]
    fn entries_follow_definition_order() {
        let mut vis = five();
        vis.toggle("pool", false);
        let entries = vis.entries();
        assert_eq!(entries[0], ("vessels", true));
        assert_eq!(entries[2], ("pool", false));
    }
}
