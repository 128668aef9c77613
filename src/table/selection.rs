//! Row selection with a hard cap on the number of selected rows.

use std::collections::BTreeSet;

use super::RowId;

/// Default maximum number of selected rows.
pub const DEFAULT_MAX_SELECTION: usize = 8;

/// Result of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The request was committed (possibly as a no-op).
    Applied,
    /// The request would break the cap and was dropped.
    Rejected,
}

/// Header checkbox state for the rows of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// ID-based selection state capped at `max` rows.
///
/// Selection is keyed by [`RowId`] so it survives sorting, filtering and
/// page changes.
#[derive(Debug, Clone)]
pub struct RowSelection {
    selected: BTreeSet<RowId>,
    max: usize,
}

impl Default for RowSelection {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTION)
    }
}

impl RowSelection {
    pub fn new(max: usize) -> Self {
        Self {
            selected: BTreeSet::new(),
            max,
        }
    }

    /// Configured maximum.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of selected rows.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.selected.iter().copied()
    }

    /// Selects or deselects one row.
    ///
    /// Selecting a new row while the cap is reached is rejected and the row
    /// stays unselected. Deselecting is always applied.
    pub fn toggle(&mut self, id: RowId, selected: bool) -> SelectionOutcome {
        if !selected {
            self.selected.remove(&id);
            return SelectionOutcome::Applied;
        }
        if self.selected.contains(&id) {
            return SelectionOutcome::Applied;
        }
        if self.selected.len() >= self.max {
            return SelectionOutcome::Rejected;
        }
        self.selected.insert(id);
        SelectionOutcome::Applied
    }

    /// Applies `selected` to every row of the current page, or to none.
    ///
    /// The whole request is rejected when the page holds more rows than the
    /// cap, and also when selecting the page would push the total past it.
    pub fn toggle_page(&mut self, page_ids: &[RowId], selected: bool) -> SelectionOutcome {
        if page_ids.len() > self.max {
            return SelectionOutcome::Rejected;
        }

        if selected {
            let added = page_ids
                .iter()
                .filter(|id| !self.selected.contains(*id))
                .collect::<BTreeSet<_>>()
                .len();
            if self.selected.len() + added > self.max {
                return SelectionOutcome::Rejected;
            }
            self.selected.extend(page_ids.iter().copied());
        } else {
            for id in page_ids {
                self.selected.remove(id);
            }
        }
        SelectionOutcome::Applied
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Header checkbox state for the given page.
    pub fn page_check_state(&self, page_ids: &[RowId]) -> CheckState {
        let on_page = page_ids
            .iter()
            .filter(|id| self.selected.contains(*id))
            .count();
        if on_page == 0 {
            CheckState::Unchecked
        } else if on_page == page_ids.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    /// Notice shown when a bulk select is refused.
    pub fn cap_notice(&self, entity_label: &str) -> String {
        format!(
            "Select All is limited up to {} {}. Please select manually.",
            self.max, entity_label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_rejects_at_cap() {
        let mut sel = RowSelection::new(2);
        assert_eq!(sel.toggle(1, true), SelectionOutcome::Applied);
        assert_eq!(sel.toggle(2, true), SelectionOutcome::Applied);
        assert_eq!(sel.toggle(3, true), SelectionOutcome::Rejected);
        assert!(!sel.is_selected(3));
        assert_eq!(sel.count(), 2);

        // Re-selecting an already selected row is fine at the cap.
        assert_eq!(sel.toggle(2, true), SelectionOutcome::Applied);
        assert_eq!(sel.count(), 2);

        // Deselect frees a slot.
        assert_eq!(sel.toggle(1, false), SelectionOutcome::Applied);
        assert_eq!(sel.toggle(3, true), SelectionOutcome::Applied);
        assert!(sel.is_selected(3));
    }

    #[test]
    fn count_never_exceeds_max() {
        let mut sel = RowSelection::new(3);
        let pages: [&[RowId]; 3] = [&[1, 2], &[3, 4], &[5, 6, 7, 8]];
        for step in 0..50u64 {
            match step % 5 {
                0 => {
                    sel.toggle(step % 11, true);
                }
                1 => {
                    sel.toggle_page(pages[(step % 3) as usize], true);
                }
                2 => {
                    sel.toggle(step % 7, step % 2 == 0);
                }
                3 => {
                    sel.toggle_page(pages[((step + 1) % 3) as usize], step % 4 == 0);
                }
                _ => {
                    if step % 10 == 4 {
                        sel.clear();
                    }
                }
            }
            assert!(sel.count() <= sel.max(), "step {step}: {}", sel.count());
        }
    }

    #[test]
    fn page_toggle_is_all_or_nothing() {
        let mut sel = RowSelection::new(8);
        let page: Vec<RowId> = (1..=10).collect();
        assert_eq!(sel.toggle_page(&page, true), SelectionOutcome::Rejected);
        assert_eq!(sel.count(), 0);

        let small: Vec<RowId> = (1..=5).collect();
        assert_eq!(sel.toggle_page(&small, true), SelectionOutcome::Applied);
        assert_eq!(sel.count(), 5);

        // Oversized page is rejected even when deselecting.
        assert_eq!(sel.toggle_page(&page, false), SelectionOutcome::Rejected);
        assert_eq!(sel.count(), 5);

        assert_eq!(sel.toggle_page(&small, false), SelectionOutcome::Applied);
        assert!(sel.is_empty());
    }

    #[test]
    fn page_toggle_rejected_when_union_exceeds_cap() {
        let mut sel = RowSelection::new(8);
        for id in 100..105 {
            sel.toggle(id, true);
        }
        let page: Vec<RowId> = (1..=4).collect();
        assert_eq!(sel.toggle_page(&page, true), SelectionOutcome::Rejected);
        assert_eq!(sel.count(), 5);

        let page: Vec<RowId> = vec![1, 2, 100];
        assert_eq!(sel.toggle_page(&page, true), SelectionOutcome::Applied);
        assert_eq!(sel.count(), 7);
    }

    #[test]
    fn page_check_state() {
        let mut sel = RowSelection::new(8);
        let page = [1, 2, 3];
        assert_eq!(sel.page_check_state(&page), CheckState::Unchecked);
        sel.toggle(2, true);
        assert_eq!(sel.page_check_state(&page), CheckState::Indeterminate);
        sel.toggle_page(&page, true);
        assert_eq!(sel.page_check_state(&page), CheckState::Checked);
        assert_eq!(sel.page_check_state(&[]), CheckState::Unchecked);
    }

    #[test]
    fn clear_empties() {
        let mut sel = RowSelection::default();
        sel.toggle(1, true);
        sel.toggle(2, true);
        sel.clear();
        assert_eq!(sel.count(), 0);
        assert_eq!(sel.max(), 8);
    }

    #[test]
    fn cap_notice_names_max_and_label() {
        let sel = RowSelection::new(8);
        assert_eq!(
            sel.cap_notice("vessels"),
            "Select All is limited up to 8 vessels. Please select manually."
        );
    }
}
