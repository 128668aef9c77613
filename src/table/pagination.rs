//! Page index and page size.

/// Page size options offered by default.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Pagination over a filtered row set of `total` rows.
///
/// `page_index` is zero-based and always lies in `0..page_count(total)` once
/// [`Pagination::clamp`] has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    options: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE_OPTIONS[0], DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl Pagination {
    /// Creates pagination at page 0. Zero sizes are dropped from `options`;
    /// an unlisted `page_size` falls back to the first option.
    pub fn new(page_size: usize, options: Vec<usize>) -> Self {
        let mut options: Vec<usize> = options.into_iter().filter(|&n| n > 0).collect();
        if options.is_empty() {
            options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        let page_size = if options.contains(&page_size) {
            page_size
        } else {
            options[0]
        };
        Self {
            page_index: 0,
            page_size,
            options,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn options(&self) -> &[usize] {
        &self.options
    }

    /// Number of pages for `total` rows. At least one, even when empty.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Switches to a listed page size. Keeps the first row of the current
    /// page visible, then clamps. Unlisted sizes are rejected.
    pub fn set_page_size(&mut self, size: usize, total: usize) -> bool {
        if !self.options.contains(&size) {
            return false;
        }
        let first_row = self.page_index * self.page_size;
        self.page_size = size;
        self.page_index = first_row / size;
        self.clamp(total);
        true
    }

    /// Neighbouring page size option: the next larger for `step > 0`,
    /// the next smaller otherwise.
    pub fn adjacent_size(&self, step: isize) -> Option<usize> {
        let pos = self.options.iter().position(|&n| n == self.page_size)?;
        let next = if step > 0 { pos.checked_add(1)? } else { pos.checked_sub(1)? };
        self.options.get(next).copied()
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    pub fn last(&mut self, total: usize) {
        self.page_index = self.page_count(total) - 1;
    }

    /// Alias of [`Pagination::first`] used when filter or sort change.
    pub fn reset(&mut self) {
        self.first();
    }

    /// Pulls the page index back into range after the row count shrank.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    /// `"Page 2 of 3"`
    pub fn label(&self, total: usize) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count(total))
    }
}
