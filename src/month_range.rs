//! Month-range picker state.
//!
//! A range is picked by clicking two months on a one-year grid. Future
//! months are disabled. The committed range runs from the first day of the
//! start month to the last day of the end month.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

/// Month names in grid order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// "Last n month" quick ranges.
pub const PRESETS: [u32; 6] = [1, 3, 6, 9, 12, 18];

/// Earliest date the trend fields accept.
const EARLIEST_TREND_YEAR: i32 = 1900;

/// One end of the "Show data trend for" range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendBound {
    Start,
    End,
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `"Jun '24"`
fn short_label(date: NaiveDate) -> String {
    date.format("%b '%y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRangePicker {
    today: NaiveDate,
    /// Year shown on the month grid.
    year: i32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    saved: (NaiveDate, NaiveDate),
}

impl MonthRangePicker {
    /// Starts with the six months ending with the current one.
    pub fn new(today: NaiveDate) -> Self {
        let end = month_start(today);
        let start = end.checked_sub_months(Months::new(5)).unwrap_or(end);
        Self {
            today,
            year: today.year(),
            start: Some(start),
            end: Some(end),
            saved: (start, month_end(end)),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Trend range `(start, end)`, inclusive. Updated by [`save`](Self::save)
    /// and by the trend setters.
    pub fn saved(&self) -> (NaiveDate, NaiveDate) {
        self.saved
    }

    /// Sets one trend date directly. Dates after today or before 1900 are
    /// rejected and the field keeps its value.
    pub fn set_trend(&mut self, bound: TrendBound, date: NaiveDate) -> bool {
        if date > self.today || date.year() < EARLIEST_TREND_YEAR {
            return false;
        }
        match bound {
            TrendBound::Start => self.saved.0 = date,
            TrendBound::End => self.saved.1 = date,
        }
        true
    }

    pub fn set_trend_start(&mut self, date: NaiveDate) -> bool {
        self.set_trend(TrendBound::Start, date)
    }

    pub fn set_trend_end(&mut self, date: NaiveDate) -> bool {
        self.set_trend(TrendBound::End, date)
    }

    /// Moves one trend date by `days`, counting from today when the date
    /// lies ahead of it and stopping at today.
    pub fn shift_trend(&mut self, bound: TrendBound, days: i64) -> bool {
        let current = match bound {
            TrendBound::Start => self.saved.0,
            TrendBound::End => self.saved.1,
        };
        let Some(target) = current
            .min(self.today)
            .checked_add_signed(TimeDelta::days(days))
        else {
            return false;
        };
        let target = target.min(self.today);
        target != current && self.set_trend(bound, target)
    }

    /// First day of grid month `index` (0 = January) in the shown year.
    fn date_for(&self, index: usize) -> Option<NaiveDate> {
        let month = u32::try_from(index).ok()?.checked_add(1)?;
        NaiveDate::from_ymd_opt(self.year, month, 1)
    }

    pub fn is_future_month(&self, index: usize) -> bool {
        self.date_for(index).is_none_or(|d| d > self.today)
    }

    /// Strictly between both ends, or the start month while no end is set.
    pub fn is_in_range(&self, index: usize) -> bool {
        let (Some(date), Some(start)) = (self.date_for(index), self.start) else {
            return false;
        };
        match self.end {
            Some(end) => date > start && date < end,
            None => same_month(date, start),
        }
    }

    pub fn is_start(&self, index: usize) -> bool {
        matches!((self.date_for(index), self.start), (Some(d), Some(s)) if same_month(d, s))
    }

    pub fn is_end(&self, index: usize) -> bool {
        matches!((self.date_for(index), self.end), (Some(d), Some(e)) if same_month(d, e))
    }

    /// Handles a click on grid month `index`.
    pub fn click_month(&mut self, index: usize) {
        if self.is_future_month(index) {
            return;
        }
        let Some(date) = self.date_for(index) else {
            return;
        };
        match (self.start, self.end) {
            (Some(start), None) if date < start => {
                self.start = Some(date);
                self.end = Some(start);
            }
            (Some(_), None) => self.end = Some(date),
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }
    }

    pub fn can_next_year(&self) -> bool {
        self.year < self.today.year()
    }

    pub fn previous_year(&mut self) {
        self.year -= 1;
    }

    pub fn next_year(&mut self) {
        if self.can_next_year() {
            self.year += 1;
        }
    }

    /// `"Select Range"`, `"Jun '24 - Select End"` or `"Jun '24 - Nov '24"`.
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (None, _) => "Select Range".to_string(),
            (Some(start), None) => format!("{} - Select End", short_label(start)),
            (Some(start), Some(end)) => format!("{} - {}", short_label(start), short_label(end)),
        }
    }

    /// Label of the committed range, `"01-06-2024 - 30-11-2024"`.
    pub fn saved_label(&self) -> String {
        format!(
            "{} - {}",
            self.saved.0.format("%d-%m-%Y"),
            self.saved.1.format("%d-%m-%Y")
        )
    }

    /// Clears both ends.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Commits a complete range. Returns `None` and keeps the previous
    /// range while an end is missing.
    pub fn save(&mut self) -> Option<(NaiveDate, NaiveDate)> {
        let (start, end) = (self.start?, self.end?);
        self.saved = (start, month_end(end));
        Some(self.saved)
    }

    /// Selects the `months` months ending with the current month.
    pub fn apply_preset(&mut self, months: u32) -> bool {
        if months == 0 {
            return false;
        }
        let end = month_start(self.today);
        let Some(start) = end.checked_sub_months(Months::new(months - 1)) else {
            return false;
        };
        self.start = Some(start);
        self.end = Some(end);
        self.year = self.today.year();
        true
    }
}
