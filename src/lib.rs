//! vesselboard - terminal dashboard for pool vessel earnings.
//!
//! This library provides:
//! - `table` - generic data-table engine (sort, filter, paging, capped selection, column visibility)
//! - `view` - UI-agnostic view model built from a table
//! - `models` - vessel rows, column set and trend series
//! - `tui` - interactive terminal shell

pub mod config;
pub mod fmt;
pub mod models;
pub mod month_range;
pub mod table;
pub mod tui;
pub mod view;
