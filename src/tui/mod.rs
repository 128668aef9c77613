//! Terminal User Interface for the vessel dashboard.
//!
//! Renders the header, trend chart and vessel table, and maps keys onto
//! table actions.

mod app;
mod event;
mod input;
pub mod notice;
mod render;
pub mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::AppState;
