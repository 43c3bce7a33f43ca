//! Core of the daybook calendar.
//!
//! - `grid` builds the 42-day month view
//! - `overlap` and `form` decide whether an event may be saved
//! - `app` holds the application state on top of a `store`
//! - `export` turns a month of events into a JSON file

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod form;
pub mod grid;
pub mod overlap;
pub mod search;
pub mod store;

pub use app::CalendarApp;
pub use error::{DaybookError, DaybookResult, ValidationError};
pub use event::{ClockTime, Event, EventColor, EventDraft};
pub use form::EventForm;
pub use grid::{CalendarDay, CalendarGrid, build_month_grid, format_date_key};
pub use overlap::has_overlap;
