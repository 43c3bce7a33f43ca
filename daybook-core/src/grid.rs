//! Month grid generation.
//!
//! A month is always shown as six Sunday-first weeks (42 cells), padded with
//! trailing days of the previous month and leading days of the next one.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::event::Event;
use crate::search::matches_query;

/// Number of cells in a month grid (six weeks of seven days)
pub const GRID_CELLS: usize = 42;

const DAYS_PER_WEEK: usize = 7;

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

/// A month view of exactly [`GRID_CELLS`] days.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    days: Vec<CalendarDay>,
}

/// Normalize a (year, zero-based month) pair by calendar rollover.
///
/// `(2024, -1)` becomes `(2023, 11)` and `(2024, 12)` becomes `(2025, 0)`.
/// Years are clamped to the range chrono can represent with a month of
/// padding on either side.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let year = year
        .saturating_add(month.div_euclid(12))
        .clamp(NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1);
    (year, month.rem_euclid(12) as u32)
}

/// The first day of a (normalized) month.
pub fn first_of_month(year: i32, month: i32) -> NaiveDate {
    let (year, month) = normalize_month(year, month);
    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap_or_default()
}

/// Date key used to join events to days ("YYYY-MM-DD").
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Build the 42-day grid for a zero-based month.
///
/// `today` is the caller's local wall-clock date; only a current-month day
/// can be flagged as today.
pub fn build_month_grid(year: i32, month: i32, today: NaiveDate) -> CalendarGrid {
    let (year, month) = normalize_month(year, month);
    let first = first_of_month(year, month as i32);

    let leading = first.weekday().num_days_from_sunday();
    let start = first
        .checked_sub_days(Days::new(u64::from(leading)))
        .unwrap_or(first);

    let days = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let is_current_month = date.year() == year && date.month0() == month;
            CalendarDay {
                date,
                is_current_month,
                is_today: is_current_month && date == today,
                events: Vec::new(),
            }
        })
        .collect();

    CalendarGrid { year, month, days }
}

/// Build the grid using the local wall-clock date as "today".
pub fn build_month_grid_now(year: i32, month: i32) -> CalendarGrid {
    build_month_grid(year, month, chrono::Local::now().date_naive())
}

impl CalendarGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January)
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Rows of seven days, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.is_today)
    }

    /// Month heading (e.g. "February 2024")
    pub fn title(&self) -> String {
        first_of_month(self.year, self.month as i32)
            .format("%B %Y")
            .to_string()
    }

    /// Attach events to the days whose date key matches, keeping the
    /// collection order within each day.
    pub fn with_events(self, events: &[Event]) -> Self {
        let mut by_key: HashMap<String, Vec<Event>> = HashMap::new();
        for event in events {
            by_key
                .entry(format_date_key(event.date))
                .or_default()
                .push(event.clone());
        }

        let days = self
            .days
            .into_iter()
            .map(|day| CalendarDay {
                events: by_key.remove(&format_date_key(day.date)).unwrap_or_default(),
                ..day
            })
            .collect();

        CalendarGrid { days, ..self }
    }

    /// Narrow every day's events to those matching a search query.
    pub fn filtered(self, query: &str) -> Self {
        let days = self
            .days
            .into_iter()
            .map(|mut day| {
                day.events.retain(|e| matches_query(e, query));
                day
            })
            .collect();

        CalendarGrid { days, ..self }
    }
}
