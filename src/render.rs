//! Terminal rendering for daybook types.
//!
//! Extension traits that add colored output to daybook-core types using
//! owo_colors.

use chrono::Datelike;
use daybook_core::{CalendarDay, CalendarGrid, Event, EventColor};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const CELL_WIDTH: usize = 14;

/// Events listed per cell before collapsing into "+N more"
const MAX_CELL_EVENTS: usize = 3;

/// Day number line, event lines, overflow line
const CELL_HEIGHT: usize = MAX_CELL_EVENTS + 2;

/// Colorize text according to the event category
fn paint(color: EventColor, text: &str) -> String {
    match color {
        EventColor::Work => text.blue().to_string(),
        EventColor::Personal => text.green().to_string(),
        EventColor::Other => text.magenta().to_string(),
        EventColor::Default => text.to_string(),
    }
}

/// Cut `text` to at most `width` characters, marking the cut with "…"
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str) -> String {
    format!("{:<width$}", text, width = CELL_WIDTH)
}

impl Render for EventColor {
    fn render(&self) -> String {
        paint(*self, &format!("[{}]", self))
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "  {} {} {} {}",
            self.time_range(),
            paint(self.color, &self.title).bold(),
            self.color.render(),
            self.id.dimmed()
        );

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!("\n      {}", description.dimmed()));
        }

        line
    }
}

/// One grid cell, as `CELL_HEIGHT` lines padded to `CELL_WIDTH`.
fn render_cell(day: &CalendarDay) -> Vec<String> {
    let mut lines = Vec::with_capacity(CELL_HEIGHT);

    let mut header = format!("{:>2}", day.date.day());
    if !day.events.is_empty() {
        header.push_str(&format!(" ({})", day.events.len()));
    }
    let header = pad(&header);
    lines.push(if day.is_today {
        header.bold().cyan().to_string()
    } else if !day.is_current_month {
        header.dimmed().to_string()
    } else {
        header
    });

    for event in day.events.iter().take(MAX_CELL_EVENTS) {
        let label = format!("{} {}", event.start_time, event.title);
        lines.push(paint(event.color, &pad(&truncate(&label, CELL_WIDTH))));
    }

    let hidden = day.events.len().saturating_sub(MAX_CELL_EVENTS);
    if hidden > 0 {
        lines.push(pad(&format!("+{} more", hidden)).dimmed().to_string());
    }

    while lines.len() < CELL_HEIGHT {
        lines.push(pad(""));
    }

    lines
}

impl Render for CalendarGrid {
    fn render(&self) -> String {
        let mut lines = vec![self.title().bold().to_string(), String::new()];

        let header: Vec<String> = WEEKDAYS.iter().map(|d| pad(d).dimmed().to_string()).collect();
        lines.push(header.join(" "));

        for week in self.weeks() {
            let cells: Vec<Vec<String>> = week.iter().map(render_cell).collect();
            for row in 0..CELL_HEIGHT {
                let parts: Vec<&str> = cells.iter().map(|c| c[row].as_str()).collect();
                lines.push(parts.join(" "));
            }
        }

        lines.join("\n")
    }
}
