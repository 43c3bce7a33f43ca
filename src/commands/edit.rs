use anyhow::Result;
use chrono::NaiveDate;
use daybook_core::store::KeyValueStore;
use daybook_core::{CalendarApp, EventForm};
use owo_colors::OwoColorize;

use super::FormFields;

pub fn run<S: KeyValueStore>(
    app: &mut CalendarApp<S>,
    id: &str,
    date: Option<NaiveDate>,
    fields: FormFields,
) -> Result<()> {
    let Some(existing) = app.event(id) else {
        anyhow::bail!("Event not found: {}", id);
    };

    let date = date.unwrap_or(existing.date);
    let form = fields.apply_to(EventForm::from(existing));

    let event = app.update_event(id, &form, date)?;
    println!("{}", format!("  Updated: {} ({})", event.title, event.time_range()).yellow());

    Ok(())
}
