use anyhow::Result;
use chrono::NaiveDate;
use daybook_core::store::KeyValueStore;
use daybook_core::{CalendarApp, DaybookError, EventColor, EventForm};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use super::FormFields;

pub fn run<S: KeyValueStore>(app: &mut CalendarApp<S>, date: NaiveDate, fields: FormFields) -> Result<()> {
    let interactive = fields.title.is_none();
    let mut form = fields.apply_to(EventForm::default());

    if !interactive {
        let event = app.add_event(&form, date)?;
        println!("{}", format!("  Created: {} ({})", event.title, event.id).green());
        return Ok(());
    }

    println!("{}", format!("  New event on {}", date.format("%A, %B %-d, %Y")).bold());

    // Re-prompt until the event validates and fits
    loop {
        form = prompt_form(form)?;

        match app.add_event(&form, date) {
            Ok(event) => {
                println!();
                println!("{}", format!("  Created: {} ({})", event.title, event.id).green());
                return Ok(());
            }
            Err(e @ (DaybookError::Validation(_) | DaybookError::Overlap { .. })) => {
                eprintln!("  {}", e.to_string().red());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Ask for every field, offering the current values as defaults.
fn prompt_form(form: EventForm) -> Result<EventForm> {
    let title: String = Input::new()
        .with_prompt("  Title")
        .with_initial_text(form.title)
        .interact_text()?;

    let start_time: String = Input::new()
        .with_prompt("  Start (HH:MM)")
        .default(form.start_time)
        .interact_text()?;

    let end_time: String = Input::new()
        .with_prompt("  End (HH:MM)")
        .default(form.end_time)
        .interact_text()?;

    let items: Vec<&str> = EventColor::ALL.iter().map(|c| c.as_str()).collect();
    let current = items.iter().position(|c| *c == form.color).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(current)
        .interact()?;

    let description: String = Input::new()
        .with_prompt("  Description (skip)")
        .default(form.description)
        .show_default(false)
        .interact_text()?;

    Ok(EventForm {
        title,
        description,
        start_time,
        end_time,
        color: items[selection].to_string(),
    })
}
