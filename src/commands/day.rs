use anyhow::Result;
use daybook_core::CalendarApp;
use daybook_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(app: &CalendarApp<S>) -> Result<()> {
    let Some(date) = app.selected() else {
        anyhow::bail!("No day selected");
    };

    println!("{}", date.format("%A, %B %-d, %Y").to_string().bold());

    let events = app.selected_events();
    if events.is_empty() {
        println!("{}", "  No events found".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", event.render());
    }

    Ok(())
}
