use anyhow::Result;
use daybook_core::CalendarApp;
use daybook_core::store::KeyValueStore;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(app: &mut CalendarApp<S>, id: &str, yes: bool) -> Result<()> {
    let Some(event) = app.event(id) else {
        anyhow::bail!("Event not found: {}", id);
    };

    if !yes {
        let prompt = format!("Delete \"{}\" on {}?", event.title, event.date);
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    let removed = app.delete_event(id)?;
    println!("{}", format!("  Deleted: {}", removed.title).red());

    Ok(())
}
