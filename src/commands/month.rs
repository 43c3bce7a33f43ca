use anyhow::Result;
use chrono::NaiveDate;
use daybook_core::CalendarApp;
use daybook_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(app: &CalendarApp<S>, today: NaiveDate) -> Result<()> {
    let grid = app.grid(today);
    println!("{}", grid.render());

    if !app.query().is_empty() {
        let matches: usize = grid.days().iter().map(|d| d.events.len()).sum();
        println!();
        println!(
            "{}",
            format!("{} matching \"{}\"", matches, app.query()).dimmed()
        );
    }

    Ok(())
}
