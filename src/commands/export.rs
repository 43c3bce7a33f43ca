use std::path::PathBuf;

use anyhow::Result;
use daybook_core::CalendarApp;
use daybook_core::config::DaybookConfig;
use daybook_core::export::{DirectorySink, ExportSink};
use daybook_core::store::KeyValueStore;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(app: &CalendarApp<S>, config: &DaybookConfig, out: Option<PathBuf>) -> Result<()> {
    let sink = match out {
        Some(dir) => DirectorySink::new(dir),
        None => config.export_sink(),
    };

    let export = app.export()?;
    let path = sink.deliver(&export)?;

    println!("{}", format!("  Exported to {}", path.display()).green());
    Ok(())
}
