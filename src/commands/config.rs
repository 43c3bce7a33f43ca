use anyhow::Result;
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig) -> Result<()> {
    let config_path = DaybookConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Events:   {}", config.store().path_for(daybook_core::store::EVENTS_KEY).display());
    println!("  Exports:  {}", config.export_path().display());

    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
