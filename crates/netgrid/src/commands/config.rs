use anyhow::Result;
use colored::Colorize;
use netgrid::config::Config;

use crate::cli::ConfigCommands;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let geometry = config.geometry();
    let rules = config.rules();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("{}", "editor".bold());
    println!("  cell_size:       {}", geometry.cell_size);
    println!("  snap_threshold:  {}", geometry.snap_threshold);
    println!("{}", "rules".bold());
    println!("  max_distance:    {}", rules.max_distance);
    println!("  distance_exempt: {}", rules.distance_exempt.join(", "));
    for restriction in &rules.restrictions {
        println!(
            "  {} links only to: {}",
            restriction.name,
            restriction.allowed.join(", ")
        );
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Set".green());
    println!("Saved to {}", path.display());
    Ok(())
}
