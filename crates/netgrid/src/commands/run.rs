use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use netgrid::quiz::Quiz;
use netgrid::script;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(script_path: &Path, initial: Option<&Path>, seed: Option<u64>, quiet: bool) -> Result<()> {
    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read {}", script_path.display()))?;
    let steps = script::parse(&text)
        .with_context(|| format!("Invalid edit script {}", script_path.display()))?;

    let mut network = match initial {
        Some(path) => super::load_network(path)?,
        None => super::configured_network(),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcomes = script::run(&steps, &mut network, &Quiz::default(), &mut rng);

    if !quiet {
        for (i, outcome) in outcomes.iter().enumerate() {
            let line = outcome.to_string();
            let line = if outcome.is_failure() {
                line.yellow()
            } else {
                line.green()
            };
            eprintln!("  [{:>2}] {line}", i + 1);
        }
    }

    println!("{}", network.state().to_json()?);
    Ok(())
}
