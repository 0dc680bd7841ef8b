use std::path::Path;

use anyhow::Result;

pub fn run(file: &Path) -> Result<()> {
    let network = super::load_network(file)?;
    println!("{}", network.state().to_json()?);
    Ok(())
}
