pub mod catalog;
pub mod completion;
pub mod config;
pub mod run;
pub mod show;

use std::path::Path;

use anyhow::Context;
use netgrid::Network;
use netgrid::config::Config;
use netgrid::loader::InitialConfig;

/// An empty network using the user's configured rules and geometry.
fn configured_network() -> Network {
    let config = Config::load_or_default();
    Network::new()
        .with_rules(config.rules())
        .with_geometry(config.geometry())
}

/// A configured network populated from `path`.
fn load_network(path: &Path) -> anyhow::Result<Network> {
    let mut network = configured_network();
    InitialConfig::read(path)
        .with_context(|| format!("Failed to load network from {}", path.display()))?
        .apply(&mut network);
    Ok(network)
}
