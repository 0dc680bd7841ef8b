use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netgrid")]
#[command(author, version, about)]
#[command(long_about = "A grid-based network diagram editor.\n\n\
    Place devices on a 51x51 grid, link them, and inspect the result as JSON.\n\n\
    Examples:\n  \
    netgrid catalog                       List the device palette\n  \
    netgrid show network.json             Print the state of a saved network\n  \
    netgrid run edits.yaml -i network.json  Replay edits on top of a network")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the device catalog
    Catalog,

    /// Load a network description and print its state as JSON
    Show {
        /// Network description (JSON or YAML)
        file: PathBuf,
    },

    /// Replay an edit script and print the resulting state as JSON
    Run {
        /// Edit script (YAML)
        script: PathBuf,

        /// Network description to start from
        #[arg(short, long)]
        initial: Option<PathBuf>,

        /// Seed for random placement (quiz rewards)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. editor.cell_size, rules.max_distance)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Catalog) => {
                crate::commands::catalog::run();
                Ok(())
            }
            Some(Commands::Show { file }) => {
                if !file.exists() {
                    anyhow::bail!("File not found: {}", file.display());
                }
                crate::commands::show::run(&file)
            }
            Some(Commands::Run {
                script,
                initial,
                seed,
            }) => {
                if !script.exists() {
                    anyhow::bail!("File not found: {}", script.display());
                }
                crate::commands::run::run(&script, initial.as_deref(), seed, self.quiet)
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("netgrid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
