use std::path::{Path, PathBuf};

mod journal;
mod products;
mod research;
mod terminal;

use clap::ArgAction;
use journal::Journal;
use principles::Config;
use products::Products;
use research::Research;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path of the configuration file
    #[arg(short, long, default_value = "principles.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Products(Products::default()))
            .run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List products matching a set of filters (default)
    ///
    /// Values given to one flag are alternatives; different flags must all
    /// match.
    Products(Products),

    /// Add, show, or remove journal entries
    Journal(Journal),

    /// Report the children of a person in the sample family
    Research(Research),

    /// Write a default configuration file
    Init,
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Products(command) => command.run(Config::load_or_default(config_path))?,
            Self::Journal(command) => command.run(&Config::load_or_default(config_path))?,
            Self::Research(command) => command.run()?,
            Self::Init => Init::run(config_path)?,
        }
        Ok(())
    }
}

struct Init;

impl Init {
    #[instrument]
    fn run(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Configuration already exists (found {})",
                path.display()
            );
        }

        Config::default()
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

        println!("Created {}", path.display());
        Ok(())
    }
}
