use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context;
use principles::{Config, Persistence};
use tracing::instrument;

use super::terminal::Style;

#[derive(Debug, clap::Parser)]
pub struct Journal {
    /// Journal file to use instead of the configured one
    #[arg(long, value_name = "FILE", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// Append one entry per argument, then save
    Add {
        /// Entry text
        #[arg(required = true)]
        text: Vec<String>,

        /// Refuse to replace an existing journal file
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Print the journal
    Show,

    /// Remove the entry at a position (1 = first line), then save
    Remove {
        /// Position of the entry in the listing
        position: NonZeroUsize,
    },
}

impl Journal {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let path = self.file.unwrap_or_else(|| config.journal().to_path_buf());

        let mut journal = if path.exists() {
            Persistence
                .load_from_file(&path)
                .with_context(|| format!("failed to load journal {}", path.display()))?
        } else {
            tracing::debug!("{} does not exist, starting a new journal", path.display());
            principles::Journal::new()
        };

        let overwrite = match self.action {
            Action::Show => {
                if journal.is_empty() {
                    println!("{}", "The journal is empty.".warning());
                } else {
                    println!("{journal}");
                }
                return Ok(());
            }
            Action::Add { text, no_overwrite } => {
                for entry in &text {
                    let number = journal.add_entry(entry)?;
                    tracing::info!("Added entry {number}");
                }
                config.overwrite && !no_overwrite
            }
            Action::Remove { position } => {
                let removed = journal.remove_entry(position.get() - 1)?;
                tracing::info!("Removed '{removed}'");
                config.overwrite
            }
        };

        Persistence.save_to_file(&journal, &path, overwrite)?;

        println!("{journal}");
        println!(
            "{}",
            format!("Saved {} entries to {}", journal.len(), path.display()).success()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    fn run(args: &[&str], config: &Config) -> anyhow::Result<()> {
        Journal::try_parse_from(std::iter::once("journal").chain(args.iter().copied()))
            .unwrap()
            .run(config)
    }

    #[test]
    fn add_creates_and_extends_journal() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.txt");
        let file = path.to_str().unwrap();
        let config = Config::default();

        run(&["add", "I am happy", "I ate pizza", "--file", file], &config).unwrap();
        run(&["add", "--file", file, "I went for a walk"], &config).unwrap();

        let journal = Persistence.load_from_file(&path).unwrap();
        assert_eq!(
            journal.entries(),
            ["1: I am happy", "2: I ate pizza", "3: I went for a walk"]
        );
    }

    #[test]
    fn remove_uses_one_based_positions() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.txt");
        let file = path.to_str().unwrap();
        let config = Config::default();

        run(&["add", "first", "second", "--file", file], &config).unwrap();
        run(&["remove", "1", "--file", file], &config).unwrap();

        let journal = Persistence.load_from_file(&path).unwrap();
        assert_eq!(journal.entries(), ["2: second"]);
    }

    #[test]
    fn remove_past_the_end_fails() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.txt");
        let file = path.to_str().unwrap();
        let config = Config::default();

        run(&["add", "only", "--file", file], &config).unwrap();
        assert!(run(&["remove", "2", "--file", file], &config).is_err());
    }

    #[test]
    fn no_overwrite_protects_existing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.txt");
        let file = path.to_str().unwrap();
        let config = Config::default();

        run(&["add", "first", "--file", file], &config).unwrap();
        assert!(run(&["add", "second", "--no-overwrite", "--file", file], &config).is_err());

        let journal = Persistence.load_from_file(&path).unwrap();
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn multiline_entry_is_refused_and_file_stays_readable() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.txt");
        let file = path.to_str().unwrap();
        let config = Config::default();

        run(&["add", "first", "--file", file], &config).unwrap();
        assert!(run(&["add", "a\nb", "--file", file], &config).is_err());
        run(&["show", "--file", file], &config).unwrap();

        let journal = Persistence.load_from_file(&path).unwrap();
        assert_eq!(journal.entries(), ["1: first"]);
    }

    #[test]
    fn show_does_not_create_a_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("journal.txt");

        run(&["show", "--file", path.to_str().unwrap()], &Config::default()).unwrap();

        assert!(!path.exists());
    }
}
