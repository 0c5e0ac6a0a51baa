//! `dp`: filter products, keep a journal, and browse relationships.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
