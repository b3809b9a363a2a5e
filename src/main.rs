use anyhow::Result;
use clap::Parser;

use advent_scaffold::cli::Cli;
use advent_scaffold::{config, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let root = cli
        .root
        .as_deref()
        .map(config::expand_root)
        .unwrap_or_else(config::default_root);

    let mut stdout = std::io::stdout().lock();
    advent_scaffold::run(cli.day(), &root, &mut stdout)?;
    Ok(())
}
