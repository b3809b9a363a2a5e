pub mod cli;
pub mod config;
pub mod day;
pub mod error;
pub mod logger;
pub mod scaffold;

use std::io::Write;
use std::path::Path;

pub use config::Config;
pub use day::Day;
pub use error::{Result, ScaffoldError};
pub use scaffold::{Layout, Scaffolded};

#[derive(Debug)]
pub enum Outcome {
    Created(Scaffolded),
    /// The run stopped before touching the filesystem; the message was printed.
    Rejected(ScaffoldError),
}

/// Scaffolds the day named by the first argument under `root`, writing the
/// user-facing report to `out`. Extra arguments are ignored.
///
/// Validation failures are printed and returned as [`Outcome::Rejected`];
/// only config and filesystem problems come back as errors.
pub fn run<I, S, W>(args: I, root: &Path, out: &mut W) -> anyhow::Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let day = match args.into_iter().next() {
        Some(arg) => arg.as_ref().parse::<Day>(),
        None => Err(ScaffoldError::MissingDay),
    };
    let day = match day {
        Ok(day) => day,
        Err(e) => return reject(e, out),
    };
    tracing::debug!("Scaffolding day {} under {}", day, root.display());

    let config = Config::load(root)?;
    let layout = Layout::new(root, &config)?;

    let done = match scaffold::scaffold_day(&layout, day) {
        Ok(done) => done,
        Err(e) if e.is_rejection() => return reject(e, out),
        Err(e) => return Err(e.into()),
    };

    writeln!(out, "{} created!", layout.display_path(&done.example))?;
    writeln!(out, "{} created!", layout.display_path(&done.program))?;
    Ok(Outcome::Created(done))
}

fn reject<W: Write>(e: ScaffoldError, out: &mut W) -> anyhow::Result<Outcome> {
    tracing::debug!(error = ?e, "Rejected");
    writeln!(out, "{e}")?;
    Ok(Outcome::Rejected(e))
}
