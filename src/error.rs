use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::day::Day;

pub const EXAMPLE: &str = "ex: cargo run -- 2";

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Must provide a day argument. {example}", example = EXAMPLE)]
    MissingDay,

    #[error("day must be a whole number, got '{0}'\n{example}", example = EXAMPLE)]
    NotANumber(String),

    #[error("new day not in range: must be between 1-25")]
    OutOfRange(String),

    #[error("advent of code day {0} has already been created")]
    AlreadyExists(Day),

    #[error("No scaffold template for language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Validation failures that are reported to the user and end the run
    /// without being treated as a crash.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingDay | Self::NotANumber(_) | Self::OutOfRange(_) | Self::AlreadyExists(_)
        )
    }

    pub(crate) fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
