pub mod rust;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::day::Day;
use crate::error::{Result, ScaffoldError};

pub const EXAMPLE_FILE: &str = "example.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Rust,
}

impl Language {
    pub fn from_name(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("rust") {
            Ok(Language::Rust)
        } else {
            Err(ScaffoldError::UnsupportedLanguage(name.to_string()))
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Rust => rust::EXTENSION,
        }
    }

    fn write_stub(self, path: &Path) -> Result<()> {
        match self {
            Language::Rust => rust::write_stub(path),
        }
    }
}

/// Where a day's files live under the project root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    inputs_dir: PathBuf,
    bin_dir: PathBuf,
    language: Language,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        let root = root.into();
        Ok(Self {
            inputs_dir: root.join(&config.inputs_dir),
            bin_dir: root.join(&config.bin_dir),
            language: Language::from_name(&config.language)?,
            root,
        })
    }

    pub fn input_dir(&self, day: Day) -> PathBuf {
        self.inputs_dir.join(format!("day_{day}"))
    }

    pub fn example_path(&self, day: Day) -> PathBuf {
        self.input_dir(day).join(EXAMPLE_FILE)
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn program_path(&self, day: Day) -> PathBuf {
        self.bin_dir.join(format!("day_{day}.{}", self.language.extension()))
    }

    /// `./`-prefixed, `/`-separated form of a path under the root.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => {
                let parts: Vec<_> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect();
                format!("./{}", parts.join("/"))
            }
            Err(_) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub example: PathBuf,
    pub program: PathBuf,
    /// The example file was already on disk and was left as is.
    pub example_existed: bool,
}

/// Creates the example input and the solution stub for `day`.
///
/// Only the stub gates the run: an example file left over from an earlier,
/// partial scaffold is kept untouched and the stub is still created.
pub fn scaffold_day(layout: &Layout, day: Day) -> Result<Scaffolded> {
    let program = layout.program_path(day);
    tracing::debug!("Solution stub path: {}", program.display());

    if program.exists() {
        return Err(ScaffoldError::AlreadyExists(day));
    }

    let input_dir = layout.input_dir(day);
    std::fs::create_dir_all(&input_dir)
        .map_err(ScaffoldError::io("create directory", &input_dir))?;

    let example = layout.example_path(day);
    let example_existed = example.exists();
    open_append(&example)?;
    if example_existed {
        tracing::warn!("{} already existed, leaving it untouched", example.display());
    } else {
        tracing::info!("Created {}", example.display());
    }

    let bin_dir = layout.bin_dir();
    std::fs::create_dir_all(bin_dir).map_err(ScaffoldError::io("create directory", bin_dir))?;

    layout.language.write_stub(&program)?;
    tracing::info!("Created {}", program.display());

    Ok(Scaffolded {
        example,
        program,
        example_existed,
    })
}

pub(crate) fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ScaffoldError::io("open", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout(dir: &TempDir) -> Layout {
        Layout::new(dir.path(), &Config::default()).unwrap()
    }

    #[test]
    fn paths_follow_default_layout() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let day = Day::new(7).unwrap();

        assert_eq!(
            layout.example_path(day),
            dir.path().join("inputs").join("day_7").join("example.txt")
        );
        assert_eq!(
            layout.program_path(day),
            dir.path().join("src").join("bin").join("day_7.rs")
        );
        assert_eq!(
            layout.display_path(&layout.program_path(day)),
            "./src/bin/day_7.rs"
        );
    }

    #[test]
    fn language_names_are_case_insensitive() {
        assert_eq!(Language::from_name("Rust").unwrap(), Language::Rust);
        assert!(matches!(
            Language::from_name("python"),
            Err(ScaffoldError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn creates_both_files() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let day = Day::new(1).unwrap();

        let done = scaffold_day(&layout, day).unwrap();
        assert!(!done.example_existed);
        assert_eq!(std::fs::read(&done.example).unwrap().len(), 0);
        assert_eq!(std::fs::read_to_string(&done.program).unwrap(), rust::STUB);
    }

    #[test]
    fn existing_stub_is_never_overwritten() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let day = Day::new(2).unwrap();
        let program = layout.program_path(day);
        std::fs::create_dir_all(program.parent().unwrap()).unwrap();
        std::fs::write(&program, "// solved\n").unwrap();

        let err = scaffold_day(&layout, day).unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists(d) if d == day));
        assert_eq!(std::fs::read_to_string(&program).unwrap(), "// solved\n");
        assert!(!layout.input_dir(day).exists());
    }

    #[test]
    fn leftover_example_keeps_its_content() {
        let dir = TempDir::new().unwrap();
        let layout = layout(&dir);
        let day = Day::new(4).unwrap();
        std::fs::create_dir_all(layout.input_dir(day)).unwrap();
        std::fs::write(layout.example_path(day), "1\n2\n").unwrap();

        let done = scaffold_day(&layout, day).unwrap();
        assert!(done.example_existed);
        assert_eq!(std::fs::read_to_string(&done.example).unwrap(), "1\n2\n");
        assert!(done.program.exists());
    }

    #[test]
    fn io_errors_name_the_path() {
        let dir = TempDir::new().unwrap();
        // A regular file where the inputs directory should be
        std::fs::write(dir.path().join("inputs"), "").unwrap();
        let layout = layout(&dir);

        let err = scaffold_day(&layout, Day::new(5).unwrap()).unwrap_err();
        assert!(!err.is_rejection());
        assert!(err.to_string().contains("day_5"), "{err}");
    }
}
