use std::io::Write;
use std::path::Path;

use super::open_append;
use crate::error::{Result, ScaffoldError};

pub const EXTENSION: &str = "rs";

pub const STUB: &str = "fn main() {\n\ttodo!();\n}\n";

/// Writes the placeholder `main`. Callers have already checked that `path`
/// does not exist, so append mode only ever sees an empty file.
pub fn write_stub(path: &Path) -> Result<()> {
    let mut file = open_append(path)?;
    file.write_all(STUB.as_bytes())
        .map_err(ScaffoldError::io("write", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stub_is_tab_indented_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("day_1.rs");
        write_stub(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "fn main() {\n\ttodo!();\n}\n");
        assert_eq!(written.lines().count(), 3);
    }
}
