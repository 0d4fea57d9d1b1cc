pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Open the report destination: a file (parents created) or stdout.
pub fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            Ok(Box::new(fs::File::create(path)?))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_destination_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports").join("march").join("out.md");

        {
            let mut dest = open_destination(Some(&nested)).unwrap();
            dest.write_all(b"# report").unwrap();
        }

        assert_eq!(read_file(&nested).unwrap(), "# report");
    }
}
