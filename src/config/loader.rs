use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RevleakConfig;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".revleak.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<RevleakConfig> {
    toml::from_str::<RevleakConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Load an explicitly requested config file; every failure is an error.
pub fn load_config_from(path: &Path) -> Result<RevleakConfig> {
    let contents = read_config_file(path)
        .map_err(Error::from)
        .context(format!("reading {}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "loaded explicit config");
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<RevleakConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Missing files are the normal case while walking up
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the first readable config file.
pub fn load_config_from_dir(start: PathBuf) -> RevleakConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RevleakConfig::default()
        })
}

pub fn load_config() -> RevleakConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RevleakConfig::default()
        }
    }
}
