use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# revleak configuration

# Used when the matching `revleak analyze` argument is omitted.
[defaults]
industry = "Fashion & Apparel"
monthly_visitors = 100000
conversion_rate = 2.5
average_order_value = 85.0

[output]
default_format = "terminal"
show_all_tests = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default config into `dir`, refusing to clobber unless `force`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!(path = %config_path.display(), "wrote default config");
    Ok(config_path)
}
