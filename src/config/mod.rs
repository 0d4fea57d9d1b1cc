//! `.revleak.toml` configuration: fallback inputs and output preferences.

mod core;
mod loader;

pub use self::core::{
    DefaultsConfig, OutputConfig, RevleakConfig, DEFAULT_CONVERSION_RATE,
    DEFAULT_MONTHLY_VISITORS, DEFAULT_ORDER_VALUE,
};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_dir, parse_config,
    CONFIG_FILE_NAME,
};
