//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, ResolveOptions, ResolvedConfig, Tv2Config,
    resolve_config,
};
