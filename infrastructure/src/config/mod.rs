//! Configuration file loading for edupulse
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EDUPULSE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./edupulse.toml` or `./.edupulse.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/edupulse/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_API_VERSION, DEFAULT_IAM_URL, FileBehaviorConfig, FileConfig, FileGenerationConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileReplConfig, FileTranscriptsConfig,
    FileWatsonxConfig,
};
pub use loader::ConfigLoader;
