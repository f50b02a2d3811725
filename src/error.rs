// Error types

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading or saving the inspector configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for the configuration
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be encoded
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The memory view must show at least one row and fit in the address space
    #[error("memory.visible_rows must be between 1 and {max} (got {got})")]
    VisibleRows { got: usize, max: usize },

    /// The graphics scale must be a positive finite number
    #[error("graphics.scale must be positive (got {0})")]
    Scale(f32),
}
