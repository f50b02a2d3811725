// Configuration management
//
// Inspector display settings, stored as TOML.

use crate::error::ConfigError;
use crate::inspector::ui::DEFAULT_SCALE;
use crate::inspector::{ComposeOptions, GraphicsOptions, MEMORY_SIZE, ROW_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE: &str = "inspector_config.toml";

/// Inspector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Memory view settings
    pub memory: MemoryViewConfig,

    /// Tile set and background settings
    pub graphics: GraphicsConfig,
}

/// Memory view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryViewConfig {
    /// Number of 8-byte rows shown at once
    pub visible_rows: usize,

    /// Label $0000-$00FF as boot ROM
    pub boot_rom_mapped: bool,
}

/// Graphics view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Initial state of the tile outline checkbox
    pub outline_tiles: bool,

    /// Initial state of the viewport checkbox
    pub show_viewport: bool,

    /// Zoom applied to tile set and background images
    pub scale: f32,
}

impl Default for MemoryViewConfig {
    fn default() -> Self {
        Self {
            visible_rows: 16,
            boot_rom_mapped: true,
        }
    }
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            outline_tiles: false,
            show_viewport: true,
            scale: DEFAULT_SCALE,
        }
    }
}

impl InspectorConfig {
    /// Load configuration from a file or fall back to defaults
    ///
    /// A missing file is created with the defaults so there is something to
    /// edit next time. A file that exists but does not parse or validate is
    /// left untouched.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "creating default inspector config");
                let config = Self::default();
                if let Err(e) = config.save(path) {
                    tracing::warn!(error = %e, "could not save default inspector config");
                }
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default inspector config");
                Self::default()
            }
        }
    }

    /// Load and validate configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = MEMORY_SIZE / ROW_WIDTH;
        if !(1..=max).contains(&self.memory.visible_rows) {
            return Err(ConfigError::VisibleRows {
                got: self.memory.visible_rows,
                max,
            });
        }
        if !(self.graphics.scale.is_finite() && self.graphics.scale > 0.0) {
            return Err(ConfigError::Scale(self.graphics.scale));
        }
        Ok(())
    }

    /// Initial composition options
    ///
    /// `visible_rows` is clamped to what the address space holds even if the
    /// configuration was never validated.
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            visible_rows: self.memory.visible_rows.clamp(1, MEMORY_SIZE / ROW_WIDTH),
            boot_rom_mapped: self.memory.boot_rom_mapped,
            graphics: GraphicsOptions {
                outline_tiles: self.graphics.outline_tiles,
                show_viewport: self.graphics.show_viewport,
                probe: None,
            },
        }
    }
}
