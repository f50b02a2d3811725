// DMG Inspector Library
// Debugger panel for a Game Boy (DMG) emulator core

// Public modules
pub mod config;
pub mod error;
pub mod inspector;

// Re-export main types for convenience
pub use config::{GraphicsConfig, InspectorConfig, MemoryViewConfig};
pub use error::ConfigError;
pub use inspector::{
    calculate_offset, compose, tile_at, EmulatorSnapshot, GraphicsBuffer, HostEvent, Inspector,
    InspectorUi, IntrospectionPort, MemorySlice, MemoryWindow, Panel, PanelAction, StepDriver,
    TileQuery, ViewState,
};
