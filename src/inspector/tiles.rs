// Tile coordinate mapper
//
// Converts a pixel position on the background buffer into the coordinates of
// the 8x8 tile that contains it.

use super::port::IntrospectionPort;

/// Width and height of a tile in pixels
pub const TILE_SIZE: u32 = 8;

/// Number of tiles per row of the DMG background map
pub const BACKGROUND_TILES_PER_ROW: u32 = 32;

/// Column and row of a tile in the background map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndices {
    pub x: u32,
    pub y: u32,
}

impl TileIndices {
    /// Tile containing background pixel `(x, y)`
    pub const fn from_pixel(x: u32, y: u32) -> Self {
        Self {
            x: x / TILE_SIZE,
            y: y / TILE_SIZE,
        }
    }

    /// Position of this tile in the row-major background map
    pub const fn map_index(self) -> u32 {
        self.y * BACKGROUND_TILES_PER_ROW + self.x
    }
}

/// Tile under a background pixel, with its raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileQuery {
    /// Raw tile bytes as returned by the emulator
    pub data: Vec<u8>,

    /// Tile coordinates
    pub indices: TileIndices,
}

impl TileQuery {
    /// Format the raw bytes as space separated hex
    pub fn format_bytes(&self) -> String {
        self.data
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Look up the tile under background pixel `(x, y)`
///
/// Errors from the port are returned unchanged.
pub fn tile_at<P: IntrospectionPort + ?Sized>(
    port: &P,
    x: u32,
    y: u32,
) -> Result<TileQuery, P::Error> {
    let data = port.tile_at(x, y)?;
    Ok(TileQuery {
        data,
        indices: TileIndices::from_pixel(x, y),
    })
}
