// Emulator introspection port
//
// The inspector never owns the emulator. Everything it shows is read through
// `IntrospectionPort`, and the only mutations it can trigger go through the
// parent-owned `StepDriver`.

use std::fmt;

/// Size of the DMG address space in bytes
pub const MEMORY_SIZE: usize = 0x10000;

/// Register state of the emulated CPU at one point in time
///
/// Snapshots are cheap copies and are re-read every time they are needed:
/// the emulator is advanced by its driver between any two reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmulatorSnapshot {
    /// Program Counter
    pub pc: u16,

    /// Stack Pointer
    pub sp: u16,

    /// Accumulator
    pub a: u8,

    /// Flags register (Z N H C in the upper nibble)
    pub f: u8,

    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
}

impl EmulatorSnapshot {
    /// Create a snapshot holding only a program counter and stack pointer
    pub fn with_pointers(pc: u16, sp: u16) -> Self {
        Self {
            pc,
            sp,
            ..Self::default()
        }
    }
}

impl fmt::Display for EmulatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC:{:04X} SP:{:04X} A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X}",
            self.pc, self.sp, self.a, self.f, self.b, self.c, self.d, self.e, self.h, self.l
        )
    }
}

/// Contiguous bytes read from emulator memory over `[start, start + len)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySlice {
    start: usize,
    bytes: Vec<u8>,
}

impl MemorySlice {
    /// Wrap bytes that were read starting at `start`
    pub fn new(start: usize, bytes: Vec<u8>) -> Self {
        Self { start, bytes }
    }

    /// First address covered by the slice
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last address covered by the slice
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read the byte at an absolute address, if the slice covers it
    pub fn get(&self, address: usize) -> Option<u8> {
        address
            .checked_sub(self.start)
            .and_then(|index| self.bytes.get(index).copied())
    }

    /// Iterate over `(row start address, row bytes)` pairs of `width` bytes
    ///
    /// The last row is shorter when the slice length is not a multiple of
    /// `width`.
    pub fn rows(&self, width: usize) -> impl Iterator<Item = (usize, &[u8])> + '_ {
        let start = self.start;
        self.bytes
            .chunks(width.max(1))
            .enumerate()
            .map(move |(i, chunk)| (start + i * width.max(1), chunk))
    }
}

/// An RGBA8 image produced by the emulator for tile or background display
///
/// The inspector does not look inside the pixels; they are handed to the
/// renderer as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl GraphicsBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Whether the pixel data holds exactly `width * height` RGBA pixels
    pub fn is_well_formed(&self) -> bool {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(4))
            .is_some_and(|len| len == self.pixels.len())
    }
}

/// Read access the inspector needs from the emulator core
///
/// Reads must be safe at any time, including mid-frame. Failures are reported
/// through `Self::Error` and are passed on to the inspector's caller
/// untouched; the inspector never substitutes placeholder data.
pub trait IntrospectionPort {
    type Error: std::error::Error;

    /// Current register state
    fn snapshot(&self) -> EmulatorSnapshot;

    /// Bytes in `[start, end)`
    ///
    /// Requests outside the emulator's memory are an error of the
    /// implementation, not something the caller clips.
    fn memory_slice(&self, start: usize, end: usize) -> Result<MemorySlice, Self::Error>;

    /// Rendered tile set
    fn tile_set_buffer(&self, outline_tiles: bool) -> Result<GraphicsBuffer, Self::Error>;

    /// Rendered background map, optionally with the viewport rectangle drawn in
    fn background_buffer(
        &self,
        outline_tiles: bool,
        show_viewport: bool,
    ) -> Result<GraphicsBuffer, Self::Error>;

    /// Raw bytes of the tile under background pixel `(x, y)`
    fn tile_at(&self, x: u32, y: u32) -> Result<Vec<u8>, Self::Error>;

    /// Size of the addressable memory, used to bound the memory window
    ///
    /// Values above [`MEMORY_SIZE`] are treated as [`MEMORY_SIZE`].
    fn memory_size(&self) -> usize {
        MEMORY_SIZE
    }
}

/// Emulation actions owned by the parent driver
///
/// The inspector calls these but does not implement them; each call runs to
/// completion before returning.
pub trait StepDriver {
    /// Execute a single instruction
    fn step(&mut self);

    /// Run until the next frame is complete
    fn step_frame(&mut self);
}
