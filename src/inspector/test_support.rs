// Fake emulator core for unit tests

use super::port::{
    EmulatorSnapshot, GraphicsBuffer, IntrospectionPort, MemorySlice, StepDriver, MEMORY_SIZE,
};
use super::tiles::TileIndices;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FakeError {
    #[error("memory range {start:#06X}..{end:#06X} out of bounds")]
    OutOfRange { start: usize, end: usize },
    #[error("graphics unavailable")]
    GraphicsUnavailable,
}

pub struct FakeCore {
    snapshot: EmulatorSnapshot,
    memory: Vec<u8>,
    steps: usize,
    frames: usize,
    fail_graphics: bool,
    fail_tile_lookup: bool,
}

impl FakeCore {
    pub fn with_pointers(pc: u16, sp: u16) -> Self {
        Self {
            snapshot: EmulatorSnapshot::with_pointers(pc, sp),
            memory: (0..MEMORY_SIZE).map(|addr| addr as u8).collect(),
            steps: 0,
            frames: 0,
            fail_graphics: false,
            fail_tile_lookup: false,
        }
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.snapshot.pc = pc;
    }

    pub fn truncate_memory(&mut self, size: usize) {
        self.memory.truncate(size);
    }

    pub fn fail_graphics(&mut self, fail: bool) {
        self.fail_graphics = fail;
    }

    pub fn fail_tile_lookup(&mut self, fail: bool) {
        self.fail_tile_lookup = fail;
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn tile_bytes(&self, x: u32, y: u32) -> Vec<u8> {
        let base = TileIndices::from_pixel(x, y).map_index() as usize * 16;
        (0..16).map(|i| (base + i) as u8).collect()
    }

    fn buffer(&self, width: usize, height: usize, fill: u8) -> Result<GraphicsBuffer, FakeError> {
        if self.fail_graphics {
            return Err(FakeError::GraphicsUnavailable);
        }
        Ok(GraphicsBuffer::new(width, height, vec![fill; width * height * 4]))
    }
}

impl IntrospectionPort for FakeCore {
    type Error = FakeError;

    fn snapshot(&self) -> EmulatorSnapshot {
        self.snapshot
    }

    fn memory_slice(&self, start: usize, end: usize) -> Result<MemorySlice, FakeError> {
        self.memory
            .get(start..end)
            .map(|bytes| MemorySlice::new(start, bytes.to_vec()))
            .ok_or(FakeError::OutOfRange { start, end })
    }

    fn tile_set_buffer(&self, outline_tiles: bool) -> Result<GraphicsBuffer, FakeError> {
        self.buffer(128, 192, if outline_tiles { 0x80 } else { 0x00 })
    }

    fn background_buffer(
        &self,
        outline_tiles: bool,
        show_viewport: bool,
    ) -> Result<GraphicsBuffer, FakeError> {
        let fill = (outline_tiles as u8) << 1 | show_viewport as u8;
        self.buffer(256, 256, fill)
    }

    fn tile_at(&self, x: u32, y: u32) -> Result<Vec<u8>, FakeError> {
        if self.fail_graphics || self.fail_tile_lookup {
            return Err(FakeError::GraphicsUnavailable);
        }
        Ok(self.tile_bytes(x, y))
    }

    fn memory_size(&self) -> usize {
        self.memory.len()
    }
}

impl StepDriver for FakeCore {
    fn step(&mut self) {
        self.steps += 1;
        self.snapshot.pc = self.snapshot.pc.wrapping_add(1);
    }

    fn step_frame(&mut self) {
        self.frames += 1;
        self.snapshot.pc = self.snapshot.pc.wrapping_add(0x100);
    }
}
