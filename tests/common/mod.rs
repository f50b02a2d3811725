// Common test utilities for inspector integration tests
//
// `FakeDmg` is a tiny stand-in for an emulator core: it understands just
// enough of the instruction set (NOP, JP, CALL, RET) to move the program
// counter and stack pointer around in believable ways.

#![allow(dead_code)]

use dmg_inspector::inspector::{
    EmulatorSnapshot, GraphicsBuffer, IntrospectionPort, MemorySlice, StepDriver, MEMORY_SIZE,
};

/// Instructions executed per `step_frame`
pub const STEPS_PER_FRAME: usize = 100;

/// Base of the tile data area
pub const TILE_DATA: usize = 0x8000;

/// Base of the first background map
pub const BACKGROUND_MAP: usize = 0x9800;

/// Errors reported by the fake core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DmgError {
    #[error("memory slice {start:#06X}..{end:#06X} outside {size:#06X} bytes")]
    SliceOutOfRange { start: usize, end: usize, size: usize },
    #[error("LCD is off")]
    LcdOff,
}

/// Minimal DMG-like core
pub struct FakeDmg {
    registers: EmulatorSnapshot,
    memory: Vec<u8>,
    lcd_on: bool,
    steps: usize,
    frames: usize,
}

impl FakeDmg {
    /// Core with the post-boot register state and an all-NOP memory
    pub fn new() -> Self {
        Self {
            registers: EmulatorSnapshot {
                pc: 0x0100,
                sp: 0xFFFE,
                a: 0x01,
                f: 0xB0,
                b: 0x00,
                c: 0x13,
                d: 0x00,
                e: 0xD8,
                h: 0x01,
                l: 0x4D,
            },
            memory: vec![0; MEMORY_SIZE],
            lcd_on: true,
            steps: 0,
            frames: 0,
        }
    }

    pub fn with_pc(pc: u16) -> Self {
        let mut dmg = Self::new();
        dmg.registers.pc = pc;
        dmg
    }

    /// Write bytes starting at `address`
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let start = address as usize;
        self.memory[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.registers.pc = pc;
    }

    pub fn set_lcd(&mut self, on: bool) {
        self.lcd_on = on;
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    fn read_word(&self, address: u16) -> u16 {
        let lo = self.memory[address as usize];
        let hi = self.memory[address.wrapping_add(1) as usize];
        u16::from_le_bytes([lo, hi])
    }

    fn push(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        self.memory[self.registers.sp as usize] = hi;
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        self.memory[self.registers.sp as usize] = lo;
    }

    fn pop(&mut self) -> u16 {
        let value = self.read_word(self.registers.sp);
        self.registers.sp = self.registers.sp.wrapping_add(2);
        value
    }

    fn execute(&mut self) {
        let pc = self.registers.pc;
        match self.memory[pc as usize] {
            // JP a16
            0xC3 => self.registers.pc = self.read_word(pc.wrapping_add(1)),
            // CALL a16
            0xCD => {
                let target = self.read_word(pc.wrapping_add(1));
                self.push(pc.wrapping_add(3));
                self.registers.pc = target;
            }
            // RET
            0xC9 => self.registers.pc = self.pop(),
            _ => self.registers.pc = pc.wrapping_add(1),
        }
        self.steps += 1;
    }

    fn buffer(&self, width: usize, height: usize) -> Result<GraphicsBuffer, DmgError> {
        if !self.lcd_on {
            return Err(DmgError::LcdOff);
        }
        Ok(GraphicsBuffer::new(
            width,
            height,
            vec![0xFF; width * height * 4],
        ))
    }
}

impl Default for FakeDmg {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionPort for FakeDmg {
    type Error = DmgError;

    fn snapshot(&self) -> EmulatorSnapshot {
        self.registers
    }

    fn memory_slice(&self, start: usize, end: usize) -> Result<MemorySlice, DmgError> {
        match self.memory.get(start..end) {
            Some(bytes) => Ok(MemorySlice::new(start, bytes.to_vec())),
            None => Err(DmgError::SliceOutOfRange {
                start,
                end,
                size: self.memory.len(),
            }),
        }
    }

    fn tile_set_buffer(&self, _outline_tiles: bool) -> Result<GraphicsBuffer, DmgError> {
        self.buffer(128, 192)
    }

    fn background_buffer(
        &self,
        _outline_tiles: bool,
        _show_viewport: bool,
    ) -> Result<GraphicsBuffer, DmgError> {
        self.buffer(256, 256)
    }

    fn tile_at(&self, x: u32, y: u32) -> Result<Vec<u8>, DmgError> {
        if !self.lcd_on {
            return Err(DmgError::LcdOff);
        }
        let map_entry = BACKGROUND_MAP + (y as usize / 8) * 32 + x as usize / 8;
        let tile = self.memory[map_entry] as usize;
        let base = TILE_DATA + tile * 16;
        Ok(self.memory[base..base + 16].to_vec())
    }
}

impl StepDriver for FakeDmg {
    fn step(&mut self) {
        self.execute();
    }

    fn step_frame(&mut self) {
        for _ in 0..STEPS_PER_FRAME {
            self.execute();
        }
        self.frames += 1;
    }
}

/// Install a log subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
