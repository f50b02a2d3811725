// Memory window - the part of the address space the memory view displays
//
// Provides:
// - Clamping of the anchor row to a full page of rows
// - A single `memory_slice` read per window
// - DMG memory map classification for row labels
// - Hex and ASCII row formatting

use super::offset::{row_address, ROW_WIDTH};
use super::port::{EmulatorSnapshot, IntrospectionPort, MEMORY_SIZE};

/// DMG memory map regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegionType {
    /// Boot ROM overlay ($0000-$00FF while mapped)
    BootRom,
    /// Fixed cartridge ROM bank ($0000-$3FFF)
    RomBank0,
    /// Switchable cartridge ROM bank ($4000-$7FFF)
    RomBankN,
    /// Video RAM ($8000-$9FFF)
    VideoRam,
    /// Cartridge RAM ($A000-$BFFF)
    ExternalRam,
    /// Work RAM ($C000-$DFFF)
    WorkRam,
    /// Mirror of work RAM ($E000-$FDFF)
    EchoRam,
    /// Sprite attribute table ($FE00-$FE9F)
    Oam,
    /// Unusable ($FEA0-$FEFF)
    Unusable,
    /// I/O registers ($FF00-$FF7F)
    IoRegisters,
    /// High RAM ($FF80-$FFFE)
    HighRam,
    /// Interrupt enable register ($FFFF)
    InterruptEnable,
}

impl MemoryRegionType {
    /// Classify an address
    ///
    /// # Arguments
    ///
    /// * `addr` - The address
    /// * `boot_rom_mapped` - Whether the boot ROM still overlays $0000-$00FF
    #[inline]
    pub fn classify(addr: u16, boot_rom_mapped: bool) -> Self {
        match addr {
            0x0000..=0x00FF if boot_rom_mapped => MemoryRegionType::BootRom,
            0x0000..=0x3FFF => MemoryRegionType::RomBank0,
            0x4000..=0x7FFF => MemoryRegionType::RomBankN,
            0x8000..=0x9FFF => MemoryRegionType::VideoRam,
            0xA000..=0xBFFF => MemoryRegionType::ExternalRam,
            0xC000..=0xDFFF => MemoryRegionType::WorkRam,
            0xE000..=0xFDFF => MemoryRegionType::EchoRam,
            0xFE00..=0xFE9F => MemoryRegionType::Oam,
            0xFEA0..=0xFEFF => MemoryRegionType::Unusable,
            0xFF00..=0xFF7F => MemoryRegionType::IoRegisters,
            0xFF80..=0xFFFE => MemoryRegionType::HighRam,
            0xFFFF => MemoryRegionType::InterruptEnable,
        }
    }

    /// Short label shown next to each row
    pub const fn label(self) -> &'static str {
        match self {
            MemoryRegionType::BootRom => "BIOS",
            MemoryRegionType::RomBank0 => "ROM0",
            MemoryRegionType::RomBankN => "ROMX",
            MemoryRegionType::VideoRam => "VRAM",
            MemoryRegionType::ExternalRam => "SRAM",
            MemoryRegionType::WorkRam => "WRAM",
            MemoryRegionType::EchoRam => "ECHO",
            MemoryRegionType::Oam => "OAM",
            MemoryRegionType::Unusable => "----",
            MemoryRegionType::IoRegisters => "I/O",
            MemoryRegionType::HighRam => "HRAM",
            MemoryRegionType::InterruptEnable => "IE",
        }
    }
}

/// One displayed row of memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRow {
    /// Address of the first byte in the row
    pub address: usize,

    /// Row contents (shorter than a full row only at the end of memory)
    pub bytes: Vec<u8>,

    /// Region of the first byte in the row
    pub region: MemoryRegionType,
}

impl MemoryRow {
    /// Whether `addr` falls within this row
    pub fn contains(&self, addr: u16) -> bool {
        let addr = addr as usize;
        addr >= self.address && addr < self.address + self.bytes.len()
    }

    /// Bytes as space separated hex
    pub fn format_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bytes as printable ASCII, with '.' for everything else
    pub fn format_ascii(&self) -> String {
        self.bytes
            .iter()
            .map(|&b| {
                if (0x20..=0x7E).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

/// Highest row the window may start at so that `visible_rows` rows fit
pub fn max_first_row(memory_size: usize, visible_rows: usize) -> usize {
    memory_size.div_ceil(ROW_WIDTH).saturating_sub(visible_rows)
}

/// Rows needed to show all of `memory_size` bytes
pub fn max_visible_rows(memory_size: usize) -> usize {
    memory_size.div_ceil(ROW_WIDTH)
}

/// Clamp a requested anchor row to a row the window can start at
pub fn clamp_first_row(offset: usize, memory_size: usize, visible_rows: usize) -> usize {
    offset.min(max_first_row(memory_size, visible_rows))
}

/// The rows of memory currently on screen
///
/// Built fresh for every composition; it reflects emulator memory at the time
/// of the read only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryWindow {
    /// Anchor row held by the view state
    pub requested_offset: usize,

    /// Row actually displayed first after clamping
    pub first_row: usize,

    /// Number of rows the view shows, at most the rows memory holds
    pub visible_rows: usize,

    /// Highest valid `first_row`
    pub max_first_row: usize,

    /// Program counter at the time of the read
    pub pc: u16,

    /// Stack pointer at the time of the read
    pub sp: u16,

    pub rows: Vec<MemoryRow>,
}

impl MemoryWindow {
    /// Read the window anchored at `offset`
    ///
    /// The anchor is clamped so the window never runs past the end of memory,
    /// and `visible_rows` to the number of rows memory holds. A port reporting
    /// more than the 16-bit address space is read as [`MEMORY_SIZE`] bytes.
    /// Errors from the port are returned unchanged.
    pub fn read<P: IntrospectionPort + ?Sized>(
        port: &P,
        snapshot: &EmulatorSnapshot,
        offset: usize,
        visible_rows: usize,
        boot_rom_mapped: bool,
    ) -> Result<Self, P::Error> {
        let memory_size = port.memory_size().min(MEMORY_SIZE);
        let visible_rows = visible_rows.min(max_visible_rows(memory_size));
        let max_first_row = max_first_row(memory_size, visible_rows);
        let first_row = clamp_first_row(offset, memory_size, visible_rows);

        let start = row_address(first_row);
        let end = start
            .saturating_add(visible_rows.saturating_mul(ROW_WIDTH))
            .min(memory_size);
        let slice = port.memory_slice(start, end)?;

        let rows = slice
            .rows(ROW_WIDTH)
            .map(|(address, bytes)| MemoryRow {
                address,
                bytes: bytes.to_vec(),
                region: MemoryRegionType::classify(address as u16, boot_rom_mapped),
            })
            .collect();

        Ok(Self {
            requested_offset: offset,
            first_row,
            visible_rows,
            max_first_row,
            pc: snapshot.pc,
            sp: snapshot.sp,
            rows,
        })
    }

    /// Anchor row after scrolling by `delta` rows from the displayed position
    pub fn scrolled_by(&self, delta: isize) -> usize {
        self.first_row
            .saturating_add_signed(delta)
            .min(self.max_first_row)
    }

    /// Anchor row one page up
    pub fn page_up(&self) -> usize {
        self.scrolled_by(-(self.visible_rows as isize))
    }

    /// Anchor row one page down
    pub fn page_down(&self) -> usize {
        self.scrolled_by(self.visible_rows as isize)
    }

    /// Row containing the program counter, if displayed
    pub fn pc_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(self.pc))
    }

    /// Row containing the stack pointer, if displayed
    pub fn sp_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(self.sp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::test_support::{FakeCore, FakeError};

    fn window(core: &FakeCore, offset: usize, rows: usize) -> MemoryWindow {
        let snapshot = core.snapshot();
        MemoryWindow::read(core, &snapshot, offset, rows, true).expect("memory read")
    }

    #[test]
    fn test_classify_boot_rom_overlay() {
        assert_eq!(
            MemoryRegionType::classify(0x0050, true),
            MemoryRegionType::BootRom
        );
        assert_eq!(
            MemoryRegionType::classify(0x0050, false),
            MemoryRegionType::RomBank0
        );
        assert_eq!(
            MemoryRegionType::classify(0x0100, true),
            MemoryRegionType::RomBank0
        );
    }

    #[test]
    fn test_classify_memory_map() {
        assert_eq!(
            MemoryRegionType::classify(0x4000, false),
            MemoryRegionType::RomBankN
        );
        assert_eq!(
            MemoryRegionType::classify(0x9FFF, false),
            MemoryRegionType::VideoRam
        );
        assert_eq!(
            MemoryRegionType::classify(0xA000, false),
            MemoryRegionType::ExternalRam
        );
        assert_eq!(
            MemoryRegionType::classify(0xC000, false),
            MemoryRegionType::WorkRam
        );
        assert_eq!(
            MemoryRegionType::classify(0xE000, false),
            MemoryRegionType::EchoRam
        );
        assert_eq!(
            MemoryRegionType::classify(0xFE00, false),
            MemoryRegionType::Oam
        );
        assert_eq!(
            MemoryRegionType::classify(0xFEA0, false),
            MemoryRegionType::Unusable
        );
        assert_eq!(
            MemoryRegionType::classify(0xFF40, false),
            MemoryRegionType::IoRegisters
        );
        assert_eq!(
            MemoryRegionType::classify(0xFFFE, false),
            MemoryRegionType::HighRam
        );
        assert_eq!(
            MemoryRegionType::classify(0xFFFF, false),
            MemoryRegionType::InterruptEnable
        );
    }

    #[test]
    fn test_window_reads_rows() {
        let core = FakeCore::with_pointers(0x0104, 0xFFFE);
        let window = window(&core, 0x20, 4);

        assert_eq!(window.first_row, 0x20);
        assert_eq!(window.rows.len(), 4);
        assert_eq!(window.rows[0].address, 0x100);
        assert_eq!(window.rows[3].address, 0x118);
        assert_eq!(window.rows[0].bytes, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(window.pc_row(), Some(0));
        assert_eq!(window.sp_row(), None);
    }

    #[test]
    fn test_window_clamps_to_last_page() {
        let core = FakeCore::with_pointers(0, 0xFFFE);
        let window = window(&core, 100_000, 16);

        assert_eq!(window.requested_offset, 100_000);
        assert_eq!(window.first_row, 0x2000 - 16);
        assert_eq!(window.rows.len(), 16);
        assert_eq!(window.rows[15].address, 0xFFF8);
        assert_eq!(window.sp_row(), Some(15));
    }

    #[test]
    fn test_window_on_small_memory() {
        let mut core = FakeCore::with_pointers(0, 0);
        core.truncate_memory(20);
        let window = window(&core, 5, 16);

        assert_eq!(window.first_row, 0);
        assert_eq!(window.rows.len(), 3);
        assert_eq!(window.rows[2].bytes.len(), 4);
    }

    /// Port reporting a memory size unrelated to what it can serve
    struct Misreported(FakeCore, usize);

    impl IntrospectionPort for Misreported {
        type Error = FakeError;
        fn snapshot(&self) -> EmulatorSnapshot {
            self.0.snapshot()
        }
        fn memory_slice(
            &self,
            start: usize,
            end: usize,
        ) -> Result<crate::inspector::MemorySlice, FakeError> {
            self.0.memory_slice(start, end)
        }
        fn tile_set_buffer(
            &self,
            outline: bool,
        ) -> Result<crate::inspector::GraphicsBuffer, FakeError> {
            self.0.tile_set_buffer(outline)
        }
        fn background_buffer(
            &self,
            outline: bool,
            viewport: bool,
        ) -> Result<crate::inspector::GraphicsBuffer, FakeError> {
            self.0.background_buffer(outline, viewport)
        }
        fn tile_at(&self, x: u32, y: u32) -> Result<Vec<u8>, FakeError> {
            self.0.tile_at(x, y)
        }
        fn memory_size(&self) -> usize {
            self.1
        }
    }

    #[test]
    fn test_window_propagates_port_error() {
        let mut core = FakeCore::with_pointers(0, 0);
        core.truncate_memory(0x1000);
        let port = Misreported(core, MEMORY_SIZE);
        let snapshot = port.snapshot();
        let result = MemoryWindow::read(&port, &snapshot, 0x200, 16, false);

        assert_eq!(
            result,
            Err(FakeError::OutOfRange {
                start: 0x1000,
                end: 0x1080
            })
        );
    }

    #[test]
    fn test_window_caps_oversized_memory() {
        let port = Misreported(FakeCore::with_pointers(0, 0), 0x20000);
        let snapshot = port.snapshot();
        let window =
            MemoryWindow::read(&port, &snapshot, usize::MAX, 16, false).expect("memory read");

        assert_eq!(window.max_first_row, 0x2000 - 16);
        assert_eq!(window.rows[15].address, 0xFFF8);
        assert_eq!(
            window.rows[15].region,
            MemoryRegionType::classify(0xFFF8, false)
        );
    }

    #[test]
    fn test_window_with_huge_row_count() {
        let core = FakeCore::with_pointers(0, 0);
        let window = window(&core, 5, usize::MAX / 4);

        assert_eq!(window.visible_rows, 0x2000);
        assert_eq!(window.first_row, 0);
        assert_eq!(window.max_first_row, 0);
        assert_eq!(window.rows.len(), 0x2000);
        assert_eq!(window.page_down(), 0);
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let core = FakeCore::with_pointers(0, 0);
        let top = window(&core, 0, 16);
        assert_eq!(top.scrolled_by(-1), 0);
        assert_eq!(top.page_down(), 16);

        let bottom = window(&core, usize::MAX, 16);
        assert_eq!(bottom.scrolled_by(1), bottom.max_first_row);
        assert_eq!(bottom.page_up(), bottom.max_first_row - 16);
    }

    #[test]
    fn test_row_formatting() {
        let row = MemoryRow {
            address: 0x0134,
            bytes: b"TETRIS\x00\xFF".to_vec(),
            region: MemoryRegionType::RomBank0,
        };
        assert_eq!(row.format_hex(), "54 45 54 52 49 53 00 FF");
        assert_eq!(row.format_ascii(), "TETRIS..");
        assert!(row.contains(0x0134));
        assert!(row.contains(0x013B));
        assert!(!row.contains(0x013C));
    }
}
