// View state store
//
// Holds the two values the inspector owns: whether the internals are
// expanded, and which memory row the memory view is anchored at. Emulator
// state is never stored here, only the row derived from it.

use super::offset::calculate_offset;
use super::port::IntrospectionPort;

/// Panel-owned view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Whether the internals are expanded
    show_internals: bool,

    /// Row index (8 bytes per row) the memory view is anchored at
    memory_offset: usize,
}

impl ViewState {
    /// Create the initial state: collapsed, anchored at the current PC
    pub fn new<P: IntrospectionPort + ?Sized>(port: &P) -> Self {
        let pc = port.snapshot().pc;
        tracing::debug!(pc, "view state created");
        Self {
            show_internals: false,
            memory_offset: calculate_offset(pc),
        }
    }

    pub fn show_internals(&self) -> bool {
        self.show_internals
    }

    pub fn memory_offset(&self) -> usize {
        self.memory_offset
    }

    /// Flip between collapsed and expanded
    ///
    /// The memory offset is kept so re-expanding shows the same window.
    pub fn toggle_visibility(&mut self) {
        self.show_internals = !self.show_internals;
        tracing::debug!(show_internals = self.show_internals, "visibility toggled");
    }

    /// Re-anchor the memory view at the PC as it is now
    pub fn program_counter_clicked<P: IntrospectionPort + ?Sized>(&mut self, port: &P) {
        let pc = port.snapshot().pc;
        self.track(pc);
    }

    /// Re-anchor the memory view at the SP as it is now
    pub fn stack_pointer_clicked<P: IntrospectionPort + ?Sized>(&mut self, port: &P) {
        let sp = port.snapshot().sp;
        self.track(sp);
    }

    /// Record the row the memory view scrolled to
    ///
    /// No bounds are applied; the memory window clamps when it is built.
    pub fn memory_view_scrolled(&mut self, new_offset: usize) {
        self.memory_offset = new_offset;
    }

    /// Anchor the memory view at the row containing `address`
    pub(super) fn track(&mut self, address: u16) {
        self.memory_offset = calculate_offset(address);
        tracing::debug!(
            address,
            memory_offset = self.memory_offset,
            "memory view re-anchored"
        );
    }
}
