// Inspector - debugger panel for a DMG emulator
//
// This module provides:
// - View state (expanded/collapsed, memory view anchor) kept in sync with an
//   emulator that is advanced by someone else
// - Step controls that keep the executed instruction in view
// - Windowed memory, register and graphics views read through a port
// - An egui front-end that draws the composed panel and reports actions
//
// The emulator is never owned or cached here. Every composition reads it
// again through `IntrospectionPort`.

pub mod memory;
pub mod offset;
pub mod panel;
pub mod port;
pub mod registers;
pub mod step;
pub mod tiles;
pub mod ui;
pub mod view_state;

#[cfg(test)]
pub(crate) mod test_support;

use crate::config::InspectorConfig;

pub use memory::{MemoryRegionType, MemoryRow, MemoryWindow};
pub use offset::{calculate_offset, ROW_WIDTH};
pub use panel::{
    compose, ComposeOptions, ControlButton, Controls, GraphicsOptions, GraphicsView, Header,
    Panel, PanelAction, PanelBody,
};
pub use port::{
    EmulatorSnapshot, GraphicsBuffer, IntrospectionPort, MemorySlice, StepDriver, MEMORY_SIZE,
};
pub use registers::{Flag, RegisterView};
pub use step::{do_step, do_step_frame, StepKind};
pub use tiles::{tile_at, TileIndices, TileQuery, TILE_SIZE};
pub use ui::InspectorUi;
pub use view_state::ViewState;

/// Events the inspector hands back to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A byte in the memory view was clicked
    ///
    /// The inspector attaches no meaning to this; a host can use it to set a
    /// breakpoint.
    ByteClicked(u16),
}

/// The inspector panel
///
/// Owns the view state and display options. The emulator is passed in to
/// every call that needs it.
///
/// # Example
///
/// ```ignore
/// let mut inspector = Inspector::new(&machine, &InspectorConfig::default());
///
/// // Every frame:
/// let panel = inspector.compose(&machine, is_running)?;
/// for action in inspector_ui.show(ui, &panel) {
///     inspector.dispatch(action, &mut machine, is_running);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Inspector {
    state: ViewState,
    options: ComposeOptions,
}

impl Inspector {
    /// Create an inspector anchored at the emulator's current PC
    pub fn new<P: IntrospectionPort + ?Sized>(port: &P, config: &InspectorConfig) -> Self {
        Self {
            state: ViewState::new(port),
            options: config.compose_options(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    pub fn show_internals(&self) -> bool {
        self.state.show_internals()
    }

    pub fn memory_offset(&self) -> usize {
        self.state.memory_offset()
    }

    pub fn toggle_visibility(&mut self) {
        self.state.toggle_visibility();
    }

    pub fn program_counter_clicked<P: IntrospectionPort + ?Sized>(&mut self, port: &P) {
        self.state.program_counter_clicked(port);
    }

    pub fn stack_pointer_clicked<P: IntrospectionPort + ?Sized>(&mut self, port: &P) {
        self.state.stack_pointer_clicked(port);
    }

    pub fn memory_view_scrolled(&mut self, new_offset: usize) {
        self.state.memory_view_scrolled(new_offset);
    }

    /// Step one instruction; see [`step::do_step`]
    pub fn do_step<H>(&mut self, host: &mut H) -> EmulatorSnapshot
    where
        H: IntrospectionPort + StepDriver + ?Sized,
    {
        step::do_step(&mut self.state, host)
    }

    /// Step one frame; see [`step::do_step_frame`]
    pub fn do_step_frame<H>(&mut self, host: &mut H) -> EmulatorSnapshot
    where
        H: IntrospectionPort + StepDriver + ?Sized,
    {
        step::do_step_frame(&mut self.state, host)
    }

    /// Forget the hovered background pixel
    ///
    /// A host whose `compose` keeps failing on the tile lookup can call this
    /// to get the panel drawn again.
    pub fn clear_probe(&mut self) {
        self.options.graphics.probe = None;
    }

    /// Tile under background pixel `(x, y)`
    pub fn tile_at<P: IntrospectionPort + ?Sized>(
        &self,
        port: &P,
        x: u32,
        y: u32,
    ) -> Result<TileQuery, P::Error> {
        tiles::tile_at(port, x, y)
    }

    /// Compose the panel for this frame
    pub fn compose<P: IntrospectionPort + ?Sized>(
        &self,
        port: &P,
        is_running: bool,
    ) -> Result<Panel, P::Error> {
        panel::compose(&self.state, port, is_running, &self.options)
    }

    /// Apply an action reported by the front-end
    ///
    /// Step actions that arrive while the emulator is running are dropped:
    /// the controls were not on screen, so the action is stale.
    ///
    /// # Returns
    ///
    /// An event for the host, if the action concerns it
    pub fn dispatch<H>(
        &mut self,
        action: PanelAction,
        host: &mut H,
        is_running: bool,
    ) -> Option<HostEvent>
    where
        H: IntrospectionPort + StepDriver + ?Sized,
    {
        tracing::trace!(?action, "dispatch");

        match action {
            PanelAction::ToggleVisibility => self.toggle_visibility(),
            PanelAction::ProgramCounterClicked => self.program_counter_clicked(&*host),
            PanelAction::StackPointerClicked => self.stack_pointer_clicked(&*host),
            PanelAction::MemoryViewScrolled(offset) => self.memory_view_scrolled(offset),
            PanelAction::Step | PanelAction::StepFrame if is_running => {
                tracing::warn!(?action, "step requested while running, ignored");
            }
            PanelAction::Step => {
                self.do_step(host);
            }
            PanelAction::StepFrame => {
                self.do_step_frame(host);
            }
            PanelAction::SetOutlineTiles(outline) => {
                self.options.graphics.outline_tiles = outline;
            }
            PanelAction::SetShowViewport(show) => {
                self.options.graphics.show_viewport = show;
            }
            PanelAction::BackgroundHovered { x, y } => {
                self.options.graphics.probe = Some((x, y));
            }
            PanelAction::BackgroundLeft => self.clear_probe(),
            PanelAction::ByteClicked(address) => return Some(HostEvent::ByteClicked(address)),
        }

        None
    }
}
