// Panel composer
//
// Builds the whole inspector panel as plain data from the view state and a
// fresh read of the emulator. Composition is pure: the same inputs give the
// same panel, and nothing read here outlives the returned `Panel`.

use super::memory::MemoryWindow;
use super::port::{GraphicsBuffer, IntrospectionPort};
use super::registers::RegisterView;
use super::step::StepKind;
use super::tiles::{tile_at, TileQuery};
use super::view_state::ViewState;

/// Title shown in the panel header
pub const PANEL_TITLE: &str = "Internals";

/// User actions reported by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Header clicked
    ToggleVisibility,
    /// PC register clicked
    ProgramCounterClicked,
    /// SP register clicked
    StackPointerClicked,
    /// Memory view moved to a new anchor row
    MemoryViewScrolled(usize),
    /// Step button clicked
    Step,
    /// Step Frame button clicked
    StepFrame,
    /// A byte in the memory view clicked
    ByteClicked(u16),
    /// Tile outline checkbox changed
    SetOutlineTiles(bool),
    /// Viewport checkbox changed
    SetShowViewport(bool),
    /// Pointer over background pixel `(x, y)`
    BackgroundHovered { x: u32, y: u32 },
    /// Pointer left the background image
    BackgroundLeft,
}

/// Display options of the graphics section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsOptions {
    /// Draw tile boundaries on both buffers
    pub outline_tiles: bool,

    /// Draw the visible screen area on the background
    pub show_viewport: bool,

    /// Background pixel to look up the tile for
    pub probe: Option<(u32, u32)>,
}

impl Default for GraphicsOptions {
    fn default() -> Self {
        Self {
            outline_tiles: false,
            show_viewport: true,
            probe: None,
        }
    }
}

/// Everything `compose` needs besides the view state and the emulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Rows the memory view shows
    pub visible_rows: usize,

    /// Whether the boot ROM overlays the start of memory
    pub boot_rom_mapped: bool,

    pub graphics: GraphicsOptions,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            visible_rows: 16,
            boot_rom_mapped: true,
            graphics: GraphicsOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsView {
    pub tile_set: GraphicsBuffer,
    pub background: GraphicsBuffer,

    /// Tile under the probed background pixel
    pub hovered_tile: Option<TileQuery>,

    pub options: GraphicsOptions,
}

/// A clickable control and the action it reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlButton {
    pub label: &'static str,
    pub kind: StepKind,
}

impl ControlButton {
    pub fn action(self) -> PanelAction {
        match self.kind {
            StepKind::Instruction => PanelAction::Step,
            StepKind::Frame => PanelAction::StepFrame,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub buttons: Vec<ControlButton>,
}

impl Controls {
    fn stepping() -> Self {
        Self {
            buttons: vec![
                ControlButton {
                    label: "Step",
                    kind: StepKind::Instruction,
                },
                ControlButton {
                    label: "Step Frame",
                    kind: StepKind::Frame,
                },
            ],
        }
    }
}

/// Content shown while expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelBody {
    pub registers: RegisterView,
    pub memory: MemoryWindow,
    pub graphics: GraphicsView,

    /// Absent while the emulator is free-running
    pub controls: Option<Controls>,
}

/// The composed inspector panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub header: Header,
    pub body: Option<PanelBody>,
}

impl Panel {
    pub fn is_expanded(&self) -> bool {
        self.body.is_some()
    }

    /// Step controls present in the panel
    pub fn step_controls(&self) -> impl Iterator<Item = &ControlButton> {
        self.body
            .iter()
            .filter_map(|body| body.controls.as_ref())
            .flat_map(|controls| controls.buttons.iter())
    }
}

/// Compose the panel
///
/// # Arguments
///
/// * `state` - Current view state
/// * `port` - Emulator to read from
/// * `is_running` - Whether the emulator is free-running; step controls are
///   left out entirely when it is
/// * `options` - Memory and graphics display options
///
/// # Returns
///
/// The panel, or the first error the port reported
pub fn compose<P: IntrospectionPort + ?Sized>(
    state: &ViewState,
    port: &P,
    is_running: bool,
    options: &ComposeOptions,
) -> Result<Panel, P::Error> {
    let header = Header {
        title: PANEL_TITLE,
        expanded: state.show_internals(),
    };

    if !state.show_internals() {
        return Ok(Panel { header, body: None });
    }

    let snapshot = port.snapshot();
    let memory = MemoryWindow::read(
        port,
        &snapshot,
        state.memory_offset(),
        options.visible_rows,
        options.boot_rom_mapped,
    )?;

    let graphics_options = options.graphics;
    let tile_set = port.tile_set_buffer(graphics_options.outline_tiles)?;
    let background =
        port.background_buffer(graphics_options.outline_tiles, graphics_options.show_viewport)?;
    let hovered_tile = graphics_options
        .probe
        .map(|(x, y)| tile_at(port, x, y))
        .transpose()?;

    let controls = (!is_running).then(Controls::stepping);

    tracing::trace!(
        pc = snapshot.pc,
        first_row = memory.first_row,
        is_running,
        "panel composed"
    );

    Ok(Panel {
        header,
        body: Some(PanelBody {
            registers: RegisterView::new(snapshot),
            memory,
            graphics: GraphicsView {
                tile_set,
                background,
                hovered_tile,
                options: graphics_options,
            },
            controls,
        }),
    })
}
