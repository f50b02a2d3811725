// Inspector UI - egui front-end for the composed panel
//
// Draws a `Panel` and reports what the user did as `PanelAction`s. Nothing
// here reads the emulator; the panel already holds everything to draw.

mod controls_panel;
mod cpu_panel;
mod graphics_panel;
mod memory_panel;

use super::panel::{Panel, PanelAction};
use crate::config::InspectorConfig;

/// Zoom used when none or an unusable one is given
pub const DEFAULT_SCALE: f32 = 2.0;

/// Header fill colour
const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(0x8B, 0xAC, 0x0F);

/// Header border colour
const HEADER_BORDER: egui::Color32 = egui::Color32::from_rgb(0x30, 0x62, 0x30);

/// egui state of the inspector panel
///
/// Holds only what egui needs between frames: the uploaded textures of the
/// graphics buffers and the image zoom.
///
/// # Example
///
/// ```no_run
/// use dmg_inspector::inspector::InspectorUi;
///
/// let mut inspector_ui = InspectorUi::new(2.0);
///
/// // In your egui render loop:
/// // let actions = inspector_ui.show(ui, &panel);
/// ```
pub struct InspectorUi {
    /// Zoom applied to the tile set and background images
    pub(super) scale: f32,

    /// Texture of the last tile set buffer
    pub(super) tile_set_texture: Option<egui::TextureHandle>,

    /// Texture of the last background buffer
    pub(super) background_texture: Option<egui::TextureHandle>,
}

impl InspectorUi {
    /// Create the UI state with the given zoom
    ///
    /// A zoom that is not a positive finite number is replaced by
    /// [`DEFAULT_SCALE`].
    pub fn new(scale: f32) -> Self {
        Self {
            scale: checked_scale(scale),
            tile_set_texture: None,
            background_texture: None,
        }
    }

    /// Create the UI state from the graphics section of a configuration
    pub fn from_config(config: &InspectorConfig) -> Self {
        Self::new(config.graphics.scale)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = checked_scale(scale);
    }

    /// Draw the panel
    ///
    /// # Arguments
    ///
    /// * `ui` - egui UI to draw into
    /// * `panel` - Panel composed for this frame
    ///
    /// # Returns
    ///
    /// The actions the user triggered this frame, in order
    pub fn show(&mut self, ui: &mut egui::Ui, panel: &Panel) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        ui.vertical(|ui| {
            show_header(ui, panel, &mut actions);

            let Some(body) = &panel.body else {
                return;
            };

            ui.add_space(4.0);

            // Registers and memory side by side
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| cpu_panel::show(ui, &body.registers, &mut actions));
                ui.separator();
                ui.vertical(|ui| memory_panel::show(ui, &body.memory, &mut actions));
            });

            ui.add_space(8.0);
            graphics_panel::show(self, ui, &body.graphics, &mut actions);

            if let Some(controls) = &body.controls {
                ui.add_space(8.0);
                controls_panel::show(ui, controls, &mut actions);
            }
        });

        actions
    }
}

impl Default for InspectorUi {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

/// Draw the header bar; clicking it toggles the panel
fn show_header(ui: &mut egui::Ui, panel: &Panel, actions: &mut Vec<PanelAction>) {
    let arrow = if panel.header.expanded { "▼" } else { "▶" };
    let text = egui::RichText::new(format!("{}  {}", arrow, panel.header.title))
        .strong()
        .color(egui::Color32::WHITE);

    let button = egui::Button::new(text)
        .fill(HEADER_FILL)
        .stroke(egui::Stroke::new(1.0, HEADER_BORDER))
        .min_size(egui::vec2(ui.available_width(), 24.0));

    if ui.add(button).clicked() {
        actions.push(PanelAction::ToggleVisibility);
    }
}

/// Zoom usable for drawing and for mapping pointer positions back to pixels
fn checked_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        tracing::warn!(scale, "unusable inspector scale, using default");
        DEFAULT_SCALE
    }
}
